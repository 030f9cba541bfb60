//! A one-line command syntax over `Matrix<i64>`, one command per matrix operation.
//!
//! ```text
//! add -1 10          add 1 7,8,9        remove 0          move 1 3
//! cell 0 0 2 0 [fill]                    rect [fill]       square [fill]
//! set [[1,2],[3]]
//! ```

use std::mem;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use itertools::Itertools;
use log::debug;

use crate::matrix::{self, ColumnValue, Matrix};
use crate::JaggedError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add {
        index: isize,
        value: ColumnValue<i64>,
    },
    Remove {
        index: isize,
    },
    Move {
        index: isize,
        to: isize,
    },
    Cell {
        from_row: isize,
        from_column: isize,
        to_row: isize,
        to_column: isize,
        fill: i64,
    },
    Rect {
        fill: i64,
    },
    Square {
        fill: i64,
    },
    Set(Matrix<i64>),
}

fn word<'a>(words: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    words
        .next()
        .ok_or(JaggedError::Syntax)
        .with_context(|| anyhow!("expected {what}"))
}

fn int<T: FromStr>(s: &str) -> Result<T> {
    s.parse()
        .map_err(|_| JaggedError::Syntax)
        .with_context(|| anyhow!("{s:?} is not an integer"))
}

fn fill<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<i64> {
    words.next().map_or(Ok(0), int::<i64>)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let verb = word(&mut words, "a command")?;

        let command = match verb {
            "add" => {
                let index = int(word(&mut words, "a column index")?)?;
                let value = word(&mut words, "a value")?;
                let value = if value.contains(',') {
                    ColumnValue::PerRow(value.split(',').map(int::<i64>).collect::<Result<_>>()?)
                } else {
                    ColumnValue::Single(int::<i64>(value)?)
                };
                Command::Add { index, value }
            }
            "remove" => Command::Remove {
                index: int(word(&mut words, "a column index")?)?,
            },
            "move" => Command::Move {
                index: int(word(&mut words, "a column index")?)?,
                to: int(word(&mut words, "a destination column")?)?,
            },
            "cell" => Command::Cell {
                from_row: int(word(&mut words, "a source row")?)?,
                from_column: int(word(&mut words, "a source column")?)?,
                to_row: int(word(&mut words, "a destination row")?)?,
                to_column: int(word(&mut words, "a destination column")?)?,
                fill: fill(&mut words)?,
            },
            "rect" => Command::Rect {
                fill: fill(&mut words)?,
            },
            "square" => Command::Square {
                fill: fill(&mut words)?,
            },
            "set" => {
                let json = line["set".len()..].trim();
                let rows = serde_json::from_str(json)
                    .map_err(|_| JaggedError::Syntax)
                    .with_context(|| anyhow!("{json:?} is not a list of integer lists"))?;
                return Ok(Command::Set(rows));
            }
            _ => {
                return Err(JaggedError::Syntax).with_context(|| anyhow!("unknown command {verb:?}"))
            }
        };

        if let Some(extra) = words.next() {
            return Err(JaggedError::Syntax)
                .with_context(|| anyhow!("unexpected {extra:?} after {verb}"));
        }
        Ok(command)
    }
}

impl Command {
    pub fn apply(&self, m: &[Vec<i64>]) -> Result<Matrix<i64>> {
        debug!("apply: {self:?}");
        use Command::*;
        match self {
            Add { index, value } => matrix::add_column(m, *index, value.clone()),
            Remove { index } => matrix::remove_column(m, *index),
            Move { index, to } => matrix::move_column(m, *index, *to),
            Cell {
                from_row,
                from_column,
                to_row,
                to_column,
                fill,
            } => {
                check_growth(m, *to_row, *to_column)?;
                matrix::move_cell(m, *from_row, *from_column, *to_row, *to_column, *fill)
            }
            Rect { fill } => {
                check_cells(m, false)?;
                Ok(matrix::to_rectangular(m, *fill))
            }
            Square { fill } => {
                check_cells(m, true)?;
                Ok(matrix::to_square(m, *fill))
            }
            Set(rows) => Ok(rows.clone()),
        }
    }
}

/// How far past the current edge of the matrix a `cell` command may move a cell.
pub const MAX_GROWTH: usize = 1 << 16;

fn check_growth(m: &[Vec<i64>], to_row: isize, to_column: isize) -> Result<()> {
    let rows = m.len();
    let columns = m.iter().map(Vec::len).max().unwrap_or(0);
    for (index, edge, what) in [(to_row, rows, "row"), (to_column, columns, "column")] {
        if index > 0 && index.unsigned_abs() > edge + MAX_GROWTH {
            return Err(JaggedError::range(format!(
                "destination {what} {index} is more than {MAX_GROWTH} past the edge"
            )))
            .context("moving a cell");
        }
    }
    Ok(())
}

/// The most cells `rect` or `square` will pad a matrix out to.
pub const MAX_CELLS: usize = 1 << 24;

fn check_cells(m: &[Vec<i64>], square: bool) -> Result<()> {
    let columns = m.iter().map(Vec::len).max().unwrap_or(0);
    let rows = if square { m.len().max(columns) } else { m.len() };
    match rows.checked_mul(columns) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(JaggedError::range(format!(
            "padding to {rows}x{columns} is more than {MAX_CELLS} cells"
        )))
        .context("normalising the matrix"),
    }
}

/// Apply each non-blank line (or `;`-separated command) of `script` in turn.
pub fn run_script(initial: &[Vec<i64>], script: &str) -> Result<Matrix<i64>> {
    let commands = script
        .split(|c: char| c == '\n' || c == ';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect_vec();
    if commands.is_empty() {
        bail!("empty script");
    }

    let mut current = initial.to_vec();
    for line in commands {
        let command: Command = line.parse()?;
        current = command
            .apply(&current)
            .with_context(|| anyhow!("running {line:?}"))?;
    }
    Ok(current)
}

/// Editing state behind the REPL: the current matrix and the one before the last edit.
#[derive(Debug, Default)]
pub struct Session {
    current: Matrix<i64>,
    previous: Option<Matrix<i64>>,
}

impl Session {
    pub fn current(&self) -> &Matrix<i64> {
        &self.current
    }

    /// Run one line: a [`Command`], `undo`, or `show`. A failed command leaves the
    /// matrix as it was.
    pub fn eval(&mut self, line: &str) -> Result<&Matrix<i64>> {
        match line.trim() {
            "show" => (),
            "undo" => match self.previous.take() {
                Some(previous) => self.current = previous,
                None => bail!("nothing to undo"),
            },
            line => {
                let next = line.parse::<Command>()?.apply(&self.current)?;
                self.previous = Some(mem::replace(&mut self.current, next));
            }
        }
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() -> Result<()> {
        assert_eq!(
            "add -1 10".parse::<Command>()?,
            Command::Add {
                index: -1,
                value: ColumnValue::Single(10)
            }
        );
        assert_eq!(
            "add 1 7,8,9".parse::<Command>()?,
            Command::Add {
                index: 1,
                value: ColumnValue::PerRow(vec![7, 8, 9])
            }
        );
        assert_eq!("  move 1 3 ".parse::<Command>()?, Command::Move { index: 1, to: 3 });
        assert_eq!(
            "cell 0 0 2 0".parse::<Command>()?,
            Command::Cell {
                from_row: 0,
                from_column: 0,
                to_row: 2,
                to_column: 0,
                fill: 0
            }
        );
        assert_eq!("square 9".parse::<Command>()?, Command::Square { fill: 9 });
        assert_eq!(
            "set [[1, 2], []]".parse::<Command>()?,
            Command::Set(vec![vec![1, 2], vec![]])
        );
        Ok(())
    }

    #[test]
    fn parse_failures() {
        for bad in ["", "frobnicate", "add 1", "remove x", "move 1 2 3", "set [1,2]", "rect 0 0"] {
            let err = bad.parse::<Command>().unwrap_err();
            assert!(
                matches!(JaggedError::extract(&err), Some(JaggedError::Syntax)),
                "{bad:?}: {err:?}"
            );
        }
    }

    #[test]
    fn script() -> Result<()> {
        let m = run_script(&[], "set [[1,2],[3]]; rect 0\nadd 0 9")?;
        assert_eq!(m, vec![vec![9, 1, 2], vec![9, 3, 0]]);
        Ok(())
    }

    #[test]
    fn session_undo() -> Result<()> {
        let mut session = Session::default();
        session.eval("set [[1,2,3]]")?;
        session.eval("remove -1")?;
        assert_eq!(session.current(), &vec![vec![1, 2]]);

        assert!(session.eval("remove 5").is_err());
        assert_eq!(session.eval("show")?, &vec![vec![1, 2]]);

        session.eval("undo")?;
        assert_eq!(session.current(), &vec![vec![1, 2, 3]]);
        // only the last edit is kept
        assert!(session.eval("undo").is_err());
        assert_eq!(session.current(), &vec![vec![1, 2, 3]]);
        Ok(())
    }

    #[test]
    fn cell_growth_is_bounded() -> Result<()> {
        let err = run_script(&[vec![1, 2, 3]], "cell 0 0 0 99999999999999").unwrap_err();
        assert!(matches!(JaggedError::extract(&err), Some(JaggedError::Range(_))));
        let err = run_script(&[vec![1, 2, 3]], "cell 0 0 99999999999999 0").unwrap_err();
        assert!(matches!(JaggedError::extract(&err), Some(JaggedError::Range(_))));

        let far = MAX_GROWTH as isize + 3;
        let m = run_script(&[vec![1, 2, 3]], &format!("cell 0 0 0 {far}"))?;
        assert_eq!(m[0].len(), far as usize + 1);
        assert_eq!(m[0][far as usize], 1);
        Ok(())
    }

    #[test]
    fn padding_is_bounded() -> Result<()> {
        let wide = run_script(&[vec![1]], "cell 0 0 60000 60000")?;
        for script in ["square", "rect 0"] {
            let err = run_script(&wide, script).unwrap_err();
            assert!(matches!(JaggedError::extract(&err), Some(JaggedError::Range(_))));
        }
        assert_eq!(run_script(&[vec![1], vec![]], "square")?, vec![vec![1], vec![0]]);
        Ok(())
    }
}
