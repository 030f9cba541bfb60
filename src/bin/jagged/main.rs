use std::collections::VecDeque;

use anyhow::{anyhow, Context, Result};
use cfg_if::cfg_if;
use jagged::{GridDisplay, Session};
use log::{debug, warn};

#[cfg(feature = "tui")]
mod tui;

fn main() -> Result<()> {
    env_logger::init();

    println!("jagged {}", env!("CARGO_PKG_VERSION"));

    cfg_if! {
    if #[cfg(feature = "tui")] {
        tui::drive()?
    } else {
        plain_drive()?
    }
    }

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn plain_drive() -> Result<()> {
    use std::io::{self, Write};

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl(|| {
        stdout.write_all(b"   ")?; //prompt
        stdout.flush()?;
        let mut buffer = String::new();
        Ok(match stdin.read_line(&mut buffer)? {
            0 => None,
            _ => Some(buffer),
        })
    })
}

/// Feed lines from `next_line` to a fresh session until it runs dry or sees `exit`.
fn repl(mut next_line: impl FnMut() -> Result<Option<String>>) -> Result<()> {
    let mut session = Session::default();
    while let Some(line) = next_line()? {
        if eval(&line, &mut session)? == EvalState::Done {
            break;
        }
    }
    Ok(())
}

#[derive(Eq, PartialEq)]
enum EvalState {
    Regular,
    Done,
}

fn eval(buffer: &str, session: &mut Session) -> Result<EvalState> {
    let buffer = buffer.trim();
    if "exit" == buffer {
        return Ok(EvalState::Done);
    }
    if buffer.is_empty() {
        return Ok(EvalState::Regular);
    }

    match session
        .eval(buffer)
        .with_context(|| anyhow!("evaluating {:?}", buffer))
    {
        Ok(matrix) => {
            debug!("{} rows", matrix.len());
            println!("{}", matrix.to_display());
        }
        Err(e) => {
            warn!("{:?}", e);
            let mut stack: VecDeque<_> = e.chain().rev().collect();

            let top = stack
                .pop_front()
                .expect("chain contains at least the error");
            cfg_if! {
            if #[cfg(feature = "tui")] {
                use colored::Colorize;
                println!("{} {}", "error:".red().bold(), top);
            } else {
                println!("error: {}", top);
            }
            }

            for error in stack {
                println!("cause: {}", error);
            }
        }
    }

    Ok(EvalState::Regular)
}
