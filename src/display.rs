use std::fmt;

use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

pub trait GridDisplay {
    fn to_display(&self) -> String;
}

impl<T: fmt::Display> GridDisplay for [Vec<T>] {
    fn to_display(&self) -> String {
        let cells = self
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect_vec())
            .collect_vec();
        let opts = FormatOptions::default_for_grid(cells.iter().map(Vec::len).sum(), false);
        let mut s = String::new();
        format_grid(&cells, &mut s, &opts);
        s
    }
}

impl<T: fmt::Display> GridDisplay for Vec<Vec<T>> {
    fn to_display(&self) -> String {
        self.as_slice().to_display()
    }
}

/// Default threshold, below this cell count, we don't ellipsize
const GRID_MANY_CELL_LIMIT: usize = 500;
/// Limit for the number of rows before overflowing with an ellipsis.
/// An odd number because one row uses the same space as the ellipsis.
const ROW_LIMIT: usize = 11;
/// Limit for the cells in a row.
const CELL_LIMIT: usize = 11;

/// The string used as an ellipsis.
const ELLIPSIS: &str = "...";

#[derive(Copy, Clone, Debug)]
struct FormatOptions {
    row_limit: usize,
    cell_limit: usize,
}

impl FormatOptions {
    fn default_for_grid(ncells: usize, no_limit: bool) -> Self {
        let default = Self {
            row_limit: ROW_LIMIT,
            cell_limit: CELL_LIMIT,
        };
        default.set_no_limit(no_limit || ncells < GRID_MANY_CELL_LIMIT)
    }

    fn set_no_limit(mut self, no_limit: bool) -> Self {
        if no_limit {
            self.row_limit = usize::MAX;
            self.cell_limit = usize::MAX;
        }
        self
    }
}

/// Formats the contents of a list of items, using an ellipsis to indicate when
/// the `length` of the list is greater than `limit`.
fn format_with_overflow(
    f: &mut String,
    length: usize,
    limit: usize,
    separator: &str,
    fmt_elem: &mut dyn FnMut(&mut String, usize),
) {
    if length == 0 {
        // no-op
    } else if length <= limit {
        fmt_elem(f, 0);
        for i in 1..length {
            f.push_str(separator);
            fmt_elem(f, i)
        }
    } else {
        let edge = limit / 2;
        fmt_elem(f, 0);
        for i in 1..edge {
            f.push_str(separator);
            fmt_elem(f, i);
        }
        f.push_str(separator);
        f.push_str(ELLIPSIS);
        for i in length - edge..length {
            f.push_str(separator);
            fmt_elem(f, i)
        }
    }
}

// right aligned, each column as wide as its widest cell; short rows just stop early
fn format_grid(cells: &[Vec<String>], f: &mut String, opts: &FormatOptions) {
    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
    let widths = (0..columns)
        .map(|j| {
            cells
                .iter()
                .filter_map(|row| row.get(j))
                .map(|c| c.width())
                .max()
                .unwrap_or(0)
        })
        .collect_vec();

    format_with_overflow(f, cells.len(), opts.row_limit, "\n", &mut |f, i| {
        let row = &cells[i];
        format_with_overflow(f, row.len(), opts.cell_limit, " ", &mut |f, j| {
            let cell = &row[j];
            f.push_str(&" ".repeat(widths[j].saturating_sub(cell.width())));
            f.push_str(cell);
        });
    });
}
