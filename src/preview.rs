// src/preview.rs

use crate::console::Console;
use crate::table::TripTable;
use anyhow::{Context, Result};
use arrow::util::pretty::pretty_format_batches;
use std::{
    io::{BufRead, Write},
    ops::Range,
};
use tracing::debug;

/// Rows revealed per window.
pub const WINDOW: usize = 5;

/// Offer the filtered rows five at a time. Returns the row ranges shown.
pub fn preview<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<Vec<Range<usize>>> {
    let mut shown = Vec::new();
    if !console.confirm("Would you like to view 5 rows of this data set? (Y/N): ")? {
        return Ok(shown);
    }
    if table.is_empty() {
        writeln!(console.out(), "No trips match these filters.")?;
        return Ok(shown);
    }

    let mut start = 0;
    loop {
        let window = table.slice(start, WINDOW);
        let end = start + window.num_rows();
        let rendered =
            pretty_format_batches(&[window.batch().clone()]).context("rendering trip rows")?;
        writeln!(console.out(), "{rendered}")?;
        debug!(start, end, "previewed rows");
        shown.push(start..end);

        start = end;
        if start >= table.num_rows() {
            writeln!(console.out(), "No more rows to show.")?;
            break;
        }
        if !console.confirm("Would like to see 5 more rows? (Y/N): ")? {
            break;
        }
    }
    Ok(shown)
}
