//! Plain-text rendering of difference tables.
//!
//! Rounding happens here and only here; table values keep full precision.

use std::fmt;

pub(crate) const DISPLAY_DECIMALS: usize = 4;


/// Writes a bordered table. `None` cells (outside the valid triangle)
/// are left blank.
pub(crate) fn write_table(
    f      : &mut fmt::Formatter<'_>,
    headers: &[String],
    rows   : &[Vec<Option<f64>>],
) -> fmt::Result {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| match c {
                    Some(v) => format!("{:.*}", DISPLAY_DECIMALS, v),
                    None    => String::new(),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(j, h)| {
            cells.iter()
                .filter_map(|r| r.get(j))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    border(f, &widths)?;
    line(f, &widths, headers)?;
    border(f, &widths)?;
    for row in &cells {
        line(f, &widths, row)?;
    }
    border(f, &widths)
}

fn border(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for w in widths {
        write!(f, "+{}", "-".repeat(w + 2))?;
    }
    writeln!(f, "+")
}

fn line(f: &mut fmt::Formatter<'_>, widths: &[usize], items: &[String]) -> fmt::Result {
    for (w, item) in widths.iter().zip(items) {
        write!(f, "| {:>w$} ", item, w = w)?;
    }
    writeln!(f, "|")
}
