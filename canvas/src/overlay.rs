//! Auxiliary marker CSV served next to the map image.
//!
//! Format: a header row, then `x,y[,path]` rows. Only the coordinates are
//! drawn. Rows whose `x` or `y` is missing or non-numeric are skipped.

use protocol::{Point, parse_coord};

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

#[must_use]
pub fn parse_overlay_csv(text: &str) -> Vec<Point> {
    text.trim()
        .lines()
        .skip(1)
        .filter_map(parse_row)
        .collect()
}

fn parse_row(row: &str) -> Option<Point> {
    let mut fields = row.split(',');
    let x = fields.next().and_then(parse_coord)?;
    let y = fields.next().and_then(parse_coord)?;
    Some(Point::new(x, y))
}
