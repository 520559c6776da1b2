//! Plain-text grids: one line per row, `1` alive, anything else dead.

use crate::domain::{Cell, PatternDescription};

/// Declared `"<width> <height>"` of a legacy header line
fn size_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(w), Some(h), None) if w.bytes().chain(h.bytes()).all(|b| b.is_ascii_digit()) => {
            Some((w.parse().ok()?, h.parse().ok()?))
        }
        _ => None,
    }
}

/// Legacy files open with a `"<width> <height>"` line matching the grid below it
fn is_size_header(first: &str, rows: &[&str]) -> bool {
    size_header(first).is_some_and(|(width, height)| {
        let widest = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        height == rows.len() && width == widest
    })
}

pub fn decode(text: &str) -> PatternDescription {
    let mut lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    if lines.split_first().is_some_and(|(first, rows)| is_size_header(first, rows)) {
        lines.remove(0);
    }

    let mut pattern = PatternDescription::default();
    for (j, line) in lines.iter().enumerate() {
        for (i, ch) in line.chars().enumerate() {
            let cell = Cell::new(i as i64, -(j as i64));
            if ch == '1' {
                pattern.set_cells.push(cell);
            } else {
                pattern.clear_cells.push(cell);
            }
        }
    }
    pattern
}
