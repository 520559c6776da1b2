//! Run-length encoded patterns.
//!
//! `#` lines are comments. Nothing is read before the `x = <w>, y = <h>`
//! header; after it, `[count]o` sets a run, `[count]b` clears a run,
//! `[count]$` moves down rows and `!` ends the pattern. A missing `!` is fine.

use crate::domain::{Cell, DecodeError, PatternDescription};

/// Width and height from an RLE header line, if it is one
pub fn parse_header(line: &str) -> Option<(u64, u64)> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let rest = compact.strip_prefix("x=")?;
    let (width, rest) = split_number(rest)?;
    let rest = rest.strip_prefix(",y=")?;
    let (height, _) = split_number(rest)?;
    Some((width, height))
}

fn split_number(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

/// Upper bound on the cells one RLE file may describe
pub const MAX_CELLS: usize = 1 << 24;

/// Cursor over the token stream; the run count may span line breaks
#[derive(Default)]
struct Reader {
    column: i64,
    row: i64,
    count: u64,
    pattern: PatternDescription,
}

impl Reader {
    /// Pending count, where an omitted or zero count means one
    fn take_count(&mut self) -> i64 {
        let n = std::mem::take(&mut self.count).max(1);
        n as i64
    }

    fn run(&mut self, alive: bool, line: usize) -> Result<(), DecodeError> {
        let n = self.take_count();
        let end = self.column.checked_add(n).ok_or(DecodeError::CountOverflow { line })?;
        if self.pattern.len() as u64 + n as u64 > MAX_CELLS as u64 {
            return Err(DecodeError::TooManyCells { line, limit: MAX_CELLS });
        }
        let row = -self.row;
        let target = if alive { &mut self.pattern.set_cells } else { &mut self.pattern.clear_cells };
        target.extend((self.column..end).map(|x| Cell::new(x, row)));
        self.column = end;
        Ok(())
    }

    fn new_rows(&mut self, line: usize) -> Result<(), DecodeError> {
        let n = self.take_count();
        self.row = self.row.checked_add(n).ok_or(DecodeError::CountOverflow { line })?;
        self.column = 0;
        Ok(())
    }

    fn digit(&mut self, d: u32, line: usize) -> Result<(), DecodeError> {
        self.count = self
            .count
            .checked_mul(10)
            .and_then(|c| c.checked_add(u64::from(d)))
            .filter(|&c| c <= i64::MAX as u64)
            .ok_or(DecodeError::CountOverflow { line })?;
        Ok(())
    }
}

pub fn decode(text: &str) -> Result<PatternDescription, DecodeError> {
    let mut reader = Reader::default();
    let mut header_seen = false;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if !header_seen {
            header_seen = parse_header(trimmed).is_some();
            continue;
        }

        for (col, ch) in line.chars().enumerate() {
            match ch {
                'o' => reader.run(true, line_no)?,
                'b' => reader.run(false, line_no)?,
                '$' => reader.new_rows(line_no)?,
                '!' => return Ok(reader.pattern),
                c if c.is_whitespace() => {}
                c => match c.to_digit(10) {
                    Some(d) => reader.digit(d, line_no)?,
                    None => {
                        return Err(DecodeError::UnexpectedChar {
                            line: line_no,
                            column: col + 1,
                            found: c,
                        });
                    }
                },
            }
        }
    }
    Ok(reader.pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(list: &[(i64, i64)]) -> Vec<Cell> {
        list.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_glider() {
        let p = decode("#C a comment\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n").unwrap();
        assert_eq!(p.set_cells, cells(&[(1, 0), (2, -1), (0, -2), (1, -2), (2, -2)]));
        assert_eq!(p.clear_cells, cells(&[(0, 0), (0, -1), (1, -1)]));
    }

    #[test]
    fn test_multi_row_skip_and_line_breaks() {
        // newline inside a row does not start a new row, only `$` does
        let p = decode("x = 2, y = 3\no\no3$\n2o!").unwrap();
        assert_eq!(p.set_cells, cells(&[(0, 0), (1, 0), (0, -3), (1, -3)]));
        assert!(p.clear_cells.is_empty());
    }

    #[test]
    fn test_count_spans_lines() {
        let p = decode("x = 12, y = 1\n1\n2o!").unwrap();
        assert_eq!(p.set_cells.len(), 12);
    }

    #[test]
    fn test_zero_count_means_one() {
        let p = decode("x = 1, y = 1\n0o!").unwrap();
        assert_eq!(p.set_cells, cells(&[(0, 0)]));
    }

    #[test]
    fn test_bang_stops_decoding() {
        let p = decode("x = 1, y = 1\no!\n$5o\nthis is ignored").unwrap();
        assert_eq!(p.set_cells, cells(&[(0, 0)]));
    }

    #[test]
    fn test_truncated_input_returns_partial() {
        let p = decode("x = 3, y = 2\n3o$o").unwrap();
        assert_eq!(p.set_cells, cells(&[(0, 0), (1, 0), (2, 0), (0, -1)]));
    }

    #[test]
    fn test_lines_before_header_are_ignored() {
        let p = decode("garbage line\nx = 1, y = 1\no!").unwrap();
        assert_eq!(p.set_cells, cells(&[(0, 0)]));
        assert!(decode("3o!").unwrap().is_empty());
    }

    #[test]
    fn test_bad_token_is_an_error() {
        let err = decode("x = 3, y = 1\n2oz!").unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedChar { line: 2, column: 3, found: 'z' });
    }

    #[test]
    fn test_overflowing_count_is_an_error() {
        let err = decode("x = 1, y = 1\n99999999999999999999o!").unwrap_err();
        assert_eq!(err, DecodeError::CountOverflow { line: 2 });
    }

    #[test]
    fn test_row_skip_overflow_is_an_error() {
        let err = decode("x = 1, y = 1\n9223372036854775807$2$o!").unwrap_err();
        assert_eq!(err, DecodeError::CountOverflow { line: 2 });
        let err = decode("x = 1, y = 1\n9223372036854775807$9223372036854775807$o!").unwrap_err();
        assert_eq!(err, DecodeError::CountOverflow { line: 2 });
    }

    #[test]
    fn test_huge_run_is_rejected() {
        let err = decode("x = 1, y = 1\n1000000000000o!").unwrap_err();
        assert_eq!(err, DecodeError::TooManyCells { line: 2, limit: MAX_CELLS });
        // rows moved over are not cells
        assert_eq!(decode("x = 1, y = 1\n1000000000000$o!").unwrap().set_cells, cells(&[(0, -1_000_000_000_000)]));
    }

    #[test]
    fn test_header_parsing() {
        assert_eq!(parse_header("x = 36, y = 9, rule = B3/S23"), Some((36, 9)));
        assert_eq!(parse_header("x=4,y=2"), Some((4, 2)));
        assert_eq!(parse_header("y = 4, x = 2"), None);
        assert_eq!(parse_header("bo$2bo$3o!"), None);
    }
}
