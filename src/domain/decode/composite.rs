//! Composite (`.cpx`) files: one reference to another pattern file per line.
//!
//! ```text
//! <dx> <dy> <path> <True|False> <True|False> <rot> <time>
//! ```
//!
//! Lines that do not have this shape are comments. A reference may be
//! followed by a `#` note; any other trailing text makes the line a comment.
//! The older six-field form without `<time>` is read with `time = 0`.

use std::path::PathBuf;

use macroquad::logging::debug;

use crate::domain::{Cell, TransformSpec};

/// One placement of a sub-pattern inside a composite
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeReference {
    /// Where the sub-pattern's top-left corner lands (y grows upward)
    pub offset: Cell,
    pub path: PathBuf,
    pub transform: TransformSpec,
}

fn int(token: &str) -> Option<i64> {
    if token.starts_with('+') {
        return None;
    }
    token.parse().ok()
}

fn flag(token: &str) -> Option<bool> {
    match token {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}

/// Whitespace-separated tokens with their byte offsets in the line
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                out.push((s, &line[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, &line[s..]));
    }
    out
}

/// `tokens` split as `dx dy path.. symx symy rot [time]`
fn reference(line: &str, tokens: &[(usize, &str)], with_time: bool) -> Option<CompositeReference> {
    let tail = if with_time { 4 } else { 3 };
    if tokens.len() < 3 + tail {
        return None;
    }
    let fixed: Vec<&str> = tokens[tokens.len() - tail..].iter().map(|&(_, t)| t).collect();
    let time = if with_time {
        let t = fixed[3];
        if t.starts_with(['+', '-']) {
            return None;
        }
        t.parse().ok()?
    } else {
        0
    };

    let (path_start, _) = tokens[2];
    let (last_start, last) = tokens[tokens.len() - tail - 1];
    Some(CompositeReference {
        offset: Cell::new(int(tokens[0].1)?, int(tokens[1].1)?),
        path: PathBuf::from(&line[path_start..last_start + last.len()]),
        transform: TransformSpec {
            mirror_x: flag(fixed[0])?,
            mirror_y: flag(fixed[1])?,
            rotation: int(fixed[2])?,
            time,
        },
    })
}

fn parse_tokens(line: &str, tokens: &[(usize, &str)]) -> Option<CompositeReference> {
    reference(line, tokens, true).or_else(|| reference(line, tokens, false))
}

/// Parse one line, `None` if it is a comment. A reference may carry a
/// trailing `#` note.
pub fn parse_line(line: &str) -> Option<CompositeReference> {
    let tokens = tokens(line);
    parse_tokens(line, &tokens).or_else(|| {
        let note = tokens.iter().position(|(_, t)| t.starts_with('#'))?;
        parse_tokens(line, &tokens[..note])
    })
}

pub fn decode(text: &str) -> Vec<CompositeReference> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                debug!("composite: treating {:?} as a comment", line);
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let r = parse_line("-3 12 guns/gun.rle True False -1 30").unwrap();
        assert_eq!(r.offset, Cell::new(-3, 12));
        assert_eq!(r.path, PathBuf::from("guns/gun.rle"));
        assert_eq!(
            r.transform,
            TransformSpec { mirror_x: true, mirror_y: false, rotation: -1, time: 30 }
        );
    }

    #[test]
    fn test_legacy_line_has_no_time() {
        let r = parse_line("0 0 glider.rle False False 1").unwrap();
        assert_eq!(r.transform.rotation, 1);
        assert_eq!(r.transform.time, 0);
    }

    #[test]
    fn test_path_with_spaces() {
        let r = parse_line("1 2 my patterns/a b.rle False True 0 0").unwrap();
        assert_eq!(r.path, PathBuf::from("my patterns/a b.rle"));
        assert!(r.transform.mirror_y);
    }

    #[test]
    fn test_path_keeps_inner_whitespace() {
        let r = parse_line("0 0 a  b\tc.rle False False 0 0").unwrap();
        assert_eq!(r.path, PathBuf::from("a  b\tc.rle"));
    }

    #[test]
    fn test_trailing_note_is_ignored() {
        let r = parse_line("0 0 a.rle False False 0 0 # gun").unwrap();
        assert_eq!(r.path, PathBuf::from("a.rle"));
        assert_eq!(r.transform, TransformSpec::IDENTITY);

        let legacy = parse_line("3 4 b.rle True False 1 #note").unwrap();
        assert_eq!(legacy.offset, Cell::new(3, 4));
        assert_eq!(legacy.transform.rotation, 1);

        assert_eq!(parse_line("0 0 a.rle False False 0 0 trailing"), None);
    }

    #[test]
    fn test_non_matching_lines_are_comments() {
        assert_eq!(parse_line("40 30"), None);
        assert_eq!(parse_line("# place the gun first"), None);
        assert_eq!(parse_line("0 0 a.rle true false 0 0"), None);
        assert_eq!(parse_line("x 0 a.rle True False 0 0"), None);
        assert_eq!(parse_line("0 0 True False 0 0"), None);
    }

    #[test]
    fn test_negative_time_is_not_a_reference() {
        // falls back to the legacy form, which makes `-1` part of nothing valid
        assert_eq!(parse_line("0 0 a.rle True False 0 -1"), None);
    }

    #[test]
    fn test_decode_skips_comments() {
        let refs = decode("80 40\nguns first\n0 0 a.rle False False 0 0\n\n5 -5 b.cpx True True 2 4\n");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1].offset, Cell::new(5, -5));
        assert_eq!(refs[1].transform.time, 4);
    }
}
