//! Error types for pattern decoding and composition.

use std::path::PathBuf;

use thiserror::Error;

/// Failure inside one pattern text, independent of where it came from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A character that is neither a digit nor a known tag.
    #[error("line {line}, column {column}: unexpected {found:?} in run-length data")]
    UnexpectedChar {
        line: usize,
        column: usize,
        found: char,
    },

    /// A run count too large to represent.
    #[error("line {line}: run count overflows")]
    CountOverflow { line: usize },

    /// More cells than one pattern may hold.
    #[error("line {line}: pattern exceeds {limit} cells")]
    TooManyCells { line: usize, limit: usize },
}

/// Errors that abort resolving or placing a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Pattern file missing or unreadable.
    #[error("cannot read pattern {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed pattern contents.
    #[error("cannot decode pattern {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// A composite file reachable from itself.
    #[error("recursive reference to {path} (via {})", display_chain(.chain))]
    RecursiveReference { path: PathBuf, chain: Vec<PathBuf> },

    /// Composite nesting deeper than the configured limit.
    #[error("composite nesting deeper than {limit} levels at {path}")]
    DepthExceeded { path: PathBuf, limit: usize },
}

fn display_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_message_lists_chain() {
        let err = PatternError::RecursiveReference {
            path: PathBuf::from("a.cpx"),
            chain: vec![PathBuf::from("a.cpx"), PathBuf::from("b.cpx")],
        };
        assert_eq!(err.to_string(), "recursive reference to a.cpx (via a.cpx -> b.cpx)");
    }
}
