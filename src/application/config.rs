//! Start-up configuration read from the command line.
//!
//! ```text
//! pattern_life [--root DIR] [--max-depth N] [--speed GPS] [--parallel] [PATTERN [X Y]]...
//! ```

use std::path::PathBuf;

use thiserror::Error;

use super::compositor::DEFAULT_MAX_DEPTH;
use crate::domain::{Algorithm, Cell};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown option {0}")]
    UnknownOption(String),
}

/// A pattern to place when the program starts
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub path: PathBuf,
    pub origin: Cell,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory pattern paths are resolved against
    pub pattern_root: PathBuf,
    /// Composite nesting limit
    pub max_depth: usize,
    /// Autoplay speed in generations per second
    pub updates_per_second: f32,
    pub algorithm: Algorithm,
    pub placements: Vec<Placement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern_root: PathBuf::from("."),
            max_depth: DEFAULT_MAX_DEPTH,
            updates_per_second: 10.0,
            algorithm: Algorithm::default(),
            placements: Vec::new(),
        }
    }
}

fn value<T: std::str::FromStr>(
    flag: &'static str,
    args: &mut impl Iterator<Item = String>,
) -> Result<T, ConfigError> {
    let raw = args.next().ok_or(ConfigError::MissingValue(flag))?;
    raw.parse().map_err(|_| ConfigError::InvalidValue { flag, value: raw })
}

impl Config {
    /// Parse arguments (without the program name)
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--root" => config.pattern_root = PathBuf::from(value::<String>("--root", &mut args)?),
                "--max-depth" => config.max_depth = value("--max-depth", &mut args)?,
                "--speed" => {
                    let speed: f32 = value("--speed", &mut args)?;
                    config.updates_per_second = speed.clamp(1.0, 60.0);
                }
                "--parallel" => config.algorithm = Algorithm::SparseParallel,
                flag if flag.starts_with("--") => return Err(ConfigError::UnknownOption(flag.to_string())),
                path => {
                    // optional "X Y" after the path
                    let origin = match args.peek().map(|s| s.parse::<i64>()) {
                        Some(Ok(x)) => {
                            args.next();
                            Cell::new(x, value("Y", &mut args)?)
                        }
                        _ => Cell::default(),
                    };
                    config.placements.push(Placement { path: PathBuf::from(path), origin });
                }
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let c = parse(&[]).unwrap();
        assert_eq!(c, Config::default());
        assert_eq!(c.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_options_and_placements() {
        let c = parse(&["--root", "patterns", "--max-depth", "8", "--speed", "500", "--parallel", "guns/gun.cpx", "-10", "5", "glider.rle"]).unwrap();
        assert_eq!(c.pattern_root, PathBuf::from("patterns"));
        assert_eq!(c.max_depth, 8);
        assert_eq!(c.updates_per_second, 60.0);
        assert_eq!(c.algorithm, Algorithm::SparseParallel);
        assert_eq!(
            c.placements,
            vec![
                Placement { path: PathBuf::from("guns/gun.cpx"), origin: Cell::new(-10, 5) },
                Placement { path: PathBuf::from("glider.rle"), origin: Cell::default() },
            ]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(&["--max-depth"]), Err(ConfigError::MissingValue("--max-depth")));
        assert_eq!(
            parse(&["--max-depth", "deep"]),
            Err(ConfigError::InvalidValue { flag: "--max-depth", value: "deep".into() })
        );
        assert_eq!(parse(&["--fast"]), Err(ConfigError::UnknownOption("--fast".into())));
        assert!(matches!(parse(&["a.rle", "3"]), Err(ConfigError::MissingValue("Y"))));
    }
}
