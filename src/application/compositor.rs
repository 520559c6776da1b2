//! Recursive resolution of pattern files into one flat set/clear pattern.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use macroquad::logging::debug;

use super::PatternSource;
use crate::domain::{
    Cell, Decoded, Diff, PatternDescription, PatternError, PatternFormat, TransformSpec, decode,
    transform,
};

/// Nesting limit used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resolves pattern references against a [`PatternSource`].
pub struct Compositor<S> {
    source: S,
    max_depth: usize,
}

impl<S: PatternSource> Compositor<S> {
    pub fn new(source: S, max_depth: usize) -> Self {
        Self { source, max_depth }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Decode `path` in its own frame; composites are fully resolved.
    pub fn resolve(&self, path: &Path) -> Result<PatternDescription, PatternError> {
        self.resolve_within(path, &mut Vec::new())
    }

    /// Resolve, transform once more and move the top-left corner to
    /// `origin`. Nothing is applied: the caller gets the complete diff.
    pub fn place(&self, origin: Cell, path: &Path, spec: TransformSpec) -> Result<Diff, PatternError> {
        let resolved = self.resolve(path)?;
        Ok(transform(&resolved, spec).anchor_at(origin))
    }

    /// `chain` holds the composites currently being resolved, outermost first
    fn resolve_within(&self, path: &Path, chain: &mut Vec<PathBuf>) -> Result<PatternDescription, PatternError> {
        let key = self.source.key(path);
        if chain.contains(&key) {
            return Err(PatternError::RecursiveReference { path: key, chain: chain.clone() });
        }
        if chain.len() >= self.max_depth {
            return Err(PatternError::DepthExceeded { path: key, limit: self.max_depth });
        }

        let text = self.source.read(path)?;
        let format = PatternFormat::detect(path, &text);
        let decoded = decode::decode(format, &text).map_err(|source| PatternError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        match decoded {
            Decoded::Cells(pattern) => {
                debug!("resolved {} ({:?}, {} cells)", path.display(), format, pattern.len());
                Ok(pattern)
            }
            Decoded::Composite(references) => {
                chain.push(key);
                let mut states = BTreeMap::new();
                for reference in &references {
                    let sub = self.resolve_within(&reference.path, chain)?;
                    transform(&sub, reference.transform)
                        .anchor_at(reference.offset)
                        .write_into(&mut states);
                }
                chain.pop();
                debug!("resolved composite {} ({} references)", path.display(), references.len());
                Ok(PatternDescription::from_states(states))
            }
        }
    }
}
