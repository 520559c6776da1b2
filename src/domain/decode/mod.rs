//! Pattern file decoders.
//!
//! Each format gets its own small tokenizer; [`decode`] returns a tagged
//! result so composites stay a list of references until the compositor
//! resolves them.

pub mod composite;
pub mod plain_text;
pub mod rle;

use std::path::Path;

use super::{DecodeError, PatternDescription};
pub use composite::CompositeReference;

/// Supported pattern file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternFormat {
    PlainText,
    Rle,
    Composite,
}

impl PatternFormat {
    /// Pick the format from the extension, falling back to the contents
    pub fn detect(path: &Path, text: &str) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("rle") => PatternFormat::Rle,
            Some(ext) if ext.eq_ignore_ascii_case("cpx") => PatternFormat::Composite,
            _ => Self::sniff(text),
        }
    }

    /// An RLE header on the first non-comment line means RLE
    fn sniff(text: &str) -> Self {
        let first = text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with('#'));
        match first.and_then(rle::parse_header) {
            Some(_) => PatternFormat::Rle,
            None => PatternFormat::PlainText,
        }
    }
}

/// Result of decoding one file
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// Primitive formats decode straight to cells
    Cells(PatternDescription),
    /// Composite files still need their references resolved
    Composite(Vec<CompositeReference>),
}

pub fn decode(format: PatternFormat, text: &str) -> Result<Decoded, DecodeError> {
    Ok(match format {
        PatternFormat::PlainText => Decoded::Cells(plain_text::decode(text)),
        PatternFormat::Rle => Decoded::Cells(rle::decode(text)?),
        PatternFormat::Composite => Decoded::Composite(composite::decode(text)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use std::collections::HashSet;

    #[test]
    fn test_format_by_extension() {
        assert_eq!(PatternFormat::detect(Path::new("a/glider.rle"), ""), PatternFormat::Rle);
        assert_eq!(PatternFormat::detect(Path::new("gun.CPX"), ""), PatternFormat::Composite);
        assert_eq!(PatternFormat::detect(Path::new("block.txt"), "11\n11"), PatternFormat::PlainText);
    }

    #[test]
    fn test_format_by_content() {
        let rle = "#N thing\nx = 1, y = 1\no!";
        assert_eq!(PatternFormat::detect(Path::new("thing"), rle), PatternFormat::Rle);
        assert_eq!(PatternFormat::detect(Path::new("thing"), "010\n111"), PatternFormat::PlainText);
    }

    #[test]
    fn test_decode_is_deterministic() {
        for preset in presets::all_patterns() {
            let format = PatternFormat::detect(Path::new(preset.file_name), preset.source);
            let a = decode(format, preset.source).unwrap();
            let b = decode(format, preset.source).unwrap();
            assert_eq!(a, b, "{}", preset.file_name);
        }
    }

    #[test]
    fn test_presets_decode_to_known_populations() {
        let expected = [
            ("glider.rle", 5),
            ("blinker.rle", 3),
            ("block.txt", 4),
            ("toad.rle", 6),
            ("beacon.rle", 6),
            ("pulsar.rle", 48),
            ("lwss.rle", 9),
            ("gosper_glider_gun.rle", 36),
            ("r_pentomino.rle", 5),
            ("acorn.rle", 7),
        ];
        for (name, population) in expected {
            let preset = presets::all_patterns()
                .into_iter()
                .find(|p| p.file_name == name)
                .unwrap();
            let format = PatternFormat::detect(Path::new(name), preset.source);
            let Decoded::Cells(p) = decode(format, preset.source).unwrap() else {
                panic!("{} is not a primitive pattern", name);
            };
            let unique: HashSet<_> = p.set_cells.iter().collect();
            assert_eq!(unique.len(), population, "{}", name);
        }
    }
}
