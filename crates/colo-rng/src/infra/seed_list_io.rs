//! Text seed list I/O
//!
//! One bare hexadecimal seed per line (no `0x` prefix). Parsing stops at the
//! first malformed line: silently skipping one would drop seeds from the set.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Seed list errors
#[derive(Debug, Error)]
pub enum SeedListError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: '{content}' is not a hexadecimal seed")]
    InvalidLine { line: usize, content: String },
}

/// Parse a seed literal given on the command line
///
/// Accepts decimal or `0x`-prefixed hexadecimal.
pub fn parse_seed_literal(text: &str) -> Result<u32, ParseIntError> {
    let text = text.trim();
    match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    }
}

/// Parse seed list contents
///
/// Blank lines are ignored; surrounding whitespace (including `\r`) is trimmed.
pub fn parse_seed_list(text: &str) -> Result<Vec<u32>, SeedListError> {
    let mut seeds = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let invalid = || SeedListError::InvalidLine {
            line: index + 1,
            content: line.to_string(),
        };

        // from_str_radix alone would also take a leading sign
        if !line.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let seed = u32::from_str_radix(line, 16).map_err(|_| invalid())?;
        seeds.push(seed);
    }

    Ok(seeds)
}

/// Load a seed list file
pub fn load_seed_list(path: impl AsRef<Path>) -> Result<Vec<u32>, SeedListError> {
    let text = fs::read_to_string(path)?;
    parse_seed_list(&text)
}

/// Save seeds as a seed list (8-digit uppercase hex, one per line)
pub fn save_seed_list(path: impl AsRef<Path>, seeds: &[u32]) -> Result<(), SeedListError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for seed in seeds {
        writeln!(writer, "{:08X}", seed)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_literal() {
        assert_eq!(parse_seed_literal("0x82DD8E91"), Ok(0x82DD_8E91));
        assert_eq!(parse_seed_literal("0X82dd8e91"), Ok(0x82DD_8E91));
        assert_eq!(parse_seed_literal("12345"), Ok(12345));
        assert_eq!(parse_seed_literal(" 010 "), Ok(10));
        assert!(parse_seed_literal("0x").is_err());
        assert!(parse_seed_literal("82DD8E91").is_err());
        assert!(parse_seed_literal("4294967296").is_err());
    }

    #[test]
    fn test_parse_seed_list() {
        let seeds = parse_seed_list("D169975D\n00000001\r\n\nffffffff\n").unwrap();
        assert_eq!(seeds, vec![0xD169_975D, 1, u32::MAX]);
    }

    #[test]
    fn test_parse_seed_list_rejects_prefix() {
        let err = parse_seed_list("0001\n0x0002\n").unwrap_err();
        assert!(matches!(err, SeedListError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn test_parse_seed_list_rejects_garbage() {
        let err = parse_seed_list("12\nseed\n34\n").unwrap_err();
        match err {
            SeedListError::InvalidLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "seed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_seed_list_rejects_sign() {
        for text in ["+1F\n", "00000001\n-1\n", "1F 2A\n"] {
            assert!(
                matches!(parse_seed_list(text), Err(SeedListError::InvalidLine { .. })),
                "accepted {:?}",
                text
            );
        }
        let err = parse_seed_list("0001\n+1F\n").unwrap_err();
        assert!(matches!(err, SeedListError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn test_parse_seed_list_rejects_overflow() {
        assert!(parse_seed_list("100000000\n").is_err());
    }
}
