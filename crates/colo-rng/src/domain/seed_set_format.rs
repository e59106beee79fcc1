//! Binary seed set file format
//!
//! Layout: 32-byte little-endian header followed by `count` sorted,
//! deduplicated `u32` seeds.
//!
//! | offset | size | field      |
//! |--------|------|------------|
//! | 0      | 8    | magic      |
//! | 8      | 2    | version    |
//! | 10     | 2    | reserved   |
//! | 12     | 4    | flags      |
//! | 16     | 8    | count      |
//! | 24     | 8    | created_at |

use crate::constants::{
    FLAG_SORTED, SEED_ENTRY_SIZE, SEED_SET_HEADER_SIZE, SEED_SET_MAGIC, SEED_SET_VERSION,
    SEED_SPACE,
};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Seed set file header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSetHeader {
    /// File format version
    pub version: u16,
    /// Flags (sorted, etc.)
    pub flags: u32,
    /// Number of seeds following the header
    pub count: u64,
    /// Creation timestamp (Unix epoch seconds)
    pub created_at: u64,
}

impl SeedSetHeader {
    /// Header for a sorted set of `count` seeds
    pub fn new(count: u64) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            version: SEED_SET_VERSION,
            flags: FLAG_SORTED,
            count,
            created_at,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.flags & FLAG_SORTED != 0
    }

    /// Serialize header to bytes
    pub fn to_bytes(&self) -> [u8; SEED_SET_HEADER_SIZE] {
        let mut buf = [0u8; SEED_SET_HEADER_SIZE];

        buf[0..8].copy_from_slice(&SEED_SET_MAGIC);
        buf[8..10].copy_from_slice(&self.version.to_le_bytes());
        // 10..12 reserved
        buf[12..16].copy_from_slice(&self.flags.to_le_bytes());
        buf[16..24].copy_from_slice(&self.count.to_le_bytes());
        buf[24..32].copy_from_slice(&self.created_at.to_le_bytes());

        buf
    }

    /// Deserialize header from bytes
    pub fn from_bytes(buf: &[u8; SEED_SET_HEADER_SIZE]) -> Result<Self, SeedSetFormatError> {
        if buf[0..8] != SEED_SET_MAGIC {
            return Err(SeedSetFormatError::InvalidMagic);
        }

        let version = u16::from_le_bytes([buf[8], buf[9]]);
        if version != SEED_SET_VERSION {
            return Err(SeedSetFormatError::UnsupportedVersion(version));
        }

        let header = Self {
            version,
            flags: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            count: u64::from_le_bytes([
                buf[16], buf[17], buf[18], buf[19], buf[20], buf[21], buf[22], buf[23],
            ]),
            created_at: u64::from_le_bytes([
                buf[24], buf[25], buf[26], buf[27], buf[28], buf[29], buf[30], buf[31],
            ]),
        };

        if !header.is_sorted() {
            return Err(SeedSetFormatError::NotSorted);
        }

        // a deduplicated set of u32 seeds holds at most 2^32 entries
        if header.count > SEED_SPACE {
            return Err(SeedSetFormatError::InvalidCount(header.count));
        }

        Ok(header)
    }
}

/// Expected file size for a header, `None` if it does not fit in a `u64`
pub fn expected_seed_set_size(header: &SeedSetHeader) -> Option<u64> {
    header
        .count
        .checked_mul(SEED_ENTRY_SIZE as u64)?
        .checked_add(SEED_SET_HEADER_SIZE as u64)
}

/// Seed set format errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedSetFormatError {
    /// Invalid magic number
    #[error("Invalid file format: not a seed set file")]
    InvalidMagic,
    /// Unsupported format version
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u16),
    /// Sorted flag missing
    #[error("Seed set is not sorted")]
    NotSorted,
    /// Entry not strictly greater than the one before it
    #[error("Seed set entries out of order at index {index}")]
    EntriesOutOfOrder { index: u64 },
    /// Seed count larger than the seed space
    #[error("Invalid seed count: {0}")]
    InvalidCount(u64),
    /// File size does not match the header
    #[error("Invalid file size: expected {expected} bytes, found {found} bytes")]
    InvalidFileSize { expected: u64, found: u64 },
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SeedSetFormatError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
