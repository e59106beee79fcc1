//! Binary seed set I/O
//!
//! This module provides functions for reading and writing binary seed set files.

use crate::constants::{SEED_ENTRY_SIZE, SEED_SET_EXTENSION, SEED_SET_HEADER_SIZE};
use crate::domain::offset::KnownSeeds;
use crate::domain::seed_set_format::{SeedSetFormatError, SeedSetHeader, expected_seed_set_size};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "mmap")]
use crate::domain::offset::SeedLookup;
#[cfg(feature = "mmap")]
use memmap2::Mmap;

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Whether a path carries the binary seed set extension
pub fn is_seed_set_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SEED_SET_EXTENSION))
}

/// Save a seed set with header
pub fn save_seed_set(path: impl AsRef<Path>, seeds: &KnownSeeds) -> Result<(), SeedSetFormatError> {
    ensure_parent_dir(path.as_ref())?;
    let header = SeedSetHeader::new(seeds.len() as u64);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&header.to_bytes())?;

    for &seed in seeds.as_slice() {
        writer.write_u32::<LittleEndian>(seed)?;
    }

    writer.flush()?;
    Ok(())
}

/// Index of the first entry not strictly greater than its predecessor
fn first_out_of_order(seeds: impl IntoIterator<Item = u32>) -> Option<u64> {
    let mut previous: Option<u32> = None;
    for (index, seed) in seeds.into_iter().enumerate() {
        if previous.is_some_and(|p| seed <= p) {
            return Some(index as u64);
        }
        previous = Some(seed);
    }
    None
}

fn read_header(file: &File) -> Result<SeedSetHeader, SeedSetFormatError> {
    let mut header_buf = [0u8; SEED_SET_HEADER_SIZE];
    (&*file).read_exact(&mut header_buf)?;
    let header = SeedSetHeader::from_bytes(&header_buf)?;

    let expected = expected_seed_set_size(&header)
        .ok_or(SeedSetFormatError::InvalidCount(header.count))?;
    let found = file.metadata()?.len();
    if found != expected {
        return Err(SeedSetFormatError::InvalidFileSize { expected, found });
    }

    Ok(header)
}

/// Load a seed set into memory
pub fn load_seed_set(path: impl AsRef<Path>) -> Result<KnownSeeds, SeedSetFormatError> {
    let file = File::open(path.as_ref())?;
    let header = read_header(&file)?;

    let mut reader = BufReader::new(file);
    let mut seeds = Vec::with_capacity(header.count as usize);
    for _ in 0..header.count {
        seeds.push(reader.read_u32::<LittleEndian>()?);
    }

    if let Some(index) = first_out_of_order(seeds.iter().copied()) {
        return Err(SeedSetFormatError::EntriesOutOfOrder { index });
    }

    Ok(KnownSeeds::new(seeds))
}

// =============================================================================
// Memory-mapped seed set (mmap feature)
// =============================================================================

/// Memory-mapped seed set
///
/// Lookups binary-search the mapped file directly, so large sets are never
/// copied into memory.
#[cfg(feature = "mmap")]
pub struct MappedSeedSet {
    mmap: Mmap,
    len: usize,
}

#[cfg(feature = "mmap")]
impl MappedSeedSet {
    /// Open and validate a seed set file as memory-mapped
    ///
    /// Entries are checked once for strict ordering so that lookups can
    /// binary-search them.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SeedSetFormatError> {
        let file = File::open(path)?;
        let header = read_header(&file)?;

        let mmap = unsafe { Mmap::map(&file)? };

        let set = Self {
            mmap,
            len: header.count as usize,
        };

        if let Some(index) = first_out_of_order(set.iter()) {
            return Err(SeedSetFormatError::EntriesOutOfOrder { index });
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Seed at `index`, `None` if out of bounds
    pub fn get(&self, index: usize) -> Option<u32> {
        if index >= self.len {
            return None;
        }

        let offset = SEED_SET_HEADER_SIZE + index * SEED_ENTRY_SIZE;
        let bytes = &self.mmap[offset..offset + SEED_ENTRY_SIZE];
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Binary search for a seed
    pub fn contains(&self, seed: u32) -> bool {
        let mut left = 0;
        let mut right = self.len;

        while left < right {
            let mid = left + (right - left) / 2;
            match self.get(mid) {
                Some(value) if value < seed => left = mid + 1,
                Some(value) if value == seed => return true,
                _ => right = mid,
            }
        }

        false
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}

#[cfg(feature = "mmap")]
impl SeedLookup for MappedSeedSet {
    #[inline]
    fn contains_seed(&self, seed: u32) -> bool {
        self.contains(seed)
    }
}
