//! Seed-space search workflow
//!
//! Partitions a seed range into one contiguous block per worker and runs the
//! event sequencer plus filter chains over every seed. Workers share nothing
//! but the progress counter; matches are handed to a callback as they are found.

use crate::constants::{DEFAULT_WORKERS, PROGRESS_CHUNK, SEED_SPACE};
use crate::domain::filter::FilterChain;
use crate::domain::sequence::{EventSequencer, SequenceError, SequenceParams};
use rayon::prelude::*;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Search errors
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("invalid seed range {start:#X}..{end:#X}")]
    InvalidRange { start: u64, end: u64 },
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Full search scenario
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Sequencer parameters
    pub sequence: SequenceParams,
    /// One chain per starter, in draw order
    pub starter_filters: Vec<FilterChain>,
    /// Chain applied to every secondary frame
    pub secondary_filter: FilterChain,
    /// Number of worker threads
    pub workers: usize,
}

impl SearchConfig {
    /// Umbreon/Espeon starters followed by a Quilava frame
    pub fn espeon_quilava() -> Self {
        Self {
            sequence: SequenceParams::default(),
            starter_filters: vec![FilterChain::umbreon(), FilterChain::espeon()],
            secondary_filter: FilterChain::quilava(),
            workers: DEFAULT_WORKERS,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::espeon_quilava()
    }
}

/// Seed passing every starter chain with a matching secondary frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeedMatch {
    pub seed: u32,
    pub frame: u32,
}

/// Totals of a finished search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub seeds_scanned: u64,
    pub matches: u64,
}

/// Split a range into `workers` contiguous, disjoint blocks
///
/// Block sizes differ by at most one; earlier blocks take the remainder.
pub fn partition_range(range: Range<u64>, workers: usize) -> Vec<Range<u64>> {
    let workers = workers.max(1) as u64;
    let total = range.end.saturating_sub(range.start);
    let base = total / workers;
    let remainder = total % workers;

    let mut blocks = Vec::with_capacity(workers as usize);
    let mut start = range.start;
    for i in 0..workers {
        let len = base + u64::from(i < remainder);
        blocks.push(start..start + len);
        start += len;
    }

    blocks
}

/// Per-seed evaluation shared by all workers
#[derive(Clone, Debug)]
pub struct Searcher {
    sequencer: EventSequencer,
    starter_filters: Vec<FilterChain>,
    secondary_filter: FilterChain,
}

impl Searcher {
    pub fn new(config: &SearchConfig) -> Result<Self, SequenceError> {
        Ok(Self {
            sequencer: EventSequencer::new(config.sequence)?,
            starter_filters: config.starter_filters.clone(),
            secondary_filter: config.secondary_filter.clone(),
        })
    }

    pub fn sequencer(&self) -> &EventSequencer {
        &self.sequencer
    }

    /// Evaluate one seed, returning the number of matches reported
    ///
    /// Starters are drawn one at a time so the first failing chain stops the
    /// sequence before the next starter is derived.
    pub fn evaluate<F>(&self, seed: u32, on_match: &mut F) -> Result<u64, SequenceError>
    where
        F: FnMut(SeedMatch),
    {
        let mut draw = self.sequencer.begin(seed)?;
        for filter in &self.starter_filters {
            let starter = draw.next_starter()?;
            if !filter.matches(&starter) {
                return Ok(0);
            }
        }

        let mut found = 0;
        for (frame, mon) in self.sequencer.secondary_frames(seed) {
            if self.secondary_filter.matches(&mon) {
                on_match(SeedMatch { seed, frame });
                found += 1;
            }
        }

        Ok(found)
    }

    /// Evaluate every seed of a range sequentially
    ///
    /// The range must lie within `0..2^32`.
    pub fn search_range<F>(&self, range: Range<u64>, on_match: &mut F) -> Result<u64, SearchError>
    where
        F: FnMut(SeedMatch),
    {
        validate_range(&range)?;
        let mut found = 0;
        for seed in range {
            found += self.evaluate(seed as u32, on_match)?;
        }
        Ok(found)
    }

    /// Collect all matches of a range
    pub fn collect_range(&self, range: Range<u64>) -> Result<Vec<SeedMatch>, SearchError> {
        let mut matches = Vec::new();
        self.search_range(range, &mut |m| matches.push(m))?;
        Ok(matches)
    }
}

fn validate_range(range: &Range<u64>) -> Result<(), SearchError> {
    if range.start > range.end || range.end > SEED_SPACE {
        return Err(SearchError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

/// Search a seed range with `config.workers` threads
///
/// # Arguments
/// * `config` - Scenario and worker count
/// * `range` - Seeds to scan, within `0..2^32`
/// * `on_match` - Called from worker threads for every match, in no particular order
/// * `on_progress` - Called with (seeds scanned, total) after every chunk
pub fn search_seed_space<F, P>(
    config: &SearchConfig,
    range: Range<u64>,
    on_match: F,
    on_progress: P,
) -> Result<SearchSummary, SearchError>
where
    F: Fn(SeedMatch) + Sync,
    P: Fn(u64, u64) + Sync,
{
    if config.workers == 0 {
        return Err(SearchError::NoWorkers);
    }
    validate_range(&range)?;

    let searcher = Searcher::new(config)?;
    let total = range.end - range.start;
    let progress = AtomicU64::new(0);
    let blocks = partition_range(range, config.workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()?;

    let per_block: Vec<u64> = pool.install(|| {
        blocks
            .into_par_iter()
            .map(|block| -> Result<u64, SearchError> {
                let mut found = 0;
                let mut forward = |m: SeedMatch| on_match(m);
                let mut start = block.start;

                while start < block.end {
                    let end = (start + PROGRESS_CHUNK).min(block.end);
                    found += searcher.search_range(start..end, &mut forward)?;

                    let done = progress.fetch_add(end - start, Ordering::Relaxed) + (end - start);
                    on_progress(done, total);
                    start = end;
                }

                Ok(found)
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    Ok(SearchSummary {
        seeds_scanned: total,
        matches: per_block.iter().sum(),
    })
}
