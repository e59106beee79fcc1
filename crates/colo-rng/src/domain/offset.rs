//! Offset search primitives
//!
//! Two small tools around the main search:
//! - [`WindowSearch`]: the console derives its initial seed from a timebase
//!   counter that grows by ~40.5M ticks per second. Step `i` of the counter is
//!   `base + i * ticks` (mod 2^32); a hit is a step within ±window of the
//!   target seed.
//! - [`AdvanceMatcher`]: walks the LCG from a seed and reports the advances
//!   at which it lands on a member of a known-good seed set.

use crate::constants::{
    MATCH_ITERATIONS, OFFSET_BASE_SEED, OFFSET_SECONDS, OFFSET_TARGET_SEED, OFFSET_WINDOW,
    POKEBALL_FREEZE_ADVANCES, TICKS_PER_SECOND,
};
use crate::domain::lcg::advance;

// =============================================================================
// Window search
// =============================================================================

/// Parameters of a timebase window scan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSearch {
    /// Seed to hit
    pub target: u32,
    /// Counter value at step 0
    pub base: u32,
    /// Counter increment per step
    pub step: u32,
    /// Accepted distance from the target
    pub window: u32,
    /// Number of steps scanned
    pub steps: u32,
}

impl Default for WindowSearch {
    fn default() -> Self {
        Self {
            target: OFFSET_TARGET_SEED,
            base: OFFSET_BASE_SEED,
            step: TICKS_PER_SECOND,
            window: OFFSET_WINDOW,
            steps: OFFSET_SECONDS,
        }
    }
}

/// Counter value within the window of the target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowHit {
    /// Step index (seconds)
    pub step: u32,
    /// Counter value at that step
    pub seed: u32,
    /// `seed - target` as a signed distance
    pub offset: i32,
}

impl WindowSearch {
    /// Counter value at a step
    #[inline]
    pub const fn seed_at(&self, step: u32) -> u32 {
        self.base.wrapping_add(step.wrapping_mul(self.step))
    }

    /// Test a single step
    ///
    /// Bounds wrap independently, so a window straddling 0 never matches;
    /// this mirrors how the counter was compared on hardware captures.
    #[inline]
    pub fn hit_at(&self, step: u32) -> Option<WindowHit> {
        let seed = self.seed_at(step);
        let lower = seed.wrapping_sub(self.window);
        let upper = seed.wrapping_add(self.window);

        (lower <= self.target && self.target <= upper).then(|| WindowHit {
            step,
            seed,
            offset: seed.wrapping_sub(self.target) as i32,
        })
    }
}

// =============================================================================
// Known-seed matching
// =============================================================================

/// Membership test over a set of seeds
pub trait SeedLookup {
    fn contains_seed(&self, seed: u32) -> bool;
}

/// Sorted, deduplicated seed set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnownSeeds {
    seeds: Vec<u32>,
}

impl KnownSeeds {
    /// Build from seeds in any order
    pub fn new(mut seeds: Vec<u32>) -> Self {
        seeds.sort_unstable();
        seeds.dedup();
        Self { seeds }
    }

    #[inline]
    pub fn contains(&self, seed: u32) -> bool {
        self.seeds.binary_search(&seed).is_ok()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

impl FromIterator<u32> for KnownSeeds {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl SeedLookup for KnownSeeds {
    #[inline]
    fn contains_seed(&self, seed: u32) -> bool {
        self.contains(seed)
    }
}

#[cfg(feature = "hashmap-search")]
impl SeedLookup for rustc_hash::FxHashSet<u32> {
    #[inline]
    fn contains_seed(&self, seed: u32) -> bool {
        self.contains(&seed)
    }
}

/// Parameters of a known-seed walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceMatcher {
    /// Seed the walk starts from
    pub start: u32,
    /// Number of seeds tested (including the start)
    pub iterations: u32,
    /// Subtracted from every reported advance count
    pub calibration: u32,
}

/// Known-good seed reached during a walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceMatch {
    /// Advances after calibration; negative before the calibration point
    pub advances: i64,
    pub seed: u32,
}

impl AdvanceMatcher {
    /// Walk with the default budget and pokeball-freeze calibration
    pub fn new(start: u32) -> Self {
        Self {
            start,
            iterations: MATCH_ITERATIONS,
            calibration: POKEBALL_FREEZE_ADVANCES,
        }
    }

    /// Report every step whose seed is in `known`, in walk order
    pub fn find<L>(&self, known: &L) -> Vec<AdvanceMatch>
    where
        L: SeedLookup + ?Sized,
    {
        let mut matches = Vec::new();
        let mut seed = self.start;

        for i in 0..self.iterations {
            if known.contains_seed(seed) {
                matches.push(AdvanceMatch {
                    advances: i as i64 - self.calibration as i64,
                    seed,
                });
            }
            seed = advance(seed);
        }

        matches
    }
}
