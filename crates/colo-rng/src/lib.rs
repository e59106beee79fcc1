//! colo-rng - LCG state-space search for Pokemon Colosseum starter manipulation
//!
//! This crate provides functionality to:
//! - Advance the Colosseum LCG one step at a time or jump ahead in O(log n)
//! - Derive IVs, hidden power, PIDs and natures exactly as the game consumes the generator
//! - Replay the title/naming-screen frame windows that lead to the starter pair
//! - Scan the full 32-bit seed space in parallel for seeds matching a filter chain
//! - Locate seeds on the console clock (offset search) and in known-good seed lists

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::offset::{find_window_hits, find_window_hits_with_progress};
pub use app::searcher::{
    SearchConfig, SearchError, SearchSummary, SeedMatch, Searcher, partition_range,
    search_seed_space,
};
pub use constants::*;
pub use domain::filter::{FilterChain, Predicate};
pub use domain::lcg::{Lcg, LcgJump, advance, advance_by};
pub use domain::offset::{
    AdvanceMatch, AdvanceMatcher, KnownSeeds, SeedLookup, WindowHit, WindowSearch,
};
pub use domain::pokemon::{
    Gender, HiddenPower, HiddenPowerType, Ivs, Nature, Pokemon, Stat, TrainerId,
};
pub use domain::seed_set_format::{SeedSetFormatError, SeedSetHeader};
pub use domain::sequence::{EventSequencer, SequenceError, SequenceParams, StarterDraw};
pub use infra::seed_list_io::{SeedListError, load_seed_list, parse_seed_literal, save_seed_list};
pub use infra::seed_set_io::{is_seed_set_path, load_seed_set, save_seed_set};

#[cfg(feature = "mmap")]
pub use infra::seed_set_io::MappedSeedSet;
