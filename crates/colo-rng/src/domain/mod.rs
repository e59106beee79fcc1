//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod filter;
pub mod lcg;
pub mod offset;
pub mod pokemon;
pub mod seed_set_format;
pub mod sequence;
