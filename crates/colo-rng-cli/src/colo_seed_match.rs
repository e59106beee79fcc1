//! Known-good seed matcher CLI
//!
//! Usage: colo_seed_match <TARGET_SEED> [--seeds <FILE>]
//!
//! Walks the generator from TARGET_SEED and reports every advance at which it
//! reaches a seed listed in FILE (default: seeds_quil.txt). FILE is either a
//! text seed list or a binary `.cseed` set.
//!
//! Example: colo_seed_match 0xD169975D --seeds seeds_quil.cseed

use colo_rng::constants::{DEFAULT_SEED_LIST, MATCH_ITERATIONS};
use colo_rng::{AdvanceMatch, AdvanceMatcher, KnownSeeds, is_seed_set_path, load_seed_list};
use colo_rng::{SeedSetFormatError, parse_seed_literal};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "mmap")]
use colo_rng::MappedSeedSet;

#[cfg(not(feature = "mmap"))]
use colo_rng::load_seed_set;

struct Args {
    target: u32,
    seeds: PathBuf,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <TARGET_SEED> [--seeds <FILE>]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <TARGET_SEED>     Seed to walk from (decimal or 0x-prefixed hex)");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --seeds <FILE>    Known-good seeds, text list or .cseed (default: {})",
        DEFAULT_SEED_LIST
    );
    eprintln!("  --help, -h        Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut target: Option<u32> = None;
    let mut seeds = PathBuf::from(DEFAULT_SEED_LIST);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seeds" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seeds requires a value".to_string());
                }
                seeds = PathBuf::from(&args[i]);
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if target.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                target = Some(
                    parse_seed_literal(arg).map_err(|_| format!("Invalid target seed: {}", arg))?,
                );
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let target = target.ok_or("Missing target seed argument")?;
    Ok(Args { target, seeds })
}

fn format_seed_set_error(path: &Path, err: SeedSetFormatError) -> String {
    match err {
        SeedSetFormatError::InvalidMagic => {
            format!("Invalid file: '{}' is not a seed set file.", path.display())
        }
        SeedSetFormatError::NotSorted | SeedSetFormatError::EntriesOutOfOrder { .. } => format!(
            "Seed set '{}' is not sorted ({}).\nPlease rebuild it with colo_seed_pack.",
            path.display(),
            err
        ),
        other => other.to_string(),
    }
}

fn find_matches(matcher: &AdvanceMatcher, path: &Path) -> Result<(usize, Vec<AdvanceMatch>), String> {
    if is_seed_set_path(path) {
        #[cfg(feature = "mmap")]
        let set = MappedSeedSet::open(path).map_err(|e| format_seed_set_error(path, e))?;
        #[cfg(not(feature = "mmap"))]
        let set = load_seed_set(path).map_err(|e| format_seed_set_error(path, e))?;

        return Ok((set.len(), matcher.find(&set)));
    }

    let seeds = load_seed_list(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let set = KnownSeeds::new(seeds);
    Ok((set.len(), matcher.find(&set)))
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let matcher = AdvanceMatcher::new(args.target);

    let (count, matches) = match find_matches(&matcher, &args.seeds) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Checked {} advances from {:08X} against {} known seeds",
        MATCH_ITERATIONS, args.target, count
    );

    for m in &matches {
        println!(
            "Found good seed in {} advances (seed = {:08X})",
            m.advances, m.seed
        );
    }

    eprintln!(
        "{} matches in {:.3} seconds",
        matches.len(),
        start.elapsed().as_secs_f64()
    );
}
