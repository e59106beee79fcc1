//! Starter seed search CLI
//!
//! Usage: colo_starter_search [options]
//!
//! Options:
//!   --workers <N>        Worker threads (default: 4)
//!   --range <LO> <HI>    Scan seeds LO..HI instead of the full 2^32 space
//!   --seed <SEED>        Trace a single seed instead of searching
//!   --output <FILE>      Write matching seeds as a seed list
//!   --help, -h           Show help
//!
//! Example: colo_starter_search --workers 8 --output seeds_quil.txt

use colo_rng::constants::{DEBUG_SEED, DEFAULT_WORKERS, SEED_SPACE};
use colo_rng::{
    FilterChain, KnownSeeds, Pokemon, SearchConfig, SeedMatch, Searcher, parse_seed_literal,
    save_seed_list, search_seed_space,
};
use std::env;
use std::io::{self, Write};
use std::ops::Range;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

struct Args {
    workers: usize,
    range: Range<u64>,
    trace_seed: Option<u32>,
    output: Option<PathBuf>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --workers <N>        Worker threads (default: {})",
        DEFAULT_WORKERS
    );
    eprintln!("  --range <LO> <HI>    Scan seeds LO..HI (default: full 32-bit space)");
    eprintln!(
        "  --seed <SEED>        Trace a single seed (e.g. 0x{:08X})",
        DEBUG_SEED
    );
    eprintln!("  --output <FILE>      Write matching seeds as a seed list");
    eprintln!("  --help, -h           Show this help message");
}

fn parse_bound(text: &str) -> Result<u64, String> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| format!("Invalid range bound: {}", text))
}

fn next_value<'a>(args: &'a [String], i: &mut usize, option: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", option))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut workers = DEFAULT_WORKERS;
    let mut range = 0..SEED_SPACE;
    let mut trace_seed = None;
    let mut output = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--workers" => {
                let value = next_value(&args, &mut i, "--workers")?;
                workers = value
                    .parse()
                    .map_err(|_| format!("Invalid worker count: {}", value))?;
                if workers == 0 {
                    return Err("Worker count must be at least 1".to_string());
                }
            }
            "--range" => {
                let lo = parse_bound(next_value(&args, &mut i, "--range")?)?;
                let hi = parse_bound(next_value(&args, &mut i, "--range")?)?;
                if lo > hi || hi > SEED_SPACE {
                    return Err(format!("Invalid range: {}..{}", lo, hi));
                }
                range = lo..hi;
            }
            "--seed" => {
                let value = next_value(&args, &mut i, "--seed")?;
                trace_seed = Some(
                    parse_seed_literal(value).map_err(|_| format!("Invalid seed: {}", value))?,
                );
            }
            "--output" => {
                output = Some(PathBuf::from(next_value(&args, &mut i, "--output")?));
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        workers,
        range,
        trace_seed,
        output,
    })
}

fn describe(label: &str, mon: &Pokemon, filter: &FilterChain) {
    let ivs = &mon.ivs;
    println!(
        "{}: hp {} atk {} def {} spa {} spd {} spe {}",
        label, ivs.hp, ivs.atk, ivs.def, ivs.spa, ivs.spd, ivs.spe
    );
    println!(
        "  hidden power {:?} {} / nature {:?} / pid {:08X} / filter {}",
        mon.hidden_power.kind,
        mon.hidden_power.power,
        mon.nature,
        mon.pid,
        if filter.matches(mon) { "pass" } else { "fail" }
    );
}

fn trace_seed(config: &SearchConfig, seed: u32) -> Result<(), String> {
    let searcher = Searcher::new(config).map_err(|e| e.to_string())?;
    let sequencer = searcher.sequencer();

    println!("Tracing initial seed {:08X}", seed);

    let mut draw = sequencer.begin(seed).map_err(|e| e.to_string())?;
    let trainer = draw.trainer();
    println!("TID {} / SID {}", trainer.tid, trainer.sid);

    let labels = ["Umbreon", "Espeon"];
    for (index, filter) in config.starter_filters.iter().enumerate() {
        let mon = draw.next_starter().map_err(|e| e.to_string())?;
        describe(labels.get(index).unwrap_or(&"Starter"), &mon, filter);
    }
    println!("State after starters: {:08X}", draw.rng().seed());

    let frames: Vec<u32> = sequencer
        .secondary_frames(seed)
        .filter(|(_, mon)| config.secondary_filter.matches(mon))
        .map(|(frame, _)| frame)
        .collect();
    println!(
        "Quilava frames passing the filter: {} {:?}",
        frames.len(),
        frames
    );

    Ok(())
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

    let config = SearchConfig::default().with_workers(args.workers);

    if let Some(seed) = args.trace_seed {
        if let Err(e) = trace_seed(&config, seed) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    println!(
        "Searching seeds {:#X}..{:#X} with {} workers...",
        args.range.start, args.range.end, args.workers
    );
    let start = Instant::now();

    let found = Mutex::new(Vec::<SeedMatch>::new());
    let on_match = |m: SeedMatch| {
        println!(
            "found good espeon/quilava pair at initial seed {:08X} and quilava frame {}",
            m.seed, m.frame
        );
        if let Ok(mut found) = found.lock() {
            found.push(m);
        }
    };
    let on_progress = |current: u64, total: u64| {
        let progress = if total > 0 {
            (current as f64 / total as f64) * 100.0
        } else {
            100.0
        };
        eprint!("\r[Search] Progress: {:.2}% ({}/{})", progress, current, total);
        io::stderr().flush().ok();
    };

    let summary = match search_seed_space(&config, args.range, on_match, on_progress) {
        Ok(s) => s,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!();

    println!(
        "Scanned {} seeds in {:.2} seconds, {} matches",
        summary.seeds_scanned,
        start.elapsed().as_secs_f64(),
        summary.matches
    );

    if let Some(path) = args.output {
        let found = found.into_inner().unwrap_or_default();
        let seeds: KnownSeeds = found.iter().map(|m| m.seed).collect();
        if let Err(e) = save_seed_list(&path, seeds.as_slice()) {
            eprintln!("Error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Wrote {} seeds to {}", seeds.len(), path.display());
    }
}
