//! Console clock offset search CLI
//!
//! Usage: colo_seed_offset [options]
//!
//! Options:
//!   --target <SEED>    Seed to hit (default: 0xDD9B8CA5)
//!   --base <SEED>      Clock seed at 0 seconds (default: 0x24113DB6)
//!   --ticks <N>        Clock ticks per second (default: 40500000)
//!   --window <N>       Accepted distance from the target (default: 64)
//!   --seconds <N>      Seconds scanned (default: 2^27)
//!   --help, -h         Show help
//!
//! Example: colo_seed_offset --target 0xDD9B8CA5

use colo_rng::{WindowSearch, find_window_hits_with_progress, parse_seed_literal};
use std::env;
use std::io::{self, Write};
use std::time::Instant;

fn print_usage(program: &str) {
    let defaults = WindowSearch::default();
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --target <SEED>    Seed to hit (default: 0x{:08X})",
        defaults.target
    );
    eprintln!(
        "  --base <SEED>      Clock seed at 0 seconds (default: 0x{:08X})",
        defaults.base
    );
    eprintln!(
        "  --ticks <N>        Clock ticks per second (default: {})",
        defaults.step
    );
    eprintln!(
        "  --window <N>       Accepted distance from the target (default: {})",
        defaults.window
    );
    eprintln!(
        "  --seconds <N>      Seconds scanned (default: {})",
        defaults.steps
    );
    eprintln!("  --help, -h         Show this help message");
}

fn parse_args() -> Result<WindowSearch, String> {
    let args: Vec<String> = env::args().collect();
    let mut search = WindowSearch::default();

    let mut i = 1;
    while i < args.len() {
        let option = args[i].as_str();
        if option == "--help" || option == "-h" {
            print_usage(&args[0]);
            std::process::exit(0);
        }

        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| format!("{} requires a value", option))?;
        let parsed = parse_seed_literal(value).map_err(|_| format!("Invalid value: {}", value));

        match option {
            "--target" => search.target = parsed?,
            "--base" => search.base = parsed?,
            "--ticks" => search.step = parsed?,
            "--window" => search.window = parsed?,
            "--seconds" => search.steps = parsed?,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(search)
}

fn main() {
    let search = match parse_args() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    println!(
        "Scanning {} seconds for seed 0x{:08X} (window ±{})...",
        search.steps, search.target, search.window
    );
    let start = Instant::now();

    let hits = find_window_hits_with_progress(&search, |current, total| {
        let progress = if total > 0 {
            (current as f64 / total as f64) * 100.0
        } else {
            100.0
        };
        eprint!("\r[Offset] Progress: {:.2}% ({}/{})", progress, current, total);
        io::stderr().flush().ok();
    });
    eprintln!();

    for hit in &hits {
        println!(
            "Potential seed hit at {} seconds (base seed 0x{:08X}, offset {})",
            hit.step, hit.seed, hit.offset
        );
    }

    println!(
        "{} hits in {:.2} seconds",
        hits.len(),
        start.elapsed().as_secs_f64()
    );
}
