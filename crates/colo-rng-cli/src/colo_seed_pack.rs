//! Seed list packing CLI
//!
//! Usage: colo_seed_pack <INPUT.txt> <OUTPUT.cseed>
//!
//! Converts a text seed list into a sorted binary seed set.

use colo_rng::{KnownSeeds, load_seed_list, save_seed_set};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <INPUT.txt> <OUTPUT.cseed>", program);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        std::process::exit(0);
    }

    if args.len() != 3 {
        print_usage(args.first().map(String::as_str).unwrap_or("colo_seed_pack"));
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = PathBuf::from(&args[2]);
    let start = Instant::now();

    let raw = match load_seed_list(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}: {}", input.display(), e);
            std::process::exit(1);
        }
    };
    let read = raw.len();
    let seeds = KnownSeeds::new(raw);

    if let Err(e) = save_seed_set(&output, &seeds) {
        eprintln!("Error: {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!(
        "Packed {} seeds ({} duplicates removed) into {} in {:.3} seconds",
        seeds.len(),
        read - seeds.len(),
        output.display(),
        start.elapsed().as_secs_f64()
    );
}
