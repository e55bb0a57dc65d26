//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Generate a random puzzle
//! - Regenerate a specific puzzle from its seed
//! - Sample several puzzles and keep the one with the most empty cells
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Regenerate a known puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Sample 1000 puzzles and print the one with the most empty cells:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --tries 1000
//! ```

use std::process;

use clap::Parser;
use ninefold_core::Position;
use ninefold_generator::{GeneratedPuzzle, generate, generate_with_seed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to regenerate a specific puzzle. Overrides sampling.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Puzzles to sample; the one with the most empty cells is kept.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    tries: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(seed) = args.seed {
        print_puzzle(&generate_with_seed(seed));
        return;
    }

    if args.tries == 0 {
        eprintln!("--tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.tries)
        .into_par_iter()
        .map(|_| generate())
        .max_by_key(empty_cell_count)
        .unwrap();
    print_puzzle(&best);
}

fn empty_cell_count(puzzle: &GeneratedPuzzle) -> usize {
    Position::ALL
        .iter()
        .filter(|pos| puzzle.problem.get(**pos).is_none())
        .count()
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
    println!("Empty cells:");
    println!("  {}", empty_cell_count(puzzle));
}
