//! Argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "repro-random", version, about = "Reproducible random sequences")]
pub struct Cli {
    /// JSON config file (`{"seed": N}`) used when no --seed is given
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a fresh seed from the seed provider
    Seed,

    /// Print bounded integers (or reals in [0, 1) with --real)
    Draw {
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 10)]
        count: usize,

        #[arg(long, default_value_t = u32::MAX, value_parser = clap::value_parser!(u32).range(1..))]
        max: u32,

        #[arg(long)]
        real: bool,
    },

    /// Print the items in shuffled order
    Shuffle {
        #[arg(long)]
        seed: Option<u64>,

        items: Vec<String>,
    },

    /// Print a random selection of the items
    Sample {
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        choices: usize,

        items: Vec<String>,
    },

    /// Advance a generator by --skip draws and save its state
    Checkpoint {
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 0)]
        skip: usize,

        #[arg(long)]
        out: PathBuf,

        /// Write a JSON checkpoint instead of the text layout
        #[arg(long)]
        json: bool,
    },

    /// Load a saved state and print the draws that follow
    Resume {
        #[arg(long)]
        state: PathBuf,

        /// Read a JSON checkpoint instead of the text layout
        #[arg(long)]
        json: bool,

        #[arg(long, default_value_t = 10)]
        count: usize,

        #[arg(long, default_value_t = u32::MAX, value_parser = clap::value_parser!(u32).range(1..))]
        max: u32,
    },
}
