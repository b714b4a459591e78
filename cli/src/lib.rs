//! Command-line front end for the reproducible generator
//!
//! Prints draws, shuffles and samples for a seed, and writes or resumes
//! checkpoints, so a sequence seen in one run can be replayed in another.

pub mod cli;
pub mod commands;
