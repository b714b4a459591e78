//! Command execution
//!
//! Everything is written to the supplied writer so commands can be tested
//! without a terminal. Logging goes through `tracing` and never mixes with
//! the printed values.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use repro_random::{Random, RandomConfig, SeedProvider};
use tracing::info;

use crate::cli::Command;

/// Run one command against `config`, printing results to `out`
pub fn execute<W: Write>(command: &Command, config: &RandomConfig, out: &mut W) -> Result<()> {
    match command {
        Command::Seed => {
            writeln!(out, "{}", SeedProvider::global().next_seed())?;
        }
        Command::Draw {
            seed,
            count,
            max,
            real,
        } => {
            let mut rng = generator(*seed, config);
            print_draws(&mut rng, *count, *max, *real, out)?;
        }
        Command::Shuffle { seed, items } => {
            let mut rng = generator(*seed, config);
            let mut items = items.clone();
            rng.shuffle(&mut items);
            writeln!(out, "{}", items.join(" "))?;
        }
        Command::Sample {
            seed,
            choices,
            items,
        } => {
            let mut rng = generator(*seed, config);
            let picked = rng.sample(items, *choices)?;
            writeln!(out, "{}", picked.join(" "))?;
        }
        Command::Checkpoint {
            seed,
            skip,
            out: path,
            json,
        } => {
            let mut rng = generator(*seed, config);
            for _ in 0..*skip {
                rng.next_uint32();
            }
            write_checkpoint(&rng, path, *json)?;
            info!(seed = rng.seed(), skip, path = %path.display(), "checkpoint written");
            writeln!(out, "{}", path.display())?;
        }
        Command::Resume {
            state,
            json,
            count,
            max,
        } => {
            let mut rng = read_checkpoint(state, *json)?;
            info!(seed = rng.seed(), path = %state.display(), "resumed from checkpoint");
            print_draws(&mut rng, *count, *max, false, out)?;
        }
    }
    Ok(())
}

/// `--seed` wins over the config file; with neither, a fresh seed is used
fn generator(seed: Option<u64>, config: &RandomConfig) -> Random {
    match seed {
        Some(seed) => Random::new(seed),
        None => config.build(),
    }
}

fn print_draws<W: Write>(rng: &mut Random, count: usize, max: u32, real: bool, out: &mut W) -> Result<()> {
    for _ in 0..count {
        if real {
            writeln!(out, "{}", rng.get_real64())?;
        } else {
            writeln!(out, "{}", rng.get_uint32(max))?;
        }
    }
    Ok(())
}

fn write_checkpoint(rng: &Random, path: &Path, json: bool) -> Result<()> {
    if json {
        std::fs::write(path, rng.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
    } else {
        rng.save_to_file(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn read_checkpoint(path: &Path, json: bool) -> Result<Random> {
    if json {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Random::from_json(&text)?)
    } else {
        let mut rng = Random::new(0);
        rng.load_from_file(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(command: Command) -> Vec<String> {
        let mut out = Vec::new();
        execute(&command, &RandomConfig::default(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("repro_random_cli_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_draw_prints_recorded_values() {
        let lines = run(Command::Draw {
            seed: Some(42),
            count: 3,
            max: 1_000_000,
            real: false,
        });
        assert_eq!(lines, vec!["120406", "494824", "741450"]);
    }

    #[test]
    fn test_draw_uses_config_seed() {
        let command = Command::Draw {
            seed: None,
            count: 2,
            max: 1_000_000,
            real: false,
        };
        let mut out = Vec::new();
        execute(&command, &RandomConfig::with_seed(42), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "120406\n494824\n");
    }

    #[test]
    fn test_shuffle_and_sample() {
        let items: Vec<String> = "a b c d e f".split(' ').map(str::to_string).collect();
        let shuffled = run(Command::Shuffle {
            seed: Some(7),
            items: items.clone(),
        });
        assert_eq!(shuffled.len(), 1);

        let sampled = run(Command::Sample {
            seed: Some(7),
            choices: 3,
            items,
        });
        assert_eq!(sampled, vec!["f b e"]);
    }

    #[test]
    fn test_sample_too_many_is_error() {
        let command = Command::Sample {
            seed: Some(1),
            choices: 5,
            items: vec!["x".to_string()],
        };
        let mut out = Vec::new();
        assert!(execute(&command, &RandomConfig::default(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_checkpoint_then_resume_matches_uninterrupted_run() {
        for json in [false, true] {
            let path = temp_path(if json { "resume.json" } else { "resume.txt" });
            run(Command::Checkpoint {
                seed: Some(42),
                skip: 3,
                out: path.clone(),
                json,
            });
            let resumed = run(Command::Resume {
                state: path.clone(),
                json,
                count: 5,
                max: 1_000_000,
            });
            std::fs::remove_file(&path).unwrap();

            assert_eq!(resumed, vec!["155662", "439381", "978428", "613536", "566144"]);
        }
    }

    #[test]
    fn test_resume_missing_file_mentions_path() {
        let path = temp_path("missing_state");
        let command = Command::Resume {
            state: path.clone(),
            json: false,
            count: 1,
            max: 10,
        };
        let mut out = Vec::new();
        let err = execute(&command, &RandomConfig::default(), &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("missing_state"));
    }
}
