use std::io::Read;
use std::path::PathBuf;

use cubescramble_core::notation::parse_moves;
use cubescramble_core::{ScrambleLength, ScrambleParams, ScramblerConfig};
use eyre::{Context, Result, bail, eyre};
use itertools::Itertools;
use serde::Serialize;

/// Random-move scramble generator for cube puzzles from 2x2x2 to 5x5x5
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// YAML file to layer over the built-in puzzle table.
    ///
    /// Settings may also be overridden using environment variables such as
    /// `CUBESCRAMBLE_GENERATOR__WINDOW=2`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Generate scrambles, one per line.
    Generate {
        /// Puzzle size (such as `3` for 3x3x3)
        #[arg(short, long, default_value_t = 3)]
        size: u32,
        /// Number of moves. Defaults to the recommended length for the
        /// puzzle.
        #[arg(short = 'n', long)]
        length: Option<u32>,
        /// Seed to reproduce an earlier scramble.
        #[arg(long, conflicts_with = "count")]
        seed: Option<String>,
        /// Number of scrambles to generate.
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        /// Print scrambles as JSON, along with their seeds.
        #[arg(long)]
        json: bool,
    },
    /// Print the notation legend for a puzzle, or for all puzzles.
    Notation {
        /// Puzzle size (such as `3` for 3x3x3)
        #[arg(short, long)]
        size: Option<u32>,
    },
    /// Print all supported puzzles.
    Puzzles,
    /// Check a scramble for redundant moves and print violations as JSON.
    ///
    /// Exits with an error if there are any violations.
    Check {
        /// Puzzle size (such as `3` for 3x3x3)
        #[arg(short, long, default_value_t = 3)]
        size: u32,
        /// Number of preceding moves to compare each move against. Defaults
        /// to the configured generator window.
        #[arg(short, long)]
        window: Option<usize>,
        /// File containing the scramble, use '-' for stdin.
        #[arg(value_parser, default_value = "-")]
        input: clio::Input,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let config = ScramblerConfig::load(args.config.as_deref())
        .wrap_err("error loading puzzle table")?;

    match args.subcommand {
        Subcommand::Generate {
            size,
            length,
            seed,
            count,
            json,
        } => {
            let length = length.map_or(ScrambleLength::Default, ScrambleLength::Moves);
            let scrambles: Vec<_> = (0..count)
                .map(|_| {
                    let params = match &seed {
                        Some(seed) => ScrambleParams::with_seed(size, length, seed.clone()),
                        None => ScrambleParams::new(size, length),
                    };
                    log::debug!("generating scramble with seed {:?}", params.seed);
                    config.scramble(params)
                })
                .try_collect()?;

            if json {
                write_json_output(&scrambles)
            } else {
                for output in scrambles {
                    println!("{}", output.scramble);
                }
                Ok(())
            }
        }

        Subcommand::Notation { size } => {
            let puzzles = match size {
                Some(size) => vec![config.puzzle(size)?],
                None => config.puzzles().collect(),
            };
            for (i, puzzle) in puzzles.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{} ({} moves)", puzzle.name, puzzle.default_length);
                for entry in puzzle.legend() {
                    println!("  {entry}");
                }
            }
            Ok(())
        }

        Subcommand::Puzzles => {
            for puzzle in config.puzzles() {
                let faces = puzzle.faces.iter().map(|info| &info.face).join(" ");
                println!(
                    "{}\t{}\t{} moves\t{faces}",
                    puzzle.size, puzzle.name, puzzle.default_length,
                );
            }
            Ok(())
        }

        Subcommand::Check {
            size,
            window,
            mut input,
        } => {
            let puzzle = config.puzzle(size)?;
            let window = window.unwrap_or(config.settings.window);

            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .wrap_err("error reading scramble")?;
            let moves = parse_moves(&buffer)
                .map_err(|errors| eyre!("error parsing scramble: {}", errors.iter().join("; ")))?;

            let violations = puzzle.check(&moves, window);
            write_json_output(&violations)?;
            if !violations.is_empty() {
                bail!("scramble has {} redundant or invalid moves", violations.len());
            }
            Ok(())
        }
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_args() {
        let args = Args::try_parse_from([
            "cubescramble",
            "generate",
            "-s",
            "4",
            "-n",
            "10",
            "-c",
            "5",
        ])
        .unwrap();
        assert!(args.config.is_none());
        assert!(matches!(
            args.subcommand,
            Subcommand::Generate {
                size: 4,
                length: Some(10),
                seed: None,
                count: 5,
                json: false,
            },
        ));

        assert!(
            Args::try_parse_from(["cubescramble", "generate", "--seed", "x", "--count", "2"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_global_config() {
        let args = Args::try_parse_from(["cubescramble", "puzzles", "--config", "table.yaml"])
            .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("table.yaml")));
        assert!(matches!(args.subcommand, Subcommand::Puzzles));
    }
}
