//! Random-move scramble generator for cube puzzles from 2x2x2 to 5x5x5.
//!
//! A scramble is built one move at a time. Each candidate move is drawn at
//! random and accepted only if its face does not repeat, or oppose, a face in a
//! short trailing window of the moves already accepted. When too many
//! candidates are rejected in a row, the generator falls back to choosing
//! directly from the faces that are still allowed.
//!
//! ```
//! let tokens = cubescramble_core::generate(3, 20).unwrap();
//! assert_eq!(tokens.len(), 20);
//! ```

#[macro_use]
extern crate lazy_static;

mod check;
mod error;
mod generator;
mod params;
mod puzzle;
mod rng;
mod schema;
mod table;

/// Re-export of `cubescramble_notation`.
pub use cubescramble_notation as notation;

pub use crate::check::Violation;
pub use crate::error::{ScrambleError, TableError};
pub use crate::generator::{FallbackStats, Scramble, ScrambleGenerator};
pub use crate::params::{ScrambleLength, ScrambleParams, SeededScramble};
pub use crate::puzzle::{FaceInfo, LegendEntry, Puzzle};
pub use crate::rng::RandomSource;
pub use crate::table::{ENV_PREFIX, GeneratorSettings, ScramblerConfig};

/// Maximum number of moves in a single scramble.
pub const MAX_SCRAMBLE_LENGTH: u32 = 10_000;

/// Default number of random proposals to try for each move before falling
/// back to choosing from the allowed faces directly.
pub const DEFAULT_RETRY_BUDGET: u32 = 50;

/// Default number of preceding moves whose faces (and opposite faces) a new
/// move may not use.
pub const DEFAULT_WINDOW: usize = 3;

/// Generates a scramble for a puzzle in the built-in table using the
/// thread-local random number generator, and returns it as a list of move
/// tokens such as `R`, `U'`, or `Fw2`.
pub fn generate(puzzle_size: u32, move_count: u32) -> Result<Vec<String>, ScrambleError> {
    let scramble = ScramblerConfig::builtin().generate(puzzle_size, move_count, &mut rand::rng())?;
    Ok(scramble.tokens().collect())
}

#[cfg(test)]
mod tests;
