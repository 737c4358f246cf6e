use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::Scramble;

/// Parameters to deterministically generate a scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Puzzle size.
    pub puzzle: u32,
    /// Number of moves to generate.
    pub length: ScrambleLength,
    /// Time when the scramble was requested.
    pub time: DateTime<Utc>,
    /// Random seed. Identical seeds produce identical scrambles.
    pub seed: String,
}

impl ScrambleParams {
    /// Generates new scramble parameters based on the current time and a
    /// random number.
    pub fn new(puzzle: u32, length: ScrambleLength) -> Self {
        let time = now();
        let seed = Self::seed_from_time_and_u64(time, rand::rng().random());
        Self {
            puzzle,
            length,
            time,
            seed,
        }
    }

    /// Constructs scramble parameters with a specific seed, to reproduce an
    /// earlier scramble.
    pub fn with_seed(puzzle: u32, length: ScrambleLength, seed: impl Into<String>) -> Self {
        Self {
            puzzle,
            length,
            time: now(),
            seed: seed.into(),
        }
    }

    /// Returns a random number generator seeded from [`Self::seed`].
    ///
    /// **Changing this will break reproducibility of existing seeds.**
    pub fn rng(&self) -> ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        ChaCha12Rng::from_seed(seed)
    }

    fn seed_from_time_and_u64(time: DateTime<Utc>, random_u64: u64) -> String {
        let time = time.to_rfc3339_opts(SecondsFormat::Millis, true);
        format!("{time}_{random_u64}")
    }
}

fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3) // nearest millisecond
}

/// Number of moves in a scramble.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScrambleLength {
    /// Recommended number of moves for the puzzle.
    #[default]
    Default,
    /// Specific number of moves.
    Moves(u32),
}

impl ScrambleLength {
    /// Returns the number of moves, given the puzzle's recommended length.
    pub fn resolve(self, default_length: u32) -> u32 {
        match self {
            ScrambleLength::Default => default_length,
            ScrambleLength::Moves(n) => n,
        }
    }
}

/// Output of generating a scramble from [`ScrambleParams`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SeededScramble {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Display name of the puzzle.
    pub puzzle_name: String,
    /// Generated scramble.
    pub scramble: Scramble,
}
