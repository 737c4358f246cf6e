use std::sync::Arc;

use cubescramble_notation::Move;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::{GeneratorSettings, Puzzle, RandomSource, ScrambleGenerator, ScramblerConfig};

mod check;

/// Random source that replays a fixed list of values, wrapping around at the
/// end. Each value is reduced modulo the requested length.
struct ScriptedSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % len
    }
}

fn builtin_puzzle(size: u32) -> Arc<Puzzle> {
    Arc::clone(ScramblerConfig::builtin().puzzle(size).unwrap())
}

fn generator_with_window(size: u32, window: usize) -> ScrambleGenerator {
    let settings = GeneratorSettings {
        window,
        ..GeneratorSettings::default()
    };
    ScrambleGenerator::new(builtin_puzzle(size), settings)
}

fn seeded_rng(seed: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed)
}

fn face_names(moves: &[Move]) -> Vec<&str> {
    moves.iter().map(|m| m.face.as_str()).collect()
}
