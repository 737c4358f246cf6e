use std::fmt;
use std::sync::Arc;

use cubescramble_notation::{Modifier, Move, format_moves};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{GeneratorSettings, MAX_SCRAMBLE_LENGTH, Puzzle, RandomSource, ScrambleError};

/// Number of moves that were not accepted through ordinary random proposals.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FallbackStats {
    /// Moves chosen directly from the faces allowed after the retry budget
    /// ran out. These still satisfy the no-repeat rule, possibly with a
    /// shortened window.
    pub patched: u32,
    /// Moves chosen with no constraints at all because no face was allowed.
    pub unconstrained: u32,
}

/// Sequence of moves that scrambles a puzzle.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// Puzzle size.
    pub puzzle: u32,
    /// Moves, in order.
    pub moves: Vec<Move>,
    /// Record of how often the generator had to fall back.
    pub fallbacks: FallbackStats,
}

impl Scramble {
    /// Returns the number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns whether the scramble has no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns each move as a notation token, such as `R`, `U'`, or `Fw2`.
    pub fn tokens(&self) -> impl Iterator<Item = String> {
        self.moves.iter().map(|m| m.to_string())
    }
}

/// Space-separated moves.
impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_moves(&self.moves))
    }
}

/// Random-move scramble generator for a single puzzle.
#[derive(Debug, Clone)]
pub struct ScrambleGenerator {
    puzzle: Arc<Puzzle>,
    settings: GeneratorSettings,
}

impl ScrambleGenerator {
    /// Constructs a generator for `puzzle`.
    pub fn new(puzzle: Arc<Puzzle>, settings: GeneratorSettings) -> Self {
        Self { puzzle, settings }
    }

    /// Returns the puzzle that the generator scrambles.
    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }

    /// Returns the generator settings.
    pub fn settings(&self) -> GeneratorSettings {
        self.settings
    }

    /// Generates a scramble of exactly `move_count` moves.
    ///
    /// Each move is proposed at random and accepted if
    /// [`Self::is_allowed()`]. After [`GeneratorSettings::retry_budget`]
    /// rejected proposals, the move is instead chosen directly from the faces
    /// that are allowed, shrinking the window one move at a time until some
    /// face is allowed. If no face is allowed even with a window of one move,
    /// an unconstrained random move is used so that generation always
    /// terminates.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        move_count: u32,
        rng: &mut R,
    ) -> Result<Scramble, ScrambleError> {
        if move_count > MAX_SCRAMBLE_LENGTH {
            return Err(ScrambleError::LengthTooLarge {
                requested: move_count,
                max: MAX_SCRAMBLE_LENGTH,
            });
        }

        let mut history = Vec::with_capacity(move_count as usize);
        let mut moves = Vec::with_capacity(move_count as usize);
        let mut fallbacks = FallbackStats::default();

        for position in 0..move_count as usize {
            let (face, modifier) = match self.propose_until_allowed(&history, rng) {
                Some(accepted) => accepted,
                None => self.fallback(&history, rng, &mut fallbacks, position),
            };
            history.push(face);
            moves.push(self.puzzle.faces[face].face.with_modifier(modifier));
        }

        Ok(Scramble {
            puzzle: self.puzzle.size,
            moves,
            fallbacks,
        })
    }

    /// Returns whether the face `candidate` may follow the faces in
    /// `history`, considering only the last `window` of them.
    ///
    /// The first move is always allowed. After that, a face may not equal the
    /// previous face, nor equal or oppose any face in the window.
    pub fn is_allowed(&self, history: &[usize], candidate: usize, window: usize) -> bool {
        let Some(&last) = history.last() else {
            return true;
        };
        let window_start = history.len().saturating_sub(window);
        last != candidate
            && history[window_start..]
                .iter()
                .all(|&earlier| !self.puzzle.conflicts(earlier, candidate))
    }

    fn propose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (usize, Modifier) {
        let face = rng.index(self.puzzle.face_count());
        (face, random_modifier(rng))
    }

    fn propose_until_allowed<R: RandomSource + ?Sized>(
        &self,
        history: &[usize],
        rng: &mut R,
    ) -> Option<(usize, Modifier)> {
        (0..self.settings.retry_budget).find_map(|_| {
            let (face, modifier) = self.propose(rng);
            self.is_allowed(history, face, self.settings.window)
                .then_some((face, modifier))
        })
    }

    fn fallback<R: RandomSource + ?Sized>(
        &self,
        history: &[usize],
        rng: &mut R,
        fallbacks: &mut FallbackStats,
        position: usize,
    ) -> (usize, Modifier) {
        for window in (1..=self.settings.window.max(1)).rev() {
            let candidates = (0..self.puzzle.face_count())
                .filter(|&face| self.is_allowed(history, face, window))
                .collect_vec();
            if candidates.is_empty() {
                continue;
            }

            let face = candidates[rng.index(candidates.len())];
            log::debug!(
                "retry budget exhausted for move {} of {} scramble; \
                 chose {} from {} allowed faces with a window of {window}",
                position + 1,
                self.puzzle.name,
                self.puzzle.faces[face].face,
                candidates.len(),
            );
            fallbacks.patched += 1;
            return (face, random_modifier(rng));
        }

        log::warn!(
            "no face is allowed for move {} of {} scramble; choosing an unconstrained move",
            position + 1,
            self.puzzle.name,
        );
        fallbacks.unconstrained += 1;
        self.propose(rng)
    }
}

fn random_modifier<R: RandomSource + ?Sized>(rng: &mut R) -> Modifier {
    Modifier::ALL[rng.index(Modifier::ALL.len())]
}
