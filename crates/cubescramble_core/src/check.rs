use std::fmt;

use cubescramble_notation::{Face, Move};
use itertools::Itertools;
use serde::Serialize;

use crate::Puzzle;

/// Redundant or invalid move in a scramble.
///
/// Positions are zero-based indices into the move list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Violation {
    /// Face is not used for scrambling the puzzle.
    UnknownFace { position: usize, face: Face },
    /// Face is the same as the previous move's face.
    ImmediateRepeat { position: usize },
    /// Face is the same as the face of an earlier move in the window.
    SameFaceInWindow { position: usize, earlier: usize },
    /// Face is opposite the face of an earlier move in the window.
    OppositeFaceInWindow { position: usize, earlier: usize },
}

impl Violation {
    /// Returns the position of the offending move.
    pub fn position(&self) -> usize {
        match self {
            Violation::UnknownFace { position, .. }
            | Violation::ImmediateRepeat { position }
            | Violation::SameFaceInWindow { position, .. }
            | Violation::OppositeFaceInWindow { position, .. } => *position,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Moves are numbered from 1 for humans.
        match self {
            Violation::UnknownFace { position, face } => {
                write!(f, "move {}: unknown face {face}", position + 1)
            }
            Violation::ImmediateRepeat { position } => {
                write!(f, "move {}: repeats the previous face", position + 1)
            }
            Violation::SameFaceInWindow { position, earlier } => {
                write!(f, "move {}: repeats the face of move {}", position + 1, earlier + 1)
            }
            Violation::OppositeFaceInWindow { position, earlier } => {
                write!(f, "move {}: opposes the face of move {}", position + 1, earlier + 1)
            }
        }
    }
}

impl Puzzle {
    /// Checks a move list against the same rules the generator uses, with a
    /// trailing window of `window` moves, and returns every violation.
    ///
    /// The previous move is always checked for an immediate repeat, even if
    /// `window` is zero.
    pub fn check(&self, moves: &[Move], window: usize) -> Vec<Violation> {
        let faces = moves.iter().map(|m| self.face_index(&m.face)).collect_vec();
        let window = window.max(1);

        let mut violations = vec![];
        for (position, m) in moves.iter().enumerate() {
            let Some(face) = faces[position] else {
                violations.push(Violation::UnknownFace {
                    position,
                    face: m.face.clone(),
                });
                continue;
            };

            for earlier in position.saturating_sub(window)..position {
                let Some(earlier_face) = faces[earlier] else {
                    continue;
                };
                if earlier_face == face {
                    violations.push(if earlier + 1 == position {
                        Violation::ImmediateRepeat { position }
                    } else {
                        Violation::SameFaceInWindow { position, earlier }
                    });
                } else if self.opposite(earlier_face) == Some(face) {
                    violations.push(Violation::OppositeFaceInWindow { position, earlier });
                }
            }
        }
        violations
    }
}
