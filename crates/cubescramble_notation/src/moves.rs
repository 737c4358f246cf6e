use std::fmt;
use std::str::FromStr;

use chumsky::Parser;
use itertools::Itertools;

use crate::{Modifier, ParseFaceError, ParseMoveError, Str};

/// Base face of a move, stripped of its modifier.
///
/// Examples: `R`, `r`, `Rw`, `M`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face(Str);

impl Face {
    /// Constructs a face, checking that the name is a non-empty run of Latin
    /// letters.
    pub fn new(name: &str) -> Result<Self, ParseFaceError> {
        if name.is_empty() {
            return Err(ParseFaceError::Empty);
        }
        if let Some(c) = name.chars().find(|&c| !crate::charsets::is_face_char(c)) {
            return Err(ParseFaceError::InvalidChar(c));
        }
        Ok(Self(name.into()))
    }

    /// Constructs a face without checking the name.
    pub(crate) fn new_unchecked(name: &str) -> Self {
        Self(name.into())
    }

    /// Returns the face name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a move turning this face with `modifier`.
    pub fn with_modifier(&self, modifier: Modifier) -> Move {
        Move {
            face: self.clone(),
            modifier,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Single turn in a scramble.
///
/// Example: `Rw'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Amount and direction of the turn.
    pub modifier: Modifier,
}

impl Move {
    /// Constructs a move.
    pub fn new(face: Face, modifier: Modifier) -> Self {
        Self { face, modifier }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.modifier)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::single_move()
            .parse(s)
            .into_result()
            .map_err(|errors| ParseMoveError {
                input: s.to_string(),
                messages: errors.iter().map(|e| e.to_string()).collect(),
            })
    }
}

/// Formats a list of moves as space-separated text.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}
