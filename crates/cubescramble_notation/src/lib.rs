//! Cube move notation parser and serializer.
//!
//! Only the subset of notation that appears in random-move scrambles is
//! supported: a face (such as `R`, `r`, `Rw`, or `M`) followed by an optional
//! modifier (`'` or `2`).

pub mod charsets;
mod common;
mod errors;
mod moves;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;

pub use common::Modifier;
pub use errors::{ParseFaceError, ParseMoveError};
pub use moves::{Face, Move, format_moves};
pub use parse::{ParseError, parse_moves};

/// String type.
pub type Str = lean_string::LeanString;

/// Span in a string of move notation.
pub type Span = chumsky::span::SimpleSpan;

#[cfg(test)]
mod tests;
