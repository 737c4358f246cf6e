use cubescramble_notation::{Face, ParseFaceError};

/// Error produced when a scramble is requested with invalid input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// Puzzle size is not in the puzzle table
    #[error("unsupported puzzle size: {0}")]
    UnsupportedPuzzleSize(u32),
    /// Requested scramble is longer than [`crate::MAX_SCRAMBLE_LENGTH`]
    #[error("scramble length {requested} exceeds the maximum of {max}")]
    LengthTooLarge {
        /// Requested number of moves.
        requested: u32,
        /// Maximum number of moves.
        max: u32,
    },
}

/// Error produced when loading or validating a puzzle table.
#[derive(thiserror::Error, Debug)]
#[allow(missing_docs)]
pub enum TableError {
    #[error("error loading configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("error parsing puzzle table: {0}")]
    Yaml(#[from] serde_norway::Error),
    #[error("invalid generator setting `{name}`: {reason}")]
    InvalidSetting {
        name: &'static str,
        reason: &'static str,
    },
    #[error("puzzle size {0} is defined more than once")]
    DuplicatePuzzleSize(u32),
    #[error("puzzle size {0} has no faces")]
    EmptyAlphabet(u32),
    #[error("puzzle size {size}: invalid face {name:?}: {source}")]
    InvalidFace {
        size: u32,
        name: String,
        #[source]
        source: ParseFaceError,
    },
    #[error("puzzle size {size}: face {face} is listed more than once")]
    DuplicateFace { size: u32, face: Face },
    #[error("puzzle size {size}: {face} is opposite {opposite}, but {opposite} is not opposite {face}")]
    AsymmetricOpposite {
        size: u32,
        face: Face,
        opposite: Face,
    },
    #[error("puzzle size {size}: default length {length} exceeds the maximum of {max}")]
    DefaultLengthTooLarge { size: u32, length: u32, max: u32 },
}
