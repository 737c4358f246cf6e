use thiserror::Error;

/// Error produced when parsing a face name.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseFaceError {
    /// Face name is empty
    #[error("face name is empty")]
    Empty,
    /// Face name contains a character other than a Latin letter
    #[error("invalid character {0:?} in face name")]
    InvalidChar(char),
}

/// Error produced when parsing a single move from a string.
///
/// This owns its messages so that it can outlive the input string.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("invalid move {input:?}: {}", messages.join("; "))]
pub struct ParseMoveError {
    /// Input string.
    pub input: String,
    /// Messages from the parser.
    pub messages: Vec<String>,
}
