use std::fmt;

/// A fatal generation error.
///
/// Every variant is a contract violation inside the generator itself, not a
/// property of the input schema. There is no recovery path: the unit being
/// emitted is abandoned and the whole run fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A template referenced a variable the caller never supplied.
    UndefinedVariable { name: String },

    /// A template contains a `$` with no closing `$`.
    UnterminatedVariable { template: String },

    /// More outdents than indents.
    IndentUnderflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UndefinedVariable { name } => {
                write!(f, "undefined template variable: {name}")
            }
            Error::UnterminatedVariable { template } => {
                write!(f, "unterminated variable reference in template {template:?}")
            }
            Error::IndentUnderflow => write!(f, "outdent without matching indent"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
