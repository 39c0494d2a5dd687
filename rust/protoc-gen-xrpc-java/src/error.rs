use std::fmt;

/// A fatal plugin error. The run aborts with a nonzero exit; there is no
/// per-service partial success.
#[derive(Debug)]
pub enum Error {
    /// Reading stdin or writing stdout failed.
    Io(std::io::Error),

    /// The request envelope was not a valid `CodeGeneratorRequest`.
    Decode(prost::DecodeError),

    /// A file named in `file_to_generate` is missing from the request's
    /// descriptor set.
    MissingFile { name: String },

    /// A method's input or output type has no known Java name.
    UnresolvableType { name: String },

    /// The generator violated one of its own emission contracts.
    Codegen(xrpc_codegen::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error on plugin stream: {err}"),
            Error::Decode(err) => write!(f, "malformed code generator request: {err}"),
            Error::MissingFile { name } => {
                write!(f, "file to generate is not in the descriptor set: {name}")
            }
            Error::UnresolvableType { name } => {
                write!(f, "no Java name for message type: {name}")
            }
            Error::Codegen(err) => write!(f, "emission failed: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Codegen(err) => Some(err),
            Error::MissingFile { .. } | Error::UnresolvableType { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<xrpc_codegen::Error> for Error {
    fn from(err: xrpc_codegen::Error) -> Self {
        Error::Codegen(err)
    }
}

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;
