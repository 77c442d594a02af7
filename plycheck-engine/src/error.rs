//! Plycheck Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::io;
use std::result;

/// Plycheck Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for Plycheck engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A dump line split into zero or more than three tokens.
    LineTokenCount,
    /// The value token of a dump line is not an integer.
    LineValue,

    /// A record holds no tree lines at all.
    EmptyRecord,
    /// TreeBuilder was asked to build from an exhausted line sequence.
    EmptyTree,

    /// A search algorithm name is not recognized.
    UnknownAlgorithm,

    /// The record could not be read from its source.
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::LineTokenCount => "line token count",
            ErrorKind::LineValue => "line value not an integer",

            ErrorKind::EmptyRecord => "record has no tree lines",
            ErrorKind::EmptyTree => "tree has no root line",

            ErrorKind::UnknownAlgorithm => "unknown search algorithm",

            ErrorKind::Io => "io",
        }
    }

    /// Returns true for errors caused by a malformed dump line.
    pub fn is_format(&self) -> bool {
        matches!(self, ErrorKind::LineTokenCount | ErrorKind::LineValue)
    }

    /// Returns true for errors caused by a record whose tree cannot be formed.
    pub fn is_structural(&self) -> bool {
        matches!(self, ErrorKind::EmptyRecord | ErrorKind::EmptyTree)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Plycheck Engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(kind) | Error::Message(kind, _) | Error::Custom(kind, _) => *kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Custom(ErrorKind::Io, error.into())
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
