//! Common errors of this crate.

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// General error.
    /// Returned when code violates the normal workflow of encoding or
    /// decoding a stream, such as skipping past its end.
    General(String),
    /// When the encoded stream is known to be malformed.
    OutOfSpec(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::General(message) => {
                write!(fmt, "{}", message)
            }
            Error::OutOfSpec(message) => {
                write!(fmt, "{}", message)
            }
        }
    }
}

/// A specialized `Result` for this crate's errors.
pub type Result<T> = std::result::Result<T, Error>;
