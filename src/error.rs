//! Error types for the I/O-facing helpers.
//!
//! The codec itself never fails: encoding is total and decoding is best-effort,
//! returning whatever pairs it could recognise. Errors only arise at the edges,
//! when text is written to or read from an I/O stream or raw bytes are not
//! valid UTF-8.
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::{from_slice, Error};
//!
//! let result = from_slice(&[0xff, 0xfe]);
//! assert!(matches!(result, Err(Error::Utf8(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors that can occur around encoding and decoding.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for stream reading/writing failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::Error;
    ///
    /// let err = Error::io("broken pipe");
    /// assert_eq!(err.to_string(), "IO error: broken pipe");
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a UTF-8 error for byte input that cannot be decoded as text.
    pub fn utf8<T: fmt::Display>(msg: T) -> Self {
        Error::Utf8(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatjson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::utf8(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: Error = io_err.into();
        assert_eq!(err, Error::Io("disk full".to_string()));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::utf8("bad byte").to_string(), "Invalid UTF-8: bad byte");
        assert_eq!(Error::custom(42).to_string(), "Error: 42");
    }
}
