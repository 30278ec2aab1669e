//! Error types for the pathy library.
//!
//! The parsers themselves report rejection as `None`. The `Result`-returning
//! surfaces (`FromStr`, `TryFrom<&str>`, serde) go through the same routine
//! and report why the input was refused, using `thiserror` for the plumbing.
//!
//! Broken internal invariants are not errors; they panic.

use std::fmt;

use thiserror::Error;

/// Result type alias for fallible pathy conversions.
///
/// # Examples
///
/// ```
/// use pathy::{AbsoluteDirPath, Result};
///
/// fn home() -> Result<AbsoluteDirPath> {
///     "/home/user".parse()
/// }
///
/// assert!(home().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathy library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A raw string was rejected by a parser.
    #[error("invalid path {raw:?}: {reason}")]
    InvalidPath {
        /// The rejected input.
        raw: String,
        /// Why it was rejected.
        reason: RejectReason,
    },

    /// The path parsed, but is anchored differently than requested.
    #[error("path {path} is not {expected}")]
    KindMismatch {
        /// The parsed path in canonical form.
        path: String,
        /// The requested kind.
        expected: &'static str,
    },

    /// The path parsed, but is not the requested file/directory type.
    #[error("path {path} is not a {expected}")]
    TypeMismatch {
        /// The parsed path in canonical form.
        path: String,
        /// The requested type.
        expected: &'static str,
    },
}

/// Why a parser refused a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The input was the empty string.
    Empty,
    /// Nothing but separators; there is no segment to name a file.
    NoFileName,
    /// The last segment is `.` or `..`, which cannot name a file.
    DotFileName,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty path"),
            Self::NoFileName => write!(f, "no file name"),
            Self::DotFileName => write!(f, "file name cannot be '.' or '..'"),
        }
    }
}

impl Error {
    /// Builds an [`Error::InvalidPath`] from a rejected input.
    #[must_use]
    pub fn invalid(raw: &str, reason: RejectReason) -> Self {
        Self::InvalidPath {
            raw: raw.to_owned(),
            reason,
        }
    }

    /// Check if the error came from the parser rather than a tag check.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathy::{Error, RejectReason};
    ///
    /// let err = Error::invalid("", RejectReason::Empty);
    /// assert!(err.is_rejected_input());
    /// ```
    #[must_use]
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}
