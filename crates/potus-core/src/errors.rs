//! Error types for the potus workspace.
//!
//! One `thiserror`-derived enum covers every failure mode: term-splitting
//! problems, unrecognized date segments, calendar-date construction, and
//! histogram range violations.  The `ensure!` and `fail!` macros are the
//! usual shorthands for precondition checks and early bail-outs.

use thiserror::Error;

/// The top-level error type used throughout the potus workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A term string has no usable split point, carries the open-tenure
    /// marker on its start side, or describes an inverted range.
    #[error("malformed term: {0}")]
    MalformedTerm(String),

    /// A term segment matches no recognized date grammar.
    #[error("unparseable date segment: {segment:?}")]
    DateParse {
        /// The offending segment, trimmed, as it was classified.
        segment: String,
    },

    /// Calendar-date construction failure.
    #[error("date error: {0}")]
    Date(String),

    /// A histogram value falls outside the configured bin edges.
    #[error("value {value} outside bin range (limit {limit})")]
    OutOfRange {
        /// The value that could not be binned.
        value: i32,
        /// The edge it violated.
        limit: i32,
    },
}

/// Shorthand `Result` type used throughout the potus workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition, returning `Err(Error::Precondition(...))` if it
/// does not hold.
///
/// # Example
/// ```
/// use potus_core::ensure;
/// fn positive(x: i32) -> potus_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use potus_core::fail;
/// fn always_err() -> potus_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
