//! Error types for liftpass.
//!
//! Every fallible operation in the workspace reports one of the variants of
//! [`Error`]. None of them are transient: the same input always yields the
//! same error.

use thiserror::Error;

/// The top-level error type used throughout liftpass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string did not denote a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date format {input:?}: {reason}")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No base price is configured for the requested ticket type.
    #[error("no base price configured for ticket type {0:?}")]
    MissingBasePrice(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::InvalidDateFormat`].
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidDateFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout liftpass.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use lp_core::{ensure, errors::{Error, Result}};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), Error::InvalidArgument(format!("month {m}")));
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}
