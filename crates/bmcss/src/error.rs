//! Error types for box-model value validation.
//!
//! Every way a raw control value can be rejected has its own variant, so
//! callers can log precisely why an input was skipped.

use thiserror::Error;

/// Errors produced when validating raw control input.
///
/// # Examples
///
/// ```rust
/// use bmcss::parser::parse_px;
/// use bmcss::BmcssError;
///
/// assert!(matches!(parse_px(""), Err(BmcssError::EmptyValue)));
/// assert!(matches!(parse_px("-4"), Err(BmcssError::NegativeLength(_))));
/// ```
#[derive(Error, Debug, PartialEq)]
pub enum BmcssError {
    /// The input was empty or all whitespace.
    #[error("empty value")]
    EmptyValue,

    /// The input is not a well-formed length.
    ///
    /// Covers non-numeric input and trailing garbage after the number
    /// (e.g. `"12px3"`).
    #[error("invalid length: {0:?}")]
    InvalidLength(String),

    /// The input parsed as a length but is negative.
    ///
    /// Box-model lengths are never negative; rejecting here keeps the
    /// target element's style untouched.
    #[error("negative length: {0:?}")]
    NegativeLength(String),

    /// The input is not one of the keywords the property accepts.
    #[error("unknown keyword: {0:?}")]
    UnknownKeyword(String),
}
