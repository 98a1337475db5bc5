use thiserror::Error;

/// Errors returned when a byte sequence is not a well-formed DUID.
///
/// # Examples
/// ```
/// use duid_core::{DuidError, parse_duid};
///
/// let err = parse_duid(&[]).unwrap_err();
/// assert!(matches!(err, DuidError::Empty));
/// assert!(err.to_string().contains("empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuidError {
    #[error("malformed DUID: input is empty")]
    Empty,
    #[error("malformed DUID: too long: at most {max} bytes allowed, got {actual}")]
    TooLong { max: usize, actual: usize },
    #[error("malformed DUID: too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("malformed DUID: {extra} trailing bytes after type {duid_type} payload")]
    TrailingData { duid_type: u16, extra: usize },
    #[error("DUID type {duid_type} has a registered layout and cannot hold opaque data")]
    RegisteredType { duid_type: u16 },
}
