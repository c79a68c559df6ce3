//! Preconditions, postconditions and invariants
//!
//! Every public [`Name`](crate::Name) operation runs through these checks.
//! A failed check aborts the operation with one of three errors, depending
//! on who is at fault:
//!
//! - [`NameError::IllegalArgument`]: the caller passed invalid input
//! - [`NameError::MethodFailed`]: the operation broke its own guarantee
//! - [`NameError::InvalidState`]: the instance was inconsistent
//!
//! None of these are retried. Preconditions are checked before any state
//! is touched.

use crate::ESCAPE_CHARACTER;
use thiserror::Error;

/// Errors raised by contract checks
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// A precondition failed; the caller is at fault
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// A postcondition failed; the implementation is at fault
    #[error("Method failed: {0}")]
    MethodFailed(String),

    /// A class invariant failed; the instance is corrupt
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl NameError {
    /// Short label for the violated contract part
    pub fn kind(&self) -> &'static str {
        match self {
            NameError::IllegalArgument(_) => "precondition",
            NameError::MethodFailed(_) => "postcondition",
            NameError::InvalidState(_) => "invariant",
        }
    }
}

/// Result type for name operations
pub type NameResult<T> = Result<T, NameError>;

fn violation(error: NameError) -> NameError {
    tracing::warn!(kind = error.kind(), "{}", error);
    error
}

/// Fails with [`NameError::IllegalArgument`] unless `condition` holds
pub fn precondition(condition: bool, message: impl FnOnce() -> String) -> NameResult<()> {
    if condition {
        Ok(())
    } else {
        Err(violation(NameError::IllegalArgument(message())))
    }
}

/// Fails with [`NameError::MethodFailed`] unless `condition` holds
pub fn postcondition(condition: bool, message: impl FnOnce() -> String) -> NameResult<()> {
    if condition {
        Ok(())
    } else {
        Err(violation(NameError::MethodFailed(message())))
    }
}

/// Fails with [`NameError::InvalidState`] unless `condition` holds
pub fn invariant(condition: bool, message: impl FnOnce() -> String) -> NameResult<()> {
    if condition {
        Ok(())
    } else {
        Err(violation(NameError::InvalidState(message())))
    }
}

/// Checks that `i` addresses an existing component
pub(crate) fn check_index(i: usize, no_components: usize) -> NameResult<()> {
    precondition(i < no_components, || {
        format!("index {i} out of range for {no_components} components")
    })
}

/// Checks that `i` is a valid insertion point
pub(crate) fn check_insert_index(i: usize, no_components: usize) -> NameResult<()> {
    precondition(i <= no_components, || {
        format!("insert index {i} out of range for {no_components} components")
    })
}

/// Checks that `delimiter` may be used by a name
pub(crate) fn check_delimiter(delimiter: char) -> NameResult<()> {
    precondition(delimiter != ESCAPE_CHARACTER, || {
        format!("delimiter must not be the escape character {ESCAPE_CHARACTER:?}")
    })
}

/// Parses a delimiter given as a string
///
/// The string must hold exactly one character, and that character must
/// not be the escape character.
///
/// # Examples
///
/// ```
/// use names::parse_delimiter;
///
/// assert_eq!(parse_delimiter("/").unwrap(), '/');
/// assert!(parse_delimiter("").is_err());
/// assert!(parse_delimiter("::").is_err());
/// ```
pub fn parse_delimiter(delimiter: &str) -> NameResult<char> {
    let mut chars = delimiter.chars();
    let (first, rest) = (chars.next(), chars.next());
    match (first, rest) {
        (Some(c), None) => {
            check_delimiter(c)?;
            Ok(c)
        }
        _ => Err(violation(NameError::IllegalArgument(format!(
            "delimiter must be a single character, got {delimiter:?}"
        )))),
    }
}
