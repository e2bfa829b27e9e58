//! Errors for duration formatting (input validation and style-name parsing).
//!
//! This module defines the formatting error type, [`FormatError`], used across
//! the Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - Formatting is leaf-level pure computation: errors are returned directly
//!   to the caller with no local recovery or retry.
//! - Every *finite* input succeeds; only non-finite seconds (NaN, ±inf) are
//!   rejected, and only at the `format` entry point.
//! - Style names arriving as strings (e.g. through the Python bindings) are
//!   normalized to [`FormatError::InvalidStyleName`] when unrecognized.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Crate-wide result alias for formatting operations that may produce
/// [`FormatError`].
pub type FormatResult<T> = Result<T, FormatError>;

/// Unified error type for duration formatting.
///
/// Covers rejection of non-finite numeric input and unrecognized style names
/// on the string-based construction surface. Implements `Display`/`Error` and
/// converts to a Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    // ---- Input validation ----
    /// The seconds value is NaN or ±inf. There is no meaningful rendering
    /// for non-finite durations, so they are rejected explicitly rather
    /// than formatted into an unspecified string.
    NonFiniteSeconds { value: f64 },

    // ---- Style-name parsing ----
    /// A string style name did not match any [`FormatStyle`] variant.
    ///
    /// [`FormatStyle`]: crate::formatting::core::style::FormatStyle
    InvalidStyleName { name: String },
}

impl std::error::Error for FormatError {}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::NonFiniteSeconds { value } => {
                write!(f, "Seconds value must be finite; got: {value}")
            }
            FormatError::InvalidStyleName { name } => {
                write!(
                    f,
                    "Invalid format style {name:?} (expected 'positional', 'short', or 'long')"
                )
            }
        }
    }
}

/// Convert a [`FormatError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<FormatError> for PyErr {
    fn from(err: FormatError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
