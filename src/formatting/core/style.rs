//! Display styles for duration formatting.
//!
//! Purpose
//! -------
//! Declare the closed set of rendering strategies a [`DurationFormatter`] can
//! dispatch on: clock-like positional notation, abbreviated short units, and
//! prose-joined long units.
//!
//! Key behaviors
//! -------------
//! - Represent the style as a plain `Copy` enum; rendering is dispatched by a
//!   `match` in the formatter, not by trait objects.
//! - Parse user-supplied style names (`"positional"`, `"short"`, `"long"`,
//!   case-insensitive) via `FromStr` for the string-based binding surface.
//!
//! Conventions
//! -----------
//! - Positional: `1:03:05` / `2:05` (hours uncapped, no day unit).
//! - Short: `1d 2h 3m 4s`.
//! - Long: `1 day, 2 hours, and 3 minutes`.
//! - Unrecognized names surface as [`FormatError::InvalidStyleName`] rather
//!   than panicking.
//!
//! [`DurationFormatter`]: crate::formatting::models::formatter::DurationFormatter
use crate::formatting::errors::{FormatError, FormatResult};

/// Rendering strategy for a formatted duration.
///
/// A closed tagged variant: the formatter `match`es on it per call, and the
/// set of styles is fixed by the formatting contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Colon-separated clock-like notation, e.g. `1:03:05` or `2:05`.
    Positional,
    /// Space-separated abbreviated units, e.g. `1d 2h 3m 4s`.
    Short,
    /// Comma/and-joined full words, e.g. `1 day, 2 hours, and 3 minutes`.
    Long,
}

impl std::str::FromStr for FormatStyle {
    type Err = FormatError;

    /// Parse a style name, case-insensitively.
    ///
    /// Accepts `"positional"`, `"short"`, and `"long"`. Anything else returns
    /// [`FormatError::InvalidStyleName`] carrying the rejected name.
    fn from_str(name: &str) -> FormatResult<FormatStyle> {
        match name.to_lowercase().as_str() {
            "positional" => Ok(FormatStyle::Positional),
            "short" => Ok(FormatStyle::Short),
            "long" => Ok(FormatStyle::Long),
            _ => Err(FormatError::InvalidStyleName { name: name.to_string() }),
        }
    }
}
