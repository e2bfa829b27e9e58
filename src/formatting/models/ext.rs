//! Extension trait for formatting durations straight off an `f64`.
//!
//! Purpose
//! -------
//! Give call sites an ergonomic adaptor from a raw seconds value to the
//! [`DurationFormatter`] contract, without constructing a formatter by hand.
//! Purely ergonomic surface; the core algorithm lives entirely in
//! [`DurationFormatter::format`].
//!
//! Conventions
//! -----------
//! - `formatted_duration(options)` takes the full options value: pass
//!   `FormatOptions::new(...)` for explicit settings.
//! - `formatted()` uses the default options (short style, three units,
//!   seconds included).
use crate::formatting::core::options::FormatOptions;
use crate::formatting::errors::FormatResult;
use crate::formatting::models::formatter::DurationFormatter;

/// Format a duration-bearing numeric value directly.
///
/// Implemented for `f64` (seconds). Both methods construct a
/// [`DurationFormatter`] and forward to [`DurationFormatter::format`], so the
/// full contract — rounding, sign handling, truncation, and non-finite
/// rejection — applies unchanged.
pub trait FormattedDuration {
    /// Format with explicit options.
    fn formatted_duration(&self, options: FormatOptions) -> FormatResult<String>;

    /// Format with the default options (short, 3 units, seconds included).
    fn formatted(&self) -> FormatResult<String> {
        self.formatted_duration(FormatOptions::default())
    }
}

impl FormattedDuration for f64 {
    fn formatted_duration(&self, options: FormatOptions) -> FormatResult<String> {
        DurationFormatter::new(options).format(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::core::style::FormatStyle;
    use crate::formatting::errors::FormatError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Forwarding of the extension methods to the formatter, with default
    //   and explicit options.
    //
    // They intentionally DO NOT cover:
    // - The rendering rules themselves, tested in `models::formatter`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `formatted` applies the default options.
    //
    // Given
    // -----
    // - The value 3661.0 s.
    //
    // Expect
    // ------
    // - `"1h 1m 1s"`: short style, three units, seconds included.
    fn formatted_uses_default_options() {
        // Arrange
        let duration: f64 = 3661.0;

        // Act + Assert
        assert_eq!(duration.formatted().unwrap(), "1h 1m 1s");
    }

    #[test]
    // Purpose
    // -------
    // Verify that explicit options are forwarded unchanged.
    //
    // Given
    // -----
    // - 3661.0 s with long style and `maximum_units = 2`.
    //
    // Expect
    // ------
    // - `"1 hour and 1 minute"`, identical to calling the formatter directly.
    fn formatted_duration_forwards_options() {
        // Arrange
        let duration: f64 = 3661.0;
        let options = FormatOptions::new(FormatStyle::Long, 2, true);

        // Act + Assert
        assert_eq!(duration.formatted_duration(options).unwrap(), "1 hour and 1 minute");
    }

    #[test]
    // Purpose
    // -------
    // Verify that the adaptor surfaces the formatter's input rejection.
    //
    // Given
    // -----
    // - A NaN seconds value.
    //
    // Expect
    // ------
    // - `Err(FormatError::NonFiniteSeconds)` through the extension call.
    fn formatted_surfaces_non_finite_rejection() {
        // Arrange
        let duration = f64::NAN;

        // Act
        let err = duration.formatted().unwrap_err();

        // Assert
        match err {
            FormatError::NonFiniteSeconds { value } => assert!(value.is_nan()),
            other => panic!("expected NonFiniteSeconds, got {other:?}"),
        }
    }
}
