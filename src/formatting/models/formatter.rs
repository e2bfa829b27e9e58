//! DurationFormatter — render a seconds value in one of three styles.
//!
//! Purpose
//! -------
//! Provide the single formatting entry point of the crate: given validated
//! [`FormatOptions`] and a finite seconds value, produce the positional,
//! short, or long textual rendering deterministically.
//!
//! Key behaviors
//! -------------
//! - Normalize the input once per call (round half away from zero, extract
//!   the sign, saturate into a wide integer) via [`NormalizedSeconds`].
//! - Dispatch on [`FormatStyle`] with a plain `match`:
//!   - Positional renders `H:MM:SS` when the uncapped cascaded hour count
//!     (`total / 3600`, no day unit) is positive, else `M:SS`.
//!   - Short and long share the [`UnitBreakdown`] cascade, filter seconds by
//!     `include_seconds`, truncate to `maximum_units` largest-first, and fall
//!     back to `"0s"` / `"0 seconds"` when nothing survives.
//! - Re-apply the sign by prepending `"-"` when the rounded input was
//!   strictly negative.
//!
//! Invariants & assumptions
//! ------------------------
//! - `format` is a pure function of the options and the input; it never
//!   mutates the formatter and allocates only call-local values, so a
//!   formatter is safe to share read-only across concurrent callers.
//! - Truncation drops the smallest units, never the largest, and never
//!   rounds dropped units into the kept ones.
//! - Every finite input succeeds; only non-finite values error.
//!
//! Conventions
//! -----------
//! - Minutes and seconds are zero-padded to two digits in the positional
//!   style; the leading field is unpadded.
//! - Long-style joining follows English list conjunction: one entry bare,
//!   two joined by `" and "`, three or more with `", "` separators and a
//!   final `", and "`.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover the documented behavior table plus the
//!   style-specific edge cases (uncapped hours, seconds exclusion,
//!   zero fallbacks, singular/plural selection, join arities).
//! - End-to-end coverage through the public re-exports and the extension
//!   trait lives in `tests/integration_formatting.rs`.
use crate::formatting::core::breakdown::{NormalizedSeconds, UnitBreakdown};
use crate::formatting::core::options::FormatOptions;
use crate::formatting::core::style::FormatStyle;
use crate::formatting::core::units::{UnitKind, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::formatting::errors::FormatResult;

/// DurationFormatter — stateless renderer for elapsed durations.
///
/// Purpose
/// -------
/// Own a validated [`FormatOptions`] value and expose [`format`], the single
/// operation that turns a seconds count into a human-readable string.
///
/// Key behaviors
/// -------------
/// - Construction never fails; all option leniency (the `maximum_units`
///   clamp) lives in [`FormatOptions::new`].
/// - `format` performs normalization, unit decomposition, and style-specific
///   rendering in one pass with no retained state between calls.
///
/// Invariants
/// ----------
/// - The formatter is an immutable value: `format` takes `&self` and the
///   options are fixed for the life of the instance.
///
/// Performance
/// -----------
/// - Each call allocates only the output `String` and a small transient part
///   list; the unit vocabulary is static lookup data.
///
/// Notes
/// -----
/// - For one-off call sites, the [`FormattedDuration`] extension trait on
///   `f64` constructs a formatter and calls `format` in a single expression.
///
/// [`format`]: DurationFormatter::format
/// [`FormattedDuration`]: crate::formatting::models::ext::FormattedDuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationFormatter {
    /// Rendering configuration, fixed at construction.
    pub options: FormatOptions,
}

impl DurationFormatter {
    /// Construct a formatter from already-clamped options.
    pub fn new(options: FormatOptions) -> DurationFormatter {
        DurationFormatter { options }
    }

    /// Format a duration expressed in seconds.
    ///
    /// Parameters
    /// ----------
    /// - `seconds`: `f64`
    ///   Elapsed duration in seconds; may be negative or fractional. Rounded
    ///   half away from zero to whole seconds before decomposition (the
    ///   crate's documented rounding law).
    ///
    /// Returns
    /// -------
    /// `FormatResult<String>`
    ///   - `Ok(rendering)` for every finite input, in the configured style.
    ///   - `Err(FormatError::NonFiniteSeconds)` for NaN or ±inf.
    ///
    /// Errors
    /// ------
    /// - `FormatError::NonFiniteSeconds`
    ///   The only failure mode; finite inputs of any magnitude succeed.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use duration_formatting::formatting::core::options::FormatOptions;
    /// # use duration_formatting::formatting::core::style::FormatStyle;
    /// # use duration_formatting::formatting::models::formatter::DurationFormatter;
    /// let short = DurationFormatter::new(FormatOptions::default());
    /// assert_eq!(short.format(65.0).unwrap(), "1m 5s");
    ///
    /// let long = DurationFormatter::new(FormatOptions::new(FormatStyle::Long, 2, true));
    /// assert_eq!(long.format(3661.0).unwrap(), "1 hour and 1 minute");
    /// ```
    pub fn format(&self, seconds: f64) -> FormatResult<String> {
        let normalized = NormalizedSeconds::from_seconds(seconds)?;
        let total = normalized.magnitude;

        let rendered = match self.options.style {
            FormatStyle::Positional => self.positional_string(total),
            FormatStyle::Short => self.components_string(total, false),
            FormatStyle::Long => self.components_string(total, true),
        };

        if normalized.is_negative {
            Ok(format!("-{rendered}"))
        } else {
            Ok(rendered)
        }
    }

    /// Render `H:MM:SS` or `M:SS` from an absolute whole-second count.
    ///
    /// Hours are the raw cascade `total / 3600` with no day unit and no cap,
    /// so multi-day durations appear as large hour counts.
    fn positional_string(&self, total_seconds: i128) -> String {
        let seconds = total_seconds % SECONDS_PER_MINUTE;
        let minutes = (total_seconds / SECONDS_PER_MINUTE) % 60;
        let hours = total_seconds / SECONDS_PER_HOUR;

        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }

    /// Render the short (`"1d 2h 3m 4s"`) or long (`"1 day, 2 hours, …"`)
    /// style from an absolute whole-second count.
    ///
    /// Shared decomposition path: build the non-zero candidate list, drop
    /// seconds when excluded, fall back to the zero rendering when nothing
    /// remains, then truncate to `maximum_units` and join.
    fn components_string(&self, total_seconds: i128, long_units: bool) -> String {
        let breakdown = UnitBreakdown::decompose(total_seconds);

        let candidates: Vec<_> = breakdown
            .parts
            .iter()
            .filter(|part| self.options.include_seconds || part.kind != UnitKind::Second)
            .collect();

        // Zero total, or entirely sub-minute with seconds excluded.
        if candidates.is_empty() {
            return if long_units { "0 seconds".to_string() } else { "0s".to_string() };
        }

        let limited = &candidates[..candidates.len().min(self.options.maximum_units)];

        if long_units {
            let entries: Vec<String> = limited
                .iter()
                .map(|part| {
                    let spec = part.kind.spec();
                    let word = if part.magnitude == 1 { spec.singular } else { spec.plural };
                    format!("{} {}", part.magnitude, word)
                })
                .collect();
            join_long_components(&entries)
        } else {
            limited
                .iter()
                .map(|part| format!("{}{}", part.magnitude, part.kind.spec().short_suffix))
                .collect::<Vec<String>>()
                .join(" ")
        }
    }
}

/// Join long-style entries with English list conjunction rules.
///
/// One entry is returned bare, two are joined by `" and "`, and three or more
/// use `", "` separators with a final `", and "` before the last entry. An
/// empty slice yields an empty string (unreachable through `format`, which
/// falls back to `"0 seconds"` first).
fn join_long_components(entries: &[String]) -> String {
    match entries {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::errors::FormatError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Every concrete scenario from the documented behavior table (short,
    //   long, positional, zero, negative, truncation, seconds exclusion).
    // - Style-specific edge cases: uncapped positional hours, singular vs
    //   plural words, long-join arities, and the zero fallbacks.
    // - Rejection of non-finite input through `format`.
    //
    // They intentionally DO NOT cover:
    // - The rounding law and cascade internals, tested in `core::breakdown`.
    // - The extension-trait adaptor, tested in `models::ext` and the
    //   integration suite.
    // -------------------------------------------------------------------------

    fn formatter(style: FormatStyle) -> DurationFormatter {
        DurationFormatter::new(FormatOptions::new(style, 3, true))
    }

    #[test]
    // Purpose
    // -------
    // Verify the baseline short rendering.
    //
    // Given
    // -----
    // - Default-style options (short, 3 units, seconds included) and 65 s.
    //
    // Expect
    // ------
    // - `"1m 5s"`.
    fn short_formats_minutes_and_seconds() {
        // Arrange
        let fmt = formatter(FormatStyle::Short);

        // Act + Assert
        assert_eq!(fmt.format(65.0).unwrap(), "1m 5s");
    }

    #[test]
    // Purpose
    // -------
    // Verify long-style truncation together with singular word selection.
    //
    // Given
    // -----
    // - Long style with `maximum_units = 2` and 3661 s (1h 1m 1s).
    //
    // Expect
    // ------
    // - `"1 hour and 1 minute"`: the seconds unit is dropped by the cap and
    //   both kept magnitudes use singular words.
    fn long_respects_maximum_units_and_singulars() {
        // Arrange
        let fmt = DurationFormatter::new(FormatOptions::new(FormatStyle::Long, 2, true));

        // Act + Assert
        assert_eq!(fmt.format(3661.0).unwrap(), "1 hour and 1 minute");
    }

    #[test]
    // Purpose
    // -------
    // Verify the positional `M:SS` form below one hour.
    //
    // Given
    // -----
    // - Positional style and 125 s.
    //
    // Expect
    // ------
    // - `"2:05"`: minutes unpadded, seconds zero-padded.
    fn positional_renders_minutes_form_under_an_hour() {
        // Arrange
        let fmt = formatter(FormatStyle::Positional);

        // Act + Assert
        assert_eq!(fmt.format(125.0).unwrap(), "2:05");
    }

    #[test]
    // Purpose
    // -------
    // Verify the positional `H:MM:SS` form at and above one hour.
    //
    // Given
    // -----
    // - Positional style and 3661 s.
    //
    // Expect
    // ------
    // - `"1:01:01"`.
    fn positional_renders_hours_form_over_an_hour() {
        // Arrange
        let fmt = formatter(FormatStyle::Positional);

        // Act + Assert
        assert_eq!(fmt.format(3661.0).unwrap(), "1:01:01");
    }

    #[test]
    // Purpose
    // -------
    // Verify that positional hours cascade with no day unit and no cap.
    //
    // Given
    // -----
    // - Positional style and two days plus 90 s (172 890 s).
    //
    // Expect
    // ------
    // - `"48:01:30"`: 48 hours, not a day unit.
    fn positional_hours_exceed_twenty_four() {
        // Arrange
        let fmt = formatter(FormatStyle::Positional);

        // Act + Assert
        assert_eq!(fmt.format(172_890.0).unwrap(), "48:01:30");
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero fallbacks for both component styles.
    //
    // Given
    // -----
    // - Short and long formatters and an input of 0 s.
    //
    // Expect
    // ------
    // - `"0s"` for short, `"0 seconds"` for long.
    fn zero_uses_fixed_fallbacks() {
        // Arrange
        let short = formatter(FormatStyle::Short);
        let long = formatter(FormatStyle::Long);

        // Act + Assert
        assert_eq!(short.format(0.0).unwrap(), "0s");
        assert_eq!(long.format(0.0).unwrap(), "0 seconds");
    }

    #[test]
    // Purpose
    // -------
    // Verify the sign prefix for negative durations.
    //
    // Given
    // -----
    // - Short style and -75 s.
    //
    // Expect
    // ------
    // - `"-1m 15s"`: the sign is prepended with no space.
    fn negative_durations_are_prefixed() {
        // Arrange
        let fmt = formatter(FormatStyle::Short);

        // Act + Assert
        assert_eq!(fmt.format(-75.0).unwrap(), "-1m 15s");
    }

    #[test]
    // Purpose
    // -------
    // Verify that an input rounding to zero is rendered unsigned.
    //
    // Given
    // -----
    // - Short style and the inputs -0.4 and 0.4, both rounding to zero.
    //
    // Expect
    // ------
    // - Both render `"0s"` with no `-` prefix.
    fn negative_input_rounding_to_zero_is_unsigned() {
        // Arrange
        let fmt = formatter(FormatStyle::Short);

        // Act + Assert
        assert_eq!(fmt.format(-0.4).unwrap(), fmt.format(0.4).unwrap());
        assert_eq!(fmt.format(-0.4).unwrap(), "0s");
    }

    #[test]
    // Purpose
    // -------
    // Verify short-style truncation keeps the largest units.
    //
    // Given
    // -----
    // - Short style with `maximum_units = 2` and 3726 s (1h 2m 6s).
    //
    // Expect
    // ------
    // - `"1h 2m"`: the seconds unit is dropped, not rounded into minutes.
    fn short_truncation_drops_smallest_units() {
        // Arrange
        let fmt = DurationFormatter::new(FormatOptions::new(FormatStyle::Short, 2, true));

        // Act + Assert
        assert_eq!(fmt.format(3726.0).unwrap(), "1h 2m");
    }

    #[test]
    // Purpose
    // -------
    // Verify seconds exclusion in the short style.
    //
    // Given
    // -----
    // - Short style with `include_seconds = false` and 75 s.
    //
    // Expect
    // ------
    // - `"1m"`: the 15 s remainder is omitted entirely.
    fn short_excludes_seconds_when_configured() {
        // Arrange
        let fmt = DurationFormatter::new(FormatOptions::new(FormatStyle::Short, 3, false));

        // Act + Assert
        assert_eq!(fmt.format(75.0).unwrap(), "1m");
    }

    #[test]
    // Purpose
    // -------
    // Verify the fallback when the duration is entirely sub-minute and
    // seconds are excluded.
    //
    // Given
    // -----
    // - Short and long formatters with `include_seconds = false` and 45 s.
    //
    // Expect
    // ------
    // - `"0s"` and `"0 seconds"` respectively: the candidate list is empty.
    fn sub_minute_without_seconds_falls_back_to_zero() {
        // Arrange
        let short = DurationFormatter::new(FormatOptions::new(FormatStyle::Short, 3, false));
        let long = DurationFormatter::new(FormatOptions::new(FormatStyle::Long, 3, false));

        // Act + Assert
        assert_eq!(short.format(45.0).unwrap(), "0s");
        assert_eq!(long.format(45.0).unwrap(), "0 seconds");
    }

    #[test]
    // Purpose
    // -------
    // Verify long-style joining across all three arities.
    //
    // Given
    // -----
    // - Long formatters sized to keep 1, 2, and 4 units of 90 061 s
    //   (1 day, 1 hour, 1 minute, 1 second).
    //
    // Expect
    // ------
    // - 1 unit: bare entry, no conjunction.
    // - 2 units: `" and "` only.
    // - ≥3 units: comma separators with a final `", and "`.
    fn long_join_covers_all_arities() {
        // Arrange
        let one = DurationFormatter::new(FormatOptions::new(FormatStyle::Long, 1, true));
        let two = DurationFormatter::new(FormatOptions::new(FormatStyle::Long, 2, true));
        let four = DurationFormatter::new(FormatOptions::new(FormatStyle::Long, 4, true));

        // Act + Assert
        assert_eq!(one.format(90_061.0).unwrap(), "1 day");
        assert_eq!(two.format(90_061.0).unwrap(), "1 day and 1 hour");
        assert_eq!(four.format(90_061.0).unwrap(), "1 day, 1 hour, 1 minute, and 1 second");
    }

    #[test]
    // Purpose
    // -------
    // Verify plural word selection for magnitudes other than 1.
    //
    // Given
    // -----
    // - Long style with capacity for all units and 2 days, 3 hours, 4
    //   minutes, 5 seconds (183 845 s).
    //
    // Expect
    // ------
    // - `"2 days, 3 hours, 4 minutes, and 5 seconds"`.
    fn long_uses_plural_words_above_one() {
        // Arrange
        let fmt = DurationFormatter::new(FormatOptions::new(FormatStyle::Long, 4, true));

        // Act + Assert
        assert_eq!(
            fmt.format(183_845.0).unwrap(),
            "2 days, 3 hours, 4 minutes, and 5 seconds"
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite input is rejected at the `format` entry point.
    //
    // Given
    // -----
    // - A short formatter and the inputs NaN and +inf.
    //
    // Expect
    // ------
    // - Both return `Err(FormatError::NonFiniteSeconds)` carrying the input.
    fn format_rejects_non_finite_input() {
        // Arrange
        let fmt = formatter(FormatStyle::Short);

        // Act + Assert
        match fmt.format(f64::NAN).unwrap_err() {
            FormatError::NonFiniteSeconds { value } => assert!(value.is_nan()),
            other => panic!("expected NonFiniteSeconds, got {other:?}"),
        }
        match fmt.format(f64::INFINITY).unwrap_err() {
            FormatError::NonFiniteSeconds { value } => assert_eq!(value, f64::INFINITY),
            other => panic!("expected NonFiniteSeconds, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify fractional input is rounded before decomposition.
    //
    // Given
    // -----
    // - Short style and 64.6 s, which rounds to 65 s.
    //
    // Expect
    // ------
    // - `"1m 5s"`, identical to the integral input.
    fn fractional_input_is_rounded_before_decomposition() {
        // Arrange
        let fmt = formatter(FormatStyle::Short);

        // Act + Assert
        assert_eq!(fmt.format(64.6).unwrap(), "1m 5s");
    }

    #[test]
    // Purpose
    // -------
    // Verify `join_long_components` directly, including the empty slice that
    // is unreachable through `format`.
    //
    // Given
    // -----
    // - Entry slices of length 0 through 3.
    //
    // Expect
    // ------
    // - `""`, the bare entry, `"a and b"`, and `"a, b, and c"`.
    fn join_long_components_handles_each_arity() {
        // Arrange
        let a = "1 hour".to_string();
        let b = "2 minutes".to_string();
        let c = "3 seconds".to_string();

        // Act + Assert
        assert_eq!(join_long_components(&[]), "");
        assert_eq!(join_long_components(&[a.clone()]), "1 hour");
        assert_eq!(join_long_components(&[a.clone(), b.clone()]), "1 hour and 2 minutes");
        assert_eq!(join_long_components(&[a, b, c]), "1 hour, 2 minutes, and 3 seconds");
    }
}
