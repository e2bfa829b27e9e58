//! Formatting options — configuration for duration rendering.
//!
//! Purpose
//! -------
//! Collect the configuration knobs for duration formatting in one place: the
//! display style, the cap on how many units are rendered, and whether seconds
//! participate as a renderable unit.
//!
//! Key behaviors
//! -------------
//! - Represent configuration via [`FormatOptions`], a small `Copy` value
//!   constructed once and reused across many `format` calls.
//! - Silently clamp `maximum_units` below 1 up to 1 at construction time.
//!   This is a deliberate leniency policy, not a validation failure.
//! - Provide the documented defaults: short style, up to three units,
//!   seconds included.
//!
//! Invariants & assumptions
//! ------------------------
//! - `maximum_units >= 1` for every constructed value.
//! - Options are immutable after construction; `format` never mutates them.
//! - `include_seconds` and `maximum_units` are meaningful only for the short
//!   and long styles; the positional style ignores both.
//!
//! Conventions
//! -----------
//! - A single options value is safe to share read-only across any number of
//!   concurrent callers; formatting allocates only call-local state.
//!
//! Testing notes
//! -------------
//! - Unit tests for this module:
//!   - verify that `FormatOptions::new` preserves its inputs and clamps
//!     `maximum_units` as documented,
//!   - verify that `FormatOptions::default` matches the documented defaults.
//! - Behavioral effects of the options (truncation, seconds exclusion) are
//!   covered by the formatter's own tests and the integration suite.
use crate::formatting::core::style::FormatStyle;

/// FormatOptions — configuration for a [`DurationFormatter`].
///
/// Purpose
/// -------
/// Bundle the three knobs that determine how a duration is rendered: the
/// display style, the maximum number of units to show, and whether seconds
/// may appear as a unit.
///
/// Parameters
/// ----------
/// Constructed via:
/// - `FormatOptions::new(style, maximum_units, include_seconds)`
///   Clamps `maximum_units` below 1 up to 1; never fails.
/// - `FormatOptions::default()`
///   Short style, `maximum_units = 3`, `include_seconds = true`.
///
/// Fields
/// ------
/// - `style`: [`FormatStyle`]
///   Rendering strategy (positional, short, or long).
/// - `maximum_units`: `usize`
///   Cap on how many of the largest non-zero units are rendered by the short
///   and long styles. Units beyond the cap are dropped, not rounded into the
///   kept ones. Always ≥ 1.
/// - `include_seconds`: `bool`
///   For the short and long styles: whether seconds participate as a
///   candidate unit. Ignored by the positional style.
///
/// Invariants
/// ----------
/// - `maximum_units >= 1`.
///
/// Performance
/// -----------
/// - The struct is `Copy` and trivially cheap to pass by value or embed in a
///   formatter.
///
/// Notes
/// -----
/// - Public APIs accept `FormatOptions` rather than three loose parameters so
///   call sites stay explicit and defaults stay centralized.
///
/// [`DurationFormatter`]: crate::formatting::models::formatter::DurationFormatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Rendering strategy.
    pub style: FormatStyle,
    /// Cap on rendered units (short/long styles); always ≥ 1.
    pub maximum_units: usize,
    /// Whether seconds participate as a unit (short/long styles).
    pub include_seconds: bool,
}

impl FormatOptions {
    /// Construct options, clamping `maximum_units` below 1 up to 1.
    ///
    /// Parameters
    /// ----------
    /// - `style`: [`FormatStyle`]
    ///   Rendering strategy to use.
    /// - `maximum_units`: `usize`
    ///   Desired unit cap; a value of 0 is silently raised to 1 rather than
    ///   rejected.
    /// - `include_seconds`: `bool`
    ///   Whether seconds may appear as a unit in the short and long styles.
    ///
    /// Returns
    /// -------
    /// `FormatOptions`
    ///   A configuration value with `maximum_units >= 1` guaranteed.
    ///
    /// Errors
    /// ------
    /// - Never returns an error; out-of-range `maximum_units` is clamped by
    ///   policy instead of validated.
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
    /// let opts = FormatOptions::new(FormatStyle::Long, 0, true);
    /// assert_eq!(opts.maximum_units, 1);
    /// ```
    pub fn new(style: FormatStyle, maximum_units: usize, include_seconds: bool) -> FormatOptions {
        FormatOptions { style, maximum_units: maximum_units.max(1), include_seconds }
    }
}

impl Default for FormatOptions {
    /// Construct the documented defaults: short style, up to three units,
    /// seconds included.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use duration_formatting::formatting::core::options::FormatOptions;
    /// # use duration_formatting::formatting::core::style::FormatStyle;
    /// let opts = FormatOptions::default();
    /// assert_eq!(opts.style, FormatStyle::Short);
    /// assert_eq!(opts.maximum_units, 3);
    /// assert!(opts.include_seconds);
    /// ```
    fn default() -> Self {
        FormatOptions { style: FormatStyle::Short, maximum_units: 3, include_seconds: true }
    }
}
