//! User-facing formatting surface: the formatter and its `f64` adaptor.
//!
//! - [`formatter`] owns the style dispatch and rendering logic behind
//!   [`DurationFormatter::format`].
//! - [`ext`] provides the [`FormattedDuration`] extension trait so raw `f64`
//!   seconds values can be formatted inline.
//!
//! [`DurationFormatter::format`]: formatter::DurationFormatter::format
//! [`FormattedDuration`]: ext::FormattedDuration

pub mod ext;
pub mod formatter;

pub use self::ext::FormattedDuration;
pub use self::formatter::DurationFormatter;
