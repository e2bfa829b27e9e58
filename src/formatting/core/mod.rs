//! Core building blocks for duration formatting.
//!
//! Purpose
//! -------
//! Collect the pure data layer of the formatter: the display-style enum, the
//! validated options value, the static unit vocabulary, and the
//! normalization / cascade machinery that turns a raw seconds value into
//! renderable parts.
//!
//! Key behaviors
//! -------------
//! - [`style`] declares the closed [`FormatStyle`] set and its `FromStr`.
//! - [`options`] carries the clamped [`FormatOptions`] configuration.
//! - [`units`] holds the fixed unit table ([`UNIT_TABLE`]) and second ratios.
//! - [`breakdown`] performs rounding/sign extraction and the strict
//!   floor-division cascade.
//!
//! Conventions
//! -----------
//! - Everything here is a plain value or a pure function; rendering lives in
//!   [`models`](crate::formatting::models).

pub mod breakdown;
pub mod options;
pub mod style;
pub mod units;

pub use self::breakdown::{NormalizedSeconds, UnitBreakdown, UnitPart};
pub use self::options::FormatOptions;
pub use self::style::FormatStyle;
pub use self::units::{UnitKind, UnitSpec, UNIT_TABLE};
