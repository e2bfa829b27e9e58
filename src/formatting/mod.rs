//! formatting — human-readable duration rendering: core data, models, errors.
//!
//! Purpose
//! -------
//! Provide the crate's formatting layer under a single namespace: the unit
//! vocabulary and cascade, the options/style configuration types, the
//! [`DurationFormatter`] entry point with its `f64` adaptor, and the shared
//! error types. This is the surface most consumers (including the Python
//! bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the pure data layer in [`core`]: display styles, clamped
//!   options, the static unit table, and whole-second normalization plus the
//!   floor-division cascade.
//! - Expose the rendering API in [`models`] via [`DurationFormatter`] and the
//!   [`FormattedDuration`] extension trait on `f64`.
//! - Centralize error types in [`errors`] ([`FormatError`] and the
//!   [`FormatResult`] alias) so callers see a uniform error surface.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports.
//!
//! Invariants & assumptions
//! ------------------------
//! - Formatting is pure and stateless: a formatter never mutates its options,
//!   nothing survives a call, and values are safe to share read-only across
//!   concurrent callers.
//! - Decomposition conserves the input: magnitudes times unit sizes sum to
//!   the absolute rounded second count.
//! - Every finite `f64` input formats successfully; only NaN/±inf error.
//!
//! Conventions
//! -----------
//! - Rounding is half away from zero, applied once before decomposition; the
//!   sign comes from the rounded value.
//! - The formatting stack itself performs no I/O and no logging; callers
//!   orchestrate any logging. Error conditions surface as [`FormatResult`].
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!   1. Build a [`FormatOptions`] (or start from `FormatOptions::default()`).
//!   2. Construct a [`DurationFormatter`] and call `format(seconds)`.
//!   3. For one-off call sites, use `seconds.formatted()` or
//!      `seconds.formatted_duration(options)` via [`FormattedDuration`].
//! - Python bindings import from this module and rely on the
//!   `FormatError` → `PyErr` conversion defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover the unit table, option clamping/defaults,
//!   the rounding law, and cascade conservation/ordering.
//! - Unit tests in [`models`] cover the documented rendering scenarios, the
//!   join arities, the zero fallbacks, and adaptor forwarding.
//! - `tests/integration_formatting.rs` exercises the public surface
//!   end-to-end, including the sign-symmetry and positional parse-back
//!   properties.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// The everyday types most users need. Lower-level pieces (the unit table,
// cascade internals) remain reachable under their submodules.

pub use self::core::{FormatOptions, FormatStyle};

pub use self::errors::{FormatError, FormatResult};

pub use self::models::{DurationFormatter, FormattedDuration};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use duration_formatting::formatting::prelude::*;
//
// to import the main formatting surface in a single line.

pub mod prelude {
    pub use super::{
        DurationFormatter, FormatError, FormatOptions, FormatResult, FormatStyle,
        FormattedDuration,
    };
}
