//! Normalization and unit decomposition for duration formatting.
//!
//! Purpose
//! -------
//! Turn a raw `f64` seconds value into the transient data the renderers
//! consume: a validated, rounded whole-second magnitude with its sign
//! ([`NormalizedSeconds`]), and the ordered non-zero unit parts produced by
//! the strict floor-division cascade ([`UnitBreakdown`]).
//!
//! Key behaviors
//! -------------
//! - Reject non-finite input with [`FormatError::NonFiniteSeconds`] before
//!   any arithmetic happens.
//! - Round to whole seconds with the documented law (half away from zero),
//!   and derive the sign from the *rounded* value so inputs that round to
//!   zero are never treated as negative.
//! - Decompose the absolute second count by dividing by the largest unit
//!   first and carrying the remainder down (86 400 → 3 600 → 60 → 1).
//!
//! Invariants & assumptions
//! ------------------------
//! - Summing `magnitude × seconds_per_unit` over the cascade (with omitted
//!   units counted as zero) reconstructs the absolute rounded input exactly.
//! - Parts are ordered largest unit first and carry strictly positive
//!   magnitudes; zero-magnitude units are never materialized.
//! - Nothing here survives a single `format` call; there is no cache and no
//!   shared mutable state.
//!
//! Conventions
//! -----------
//! - Magnitudes use `i128`: the conversion from the rounded `f64` saturates,
//!   so arbitrarily large *finite* inputs still format successfully instead
//!   of overflowing.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the rounding law (including the ±0.5 boundaries and
//!   the "rounds to zero is not negative" rule), non-finite rejection, the
//!   conservation invariant, and cascade ordering.
use crate::formatting::core::units::{UnitKind, UNIT_TABLE};
use crate::formatting::errors::{FormatError, FormatResult};

/// A seconds value normalized to a whole-second magnitude and a sign.
///
/// Produced once per `format` call from the raw `f64` input. The sign is
/// taken from the rounded value: `-0.4` rounds to zero and is therefore not
/// negative, matching the sign-symmetry contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedSeconds {
    /// Absolute rounded duration in whole seconds.
    pub magnitude: i128,
    /// Whether the rounded value was strictly negative.
    pub is_negative: bool,
}

impl NormalizedSeconds {
    /// Normalize a raw seconds value.
    ///
    /// Rounds half away from zero (`f64::round`), extracts the sign from the
    /// rounded result, and saturates the magnitude into `i128` so every
    /// finite input produces a value.
    ///
    /// Errors
    /// ------
    /// - `FormatError::NonFiniteSeconds` when `seconds` is NaN or ±inf.
    pub fn from_seconds(seconds: f64) -> FormatResult<NormalizedSeconds> {
        if !seconds.is_finite() {
            return Err(FormatError::NonFiniteSeconds { value: seconds });
        }

        let rounded = seconds.round();
        Ok(NormalizedSeconds {
            magnitude: rounded.abs() as i128,
            is_negative: rounded < 0.0,
        })
    }
}

/// One non-zero unit extracted by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPart {
    /// Strictly positive count of this unit.
    pub magnitude: i128,
    /// Which unit the magnitude counts.
    pub kind: UnitKind,
}

/// Ordered non-zero unit parts of an absolute whole-second duration.
///
/// Transient per-call value: built by [`UnitBreakdown::decompose`], consumed
/// by the short/long renderers, and dropped at the end of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitBreakdown {
    /// Non-zero parts, largest unit first.
    pub parts: Vec<UnitPart>,
}

impl UnitBreakdown {
    /// Decompose an absolute whole-second count via the strict floor-division
    /// cascade.
    ///
    /// Divides by the largest unit first, keeps the remainder, and proceeds
    /// to the next smaller unit. Only units with non-zero magnitude are
    /// materialized, ordered largest first. A zero duration yields an empty
    /// part list; the renderers own the `"0s"` / `"0 seconds"` fallback.
    pub fn decompose(total_seconds: i128) -> UnitBreakdown {
        let mut parts = Vec::with_capacity(UNIT_TABLE.len());
        let mut remaining = total_seconds;

        for spec in &UNIT_TABLE {
            let magnitude = remaining / spec.seconds;
            remaining %= spec.seconds;
            if magnitude > 0 {
                parts.push(UnitPart { magnitude, kind: spec.kind });
            }
        }

        UnitBreakdown { parts }
    }
}
