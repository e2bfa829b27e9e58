//! Time units and rendering vocabulary for duration formatting.
//!
//! - [`UnitKind`] declares the supported units (day/hour/minute/second).
//! - [`UnitSpec`] pairs each kind with its size in seconds and its short
//!   suffix / English words.
//!
//! Notes
//! -----
//! - There is no unit larger than days; longer durations cascade into the day
//!   count (or into an uncapped hour count in the positional style).
//! - [`UNIT_TABLE`] is static lookup data ordered largest unit first; the
//!   cascade and the renderers both rely on that ordering.

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i128 = 60;
/// Seconds per hour.
pub const SECONDS_PER_HOUR: i128 = 60 * SECONDS_PER_MINUTE;
/// Seconds per day.
pub const SECONDS_PER_DAY: i128 = 24 * SECONDS_PER_HOUR;

/// Calendar-like units a duration decomposes into, largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Days (86 400 s).
    Day,
    /// Hours (3 600 s).
    Hour,
    /// Minutes (60 s).
    Minute,
    /// Seconds.
    Second,
}

/// Static rendering data for one unit: its size and its textual forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    /// Which unit this row describes.
    pub kind: UnitKind,
    /// Size of the unit in whole seconds.
    pub seconds: i128,
    /// Abbreviation used by the short style (`"d"`, `"h"`, `"m"`, `"s"`).
    pub short_suffix: &'static str,
    /// English singular word used by the long style when the magnitude is 1.
    pub singular: &'static str,
    /// English plural word used by the long style otherwise.
    pub plural: &'static str,
}

/// Fixed per-unit lookup table, ordered largest unit first.
pub const UNIT_TABLE: [UnitSpec; 4] = [
    UnitSpec {
        kind: UnitKind::Day,
        seconds: SECONDS_PER_DAY,
        short_suffix: "d",
        singular: "day",
        plural: "days",
    },
    UnitSpec {
        kind: UnitKind::Hour,
        seconds: SECONDS_PER_HOUR,
        short_suffix: "h",
        singular: "hour",
        plural: "hours",
    },
    UnitSpec {
        kind: UnitKind::Minute,
        seconds: SECONDS_PER_MINUTE,
        short_suffix: "m",
        singular: "minute",
        plural: "minutes",
    },
    UnitSpec {
        kind: UnitKind::Second,
        seconds: 1,
        short_suffix: "s",
        singular: "second",
        plural: "seconds",
    },
];

impl UnitKind {
    /// Look up the static [`UnitSpec`] row for this kind.
    pub fn spec(self) -> &'static UnitSpec {
        match self {
            UnitKind::Day => &UNIT_TABLE[0],
            UnitKind::Hour => &UNIT_TABLE[1],
            UnitKind::Minute => &UNIT_TABLE[2],
            UnitKind::Second => &UNIT_TABLE[3],
        }
    }
}
