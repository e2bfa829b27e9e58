#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::formatting::{
    core::{options::FormatOptions, style::FormatStyle},
    models::formatter::DurationFormatter,
};

/// Resolve an optional Python style name into a [`FormatStyle`].
///
/// `None` falls back to the default short style; unrecognized names surface
/// as a Python `ValueError` via the `FormatError` conversion.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_style(style: Option<&str>) -> PyResult<FormatStyle> {
    use std::str::FromStr;

    match style {
        // FormatStyle::from_str -> FormatResult<FormatStyle> -> FormatError -> PyErr
        Some(name) => Ok(FormatStyle::from_str(name)?),
        None => Ok(FormatStyle::Short),
    }
}

/// Build a [`DurationFormatter`] from Python-friendly optional arguments.
///
/// Missing arguments take the documented defaults (short style, 3 units,
/// seconds included); `maximum_units` passes through the options clamp.
#[cfg(feature = "python-bindings")]
pub fn build_formatter(
    style: Option<&str>, maximum_units: Option<usize>, include_seconds: Option<bool>,
) -> PyResult<DurationFormatter> {
    let style_val = extract_style(style)?;
    let max_units = maximum_units.unwrap_or(3);
    let with_seconds = include_seconds.unwrap_or(true);

    let options = FormatOptions::new(style_val, max_units, with_seconds);

    Ok(DurationFormatter::new(options))
}
