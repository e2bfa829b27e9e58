//! duration_formatting — human-readable duration strings with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the duration formatter to Python via the `_duration_formatting`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing `Formatter` class and the submodule used
//! by the `duration_formatting` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module ([`formatting`]) as the public crate
//!   surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for
//!   the `_duration_formatting` Python extension.
//! - Create and register the `formatting` Python submodule under
//!   `duration_formatting` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All formatting logic is implemented in the inner [`formatting`] module;
//!   this file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible `Formatter` mirrors
//!   the invariants and signature of [`DurationFormatter`].
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`FormatError`] internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//! - Native Rust code should depend directly on [`formatting`] (or its
//!   prelude) and can ignore the PyO3 items guarded by the `python-bindings`
//!   feature.
//!
//! Testing notes
//! -------------
//! - Core formatting behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_formatting.rs`; smoke tests for the PyO3
//!   bindings live at the Python packaging level.
//!
//! [`DurationFormatter`]: crate::formatting::models::formatter::DurationFormatter
//! [`FormatError`]: crate::formatting::errors::FormatError

pub mod formatting;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    formatting::{core::style::FormatStyle, models::formatter::DurationFormatter},
    utils::build_formatter,
};

/// Formatter — Python-facing wrapper for [`DurationFormatter`].
///
/// Purpose
/// -------
/// Expose the duration-formatting API to Python callers while preserving the
/// core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a [`DurationFormatter`] from Python-friendly keyword arguments
///   (string style name, optional unit cap, optional seconds flag).
/// - Provide a `format` method that forwards to the core implementation and
///   maps `FormatError` into a Python `ValueError`.
/// - Expose the resolved configuration as read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Formatter(style="short", maximum_units=3, include_seconds=True)`:
/// - `style`: `Option<&str>`
///   One of `"positional"`, `"short"`, or `"long"` (case-insensitive);
///   defaults to `"short"`.
/// - `maximum_units`: `Option<usize>`
///   Cap on rendered units; values below 1 are clamped to 1. Defaults to 3.
/// - `include_seconds`: `Option<bool>`
///   Whether seconds participate as a unit in the short/long styles.
///   Defaults to `True`.
///
/// Fields
/// ------
/// - `inner`: [`DurationFormatter`]
///   Fully configured formatter that owns the validated options.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed [`DurationFormatter`] created through
///   [`build_formatter`]; `maximum_units >= 1` holds.
///
/// Notes
/// -----
/// - Native Rust callers should use [`DurationFormatter`] directly; this type
///   exists solely for the PyO3 binding surface.
///
/// [`FormatError`]: crate::formatting::errors::FormatError
/// [`build_formatter`]: crate::utils::build_formatter
#[cfg(feature = "python-bindings")]
#[pyclass(module = "duration_formatting.formatting")]
pub struct Formatter {
    /// Underlying Rust DurationFormatter.
    pub inner: DurationFormatter,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Formatter {
    #[new]
    #[pyo3(
        signature = (style = None, maximum_units = None, include_seconds = None),
        text_signature = "(style='short', maximum_units=3, include_seconds=True)"
    )]
    pub fn new(
        style: Option<&str>, maximum_units: Option<usize>, include_seconds: Option<bool>,
    ) -> PyResult<Self> {
        let inner = build_formatter(style, maximum_units, include_seconds)?;
        Ok(Formatter { inner })
    }

    /// Format a duration expressed in seconds; raises `ValueError` for
    /// NaN/±inf input.
    #[pyo3(text_signature = "(self, seconds, /)")]
    pub fn format(&self, seconds: f64) -> PyResult<String> {
        let rendered = self.inner.format(seconds)?;
        Ok(rendered)
    }

    /// The configured style name (`"positional"`, `"short"`, or `"long"`).
    #[getter]
    pub fn style(&self) -> &'static str {
        match self.inner.options.style {
            FormatStyle::Positional => "positional",
            FormatStyle::Short => "short",
            FormatStyle::Long => "long",
        }
    }

    /// The clamped maximum number of rendered units.
    #[getter]
    pub fn maximum_units(&self) -> usize {
        self.inner.options.maximum_units
    }

    /// Whether seconds participate as a renderable unit.
    #[getter]
    pub fn include_seconds(&self) -> bool {
        self.inner.options.include_seconds
    }
}

/// _duration_formatting — PyO3 module initializer for the Python extension.
///
/// Creates the `formatting` submodule, attaches it to the parent module, and
/// registers it in `sys.modules` so it is importable via a dotted path. This
/// function is invoked automatically by Python when importing the compiled
/// extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _duration_formatting<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let formatting_mod = PyModule::new(_py, "formatting")?;
    formatting(_py, m, &formatting_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("duration_formatting.formatting", formatting_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn formatting<'py>(
    _py: Python, duration_formatting: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Formatter>()?;
    duration_formatting.add_submodule(m)?;
    Ok(())
}
