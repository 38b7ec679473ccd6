//! Shared validation helpers for Hawkes parameters, event data, and
//! evaluation windows.
//!
//! Purpose
//! -------
//! Centralize the small, reusable checks used across the Hawkes stack so
//! constructors and entry points can fail fast with structured errors. These
//! helpers enforce the domains of the model parameters (mu, A, theta), the
//! mark/dimension consistency of event sequences, the validity of
//! observation horizons and intensity query times, and the strict positivity
//! of computed intensities inside the likelihood hot path.
//!
//! Conventions
//! -----------
//! - Indices are 0-based; the first offending element is reported.
//! - Validation functions return [`ParamResult`] or [`HawkesResult`] and
//!   never panic on invalid *inputs*; panics are reserved for programming
//!   errors elsewhere.
//! - This module contains no I/O and no logging; it only inspects numeric
//!   values and array shapes.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on representative valid and invalid
//!   inputs, including boundary cases (zeros, infinities, NaNs, and
//!   horizon-equals-last-event).
use crate::hawkes::errors::{HawkesError, HawkesResult, ParamError, ParamResult};
use ndarray::{ArrayView1, ArrayView2};

/// Validate the background intensity vector mu.
///
/// Parameters
/// ----------
/// - `background`: `ArrayView1<f64>`
///   Candidate baseline intensities. Must be non-empty with finite,
///   non-negative entries.
///
/// Returns
/// -------
/// `ParamResult<()>`
///   - `Ok(())` if the vector is non-empty and every entry is finite and
///     >= 0.
///   - `Err(ParamError)` describing the first violation.
///
/// Errors
/// ------
/// - `ParamError::NoProcesses` if the vector is empty.
/// - `ParamError::InvalidBackground { index, value }` if any entry is NaN,
///   ±∞, or < 0.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_pointprocess::hawkes::core::validation::validate_background;
/// # use rust_pointprocess::hawkes::errors::ParamError;
///
/// let mu = array![0.5, 0.0];
/// assert!(validate_background(mu.view()).is_ok());
///
/// let bad = array![0.5, -1.0];
/// assert!(matches!(
///     validate_background(bad.view()),
///     Err(ParamError::InvalidBackground { .. })
/// ));
/// ```
pub fn validate_background(background: ArrayView1<f64>) -> ParamResult<()> {
    if background.is_empty() {
        return Err(ParamError::NoProcesses);
    }
    if let Some((index, &value)) =
        background.iter().enumerate().find(|(_, v)| **v < 0.0 || !(**v).is_finite())
    {
        return Err(ParamError::InvalidBackground { index, value });
    }
    Ok(())
}

/// Validate the excitation (infectivity) matrix A against the model
/// dimension.
///
/// Parameters
/// ----------
/// - `excitation`: `ArrayView2<f64>`
///   Candidate infectivity weights. Must be `dim` x `dim` with finite,
///   non-negative entries.
/// - `dim`: `usize`
///   Number of processes K inferred from the background vector.
///
/// Returns
/// -------
/// `ParamResult<()>`
///   - `Ok(())` if the shape matches and all entries are finite and >= 0.
///   - `Err(ParamError)` describing the first violation.
///
/// Errors
/// ------
/// - `ParamError::ExcitationShapeMismatch { expected, rows, cols }` if the
///   matrix is not `dim` x `dim`.
/// - `ParamError::InvalidExcitation { row, col, value }` if any entry is
///   NaN, ±∞, or < 0 (first offender in row-major order).
pub fn validate_excitation(excitation: ArrayView2<f64>, dim: usize) -> ParamResult<()> {
    let (rows, cols) = excitation.dim();
    if rows != dim || cols != dim {
        return Err(ParamError::ExcitationShapeMismatch { expected: dim, rows, cols });
    }
    for ((row, col), &value) in excitation.indexed_iter() {
        if value < 0.0 || !value.is_finite() {
            return Err(ParamError::InvalidExcitation { row, col, value });
        }
    }
    Ok(())
}

/// Validate the exponential decay rate theta.
///
/// Returns `Ok(())` for finite, strictly positive values, otherwise
/// `ParamError::InvalidDecay { value }`.
pub fn validate_decay(decay: f64) -> ParamResult<()> {
    if !decay.is_finite() || decay <= 0.0 {
        return Err(ParamError::InvalidDecay { value: decay });
    }
    Ok(())
}

/// Validate event marks against the model dimension K.
///
/// The event container cannot check this invariant on its own (it does not
/// know K), so every evaluation entry point calls this before any numerics.
///
/// # Errors
/// - `HawkesError::MarkOutOfRange { index, mark, dim }` for the first mark
///   >= `dim`.
pub fn validate_marks(marks: ArrayView1<usize>, dim: usize) -> HawkesResult<()> {
    if let Some((index, &mark)) = marks.iter().enumerate().find(|(_, m)| **m >= dim) {
        return Err(HawkesError::MarkOutOfRange { index, mark, dim });
    }
    Ok(())
}

/// Validate an observation horizon T.
///
/// Returns `Ok(())` for finite, strictly positive values, otherwise
/// `HawkesError::InvalidHorizon { value }`.
pub fn validate_horizon(horizon: f64) -> HawkesResult<()> {
    if !horizon.is_finite() || horizon <= 0.0 {
        return Err(HawkesError::InvalidHorizon { value: horizon });
    }
    Ok(())
}

/// Validate the likelihood evaluation window: the horizon must be valid and
/// must not precede the last event.
///
/// Parameters
/// ----------
/// - `horizon`: `f64`
///   Observation horizon T; must be finite and > 0.
/// - `last`: `Option<f64>`
///   Time of the last event, if any. `None` (empty realization) imposes no
///   additional constraint.
///
/// Errors
/// ------
/// - `HawkesError::InvalidHorizon { value }` if the horizon itself is
///   invalid.
/// - `HawkesError::HorizonBeforeLastEvent { horizon, last }` if
///   `last > horizon`.
pub fn validate_evaluation_window(horizon: f64, last: Option<f64>) -> HawkesResult<()> {
    validate_horizon(horizon)?;
    if let Some(last) = last {
        if last > horizon {
            return Err(HawkesError::HorizonBeforeLastEvent { horizon, last });
        }
    }
    Ok(())
}

/// Validate an intensity query time.
///
/// Returns `Ok(())` for finite, non-negative values, otherwise
/// `HawkesError::InvalidTime { value }`.
pub fn validate_query_time(time: f64) -> HawkesResult<()> {
    if !time.is_finite() || time < 0.0 {
        return Err(HawkesError::InvalidTime { value: time });
    }
    Ok(())
}

/// Guard a computed intensity inside the likelihood hot path.
///
/// The log-likelihood is undefined for a non-positive intensity; this is
/// surfaced as a typed domain error rather than silently mapped to `-inf`
/// or NaN, so callers can distinguish a degenerate model from a programming
/// error.
///
/// Parameters
/// ----------
/// - `index`: `usize`
///   Event index the intensity was computed at (for diagnostics).
/// - `value`: `f64`
///   The computed intensity `lambda`.
///
/// Returns
/// -------
/// `HawkesResult<f64>`
///   - `Ok(value)` if `value` is finite and strictly > 0.
///   - `Err(HawkesError::NonPositiveIntensity { index, value })` otherwise.
///
/// Examples
/// --------
/// ```rust
/// # use rust_pointprocess::hawkes::core::validation::validate_intensity;
/// # use rust_pointprocess::hawkes::errors::HawkesError;
///
/// assert_eq!(validate_intensity(0, 0.5), Ok(0.5));
/// assert!(matches!(
///     validate_intensity(3, 0.0),
///     Err(HawkesError::NonPositiveIntensity { index: 3, .. })
/// ));
/// ```
pub fn validate_intensity(index: usize, value: f64) -> HawkesResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HawkesError::NonPositiveIntensity { index, value });
    }
    Ok(value)
}
