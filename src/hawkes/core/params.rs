//! Parameter containers for multivariate exponential-kernel Hawkes models.
//!
//! Purpose
//! -------
//! Provide the validated parameter set consumed by both the likelihood
//! engine and the cluster simulator: background intensities, the K x K
//! excitation (infectivity) matrix, and the scalar exponential decay rate.
//!
//! Key behaviors
//! -------------
//! - [`HawkesParams::new`] enforces the parameter invariants once, at the
//!   boundary, so downstream numerics never re-validate.
//! - [`HawkesParams::max_branching_ratio`] exposes the subcriticality
//!   diagnostic that documents the stability precondition of simulation.
//!
//! Invariants & assumptions
//! ------------------------
//! - `background` is non-empty with finite, non-negative entries.
//! - `excitation` is square, K x K for `K = background.len()`, with finite,
//!   non-negative entries; `excitation[[j, k]]` scales the influence of
//!   process j's events on process k's intensity.
//! - `decay` is finite and strictly positive.
//! - Subcriticality of the branching structure (spectral radius of the
//!   excitation matrix < 1) is a **caller precondition** for simulation; it
//!   is diagnosed via [`HawkesParams::max_branching_ratio`] but not
//!   enforced.
//!
//! Conventions
//! -----------
//! - The excitation kernel is normalized so that an event of process j
//!   produces on average `excitation[[j, k]]` children of process k; the
//!   instantaneous kernel is `excitation[[j, k]] * decay * exp(-decay * dt)`.
//!
//! Downstream usage
//! ----------------
//! - Construct once, share by reference across likelihood evaluations and
//!   simulation runs; the type is immutable after construction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, every rejection branch of `new`, and
//!   the branching-ratio diagnostic.
use crate::hawkes::core::validation::{validate_background, validate_decay, validate_excitation};
use crate::hawkes::errors::ParamResult;
use ndarray::{Array1, Array2, Axis};

/// `HawkesParams`: validated model parameters (mu, A, theta).
///
/// Purpose
/// -------
/// Bundle the background vector, excitation matrix, and decay rate of a
/// multivariate Hawkes process with exponential kernels, validated at
/// construction so numerics can assume the documented invariants.
///
/// Fields
/// ------
/// - `background`: `Array1<f64>`
///   Baseline intensity per process (mu); finite, non-negative, length K.
/// - `excitation`: `Array2<f64>`
///   Infectivity weights (A); K x K, finite, non-negative.
///   `excitation[[j, k]]` is the influence of process j on process k.
/// - `decay`: `f64`
///   Exponential decay rate (theta); finite, > 0, shared by all kernels.
///
/// Invariants
/// ----------
/// - `background.len() >= 1`.
/// - `excitation.dim() == (K, K)` with `K = background.len()`.
/// - All entries of `background` and `excitation` are finite and >= 0.
/// - `decay` is finite and > 0.
///
/// Notes
/// -----
/// - Parameters are immutable for the duration of any evaluation or
///   simulation call; the engines never mutate them.
#[derive(Debug, Clone, PartialEq)]
pub struct HawkesParams {
    /// Baseline intensity per process (mu >= 0 elementwise).
    pub background: Array1<f64>,
    /// Infectivity matrix (A >= 0 elementwise); row j is the influence of
    /// process j's events on every target process.
    pub excitation: Array2<f64>,
    /// Exponential decay rate (theta > 0).
    pub decay: f64,
}

impl HawkesParams {
    /// Construct a validated parameter set.
    ///
    /// Parameters
    /// ----------
    /// - `background`: `Array1<f64>`
    ///   Baseline intensities; non-empty, finite, non-negative.
    /// - `excitation`: `Array2<f64>`
    ///   Infectivity matrix; must be `background.len()` square with finite,
    ///   non-negative entries.
    /// - `decay`: `f64`
    ///   Exponential decay rate; finite and strictly positive.
    ///
    /// Returns
    /// -------
    /// `ParamResult<HawkesParams>`
    ///   - `Ok(..)` if all invariants are satisfied.
    ///   - `Err(ParamError)` describing the first violation.
    ///
    /// Errors
    /// ------
    /// - `ParamError::NoProcesses` if `background` is empty.
    /// - `ParamError::InvalidBackground { index, value }` for a negative or
    ///   non-finite background entry.
    /// - `ParamError::ExcitationShapeMismatch { expected, rows, cols }` if
    ///   `excitation` is not K x K.
    /// - `ParamError::InvalidExcitation { row, col, value }` for a negative
    ///   or non-finite excitation entry.
    /// - `ParamError::InvalidDecay { value }` if `decay` is NaN, ±∞, or <= 0.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_pointprocess::hawkes::core::params::HawkesParams;
    /// #
    /// let params = HawkesParams::new(
    ///     array![0.5, 0.2],
    ///     array![[0.3, 0.1], [0.0, 0.4]],
    ///     1.5,
    /// )
    /// .unwrap();
    /// assert_eq!(params.dim(), 2);
    /// ```
    pub fn new(
        background: Array1<f64>, excitation: Array2<f64>, decay: f64,
    ) -> ParamResult<Self> {
        validate_background(background.view())?;
        validate_excitation(excitation.view(), background.len())?;
        validate_decay(decay)?;
        Ok(HawkesParams { background, excitation, decay })
    }

    /// Number of processes K.
    pub fn dim(&self) -> usize {
        self.background.len()
    }

    /// Largest expected total offspring count over emitting processes:
    /// `max_j sum_k excitation[[j, k]]`.
    ///
    /// This is an upper bound on the spectral radius of the excitation
    /// matrix (the branching process is subcritical whenever that radius is
    /// below one), so a value < 1 certifies that cluster simulation
    /// terminates almost surely. A value >= 1 does not prove divergence but
    /// marks the parameter set as one the resource caps exist for.
    pub fn max_branching_ratio(&self) -> f64 {
        self.excitation
            .sum_axis(Axis(1))
            .iter()
            .fold(0.0_f64, |acc, &row_sum| acc.max(row_sum))
    }
}
