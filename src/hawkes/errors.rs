//! Errors for the Hawkes stack (event-data validation, evaluation-window
//! checks, likelihood domain failures, and simulation resource caps).
//!
//! This module defines the model error type, [`HawkesError`], and the
//! parameter error type, [`ParamError`], used across the crate. Both
//! implement `Display`/`Error` and carry enough context (offending index,
//! value, expected shape) for a caller to diagnose the violation without
//! re-running validation.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to positions in the event sequence or
//!   coordinates of the parameter containers.
//! - Event times must be **finite and non-negative**, and non-decreasing.
//! - A computed intensity that is not strictly positive is a domain failure
//!   ([`HawkesError::NonPositiveIntensity`]), never a silent `-inf` or NaN.
//! - Distribution-construction failures from `statrs` are normalized to
//!   [`HawkesError::InvalidPoissonRate`].
use statrs::StatsError;

/// Crate-wide result alias for Hawkes operations that may produce
/// [`HawkesError`].
pub type HawkesResult<T> = Result<T, HawkesError>;

/// Result alias for parameter-construction/validation paths that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Unified error type for Hawkes evaluation and simulation.
///
/// Covers event-sequence validation, evaluation-window checks, intensity
/// domain failures during likelihood evaluation, and resource-cap breaches
/// during cluster simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum HawkesError {
    // ---- Event-sequence validation ----
    /// Times and marks arrays have different lengths.
    LengthMismatch { times: usize, marks: usize },

    /// Likelihood evaluation requires at least one event.
    EmptySequence,

    /// An event time is NaN/±inf.
    NonFiniteTime { index: usize, value: f64 },

    /// An event time is < 0.
    NegativeTime { index: usize, value: f64 },

    /// An event time is smaller than its predecessor.
    UnorderedTimes { index: usize, prev: f64, value: f64 },

    /// An event mark is outside `[0, dim)`.
    MarkOutOfRange { index: usize, mark: usize, dim: usize },

    // ---- Evaluation window ----
    /// Observation horizon must be finite and > 0.
    InvalidHorizon { value: f64 },

    /// Observation horizon precedes the last event time.
    HorizonBeforeLastEvent { horizon: f64, last: f64 },

    /// Intensity query time must be finite and >= 0.
    InvalidTime { value: f64 },

    // ---- Likelihood domain ----
    /// A computed intensity was <= 0 or non-finite (log undefined).
    NonPositiveIntensity { index: usize, value: f64 },

    // ---- Simulation resource caps ----
    /// A simulation limit must be strictly positive.
    ZeroLimit { name: &'static str },

    /// Cluster simulation exceeded the configured generation cap.
    GenerationLimitExceeded { limit: usize },

    /// Cluster simulation exceeded the configured total-event cap.
    EventLimitExceeded { limit: usize },

    // ---- statrs distribution errors ----
    /// Wrapper for statrs::distribution::PoissonError.
    InvalidPoissonRate,
}

impl std::error::Error for HawkesError {}

impl std::fmt::Display for HawkesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Event-sequence validation ----
            HawkesError::LengthMismatch { times, marks } => {
                write!(f, "Times/marks length mismatch: {times} times vs {marks} marks")
            }
            HawkesError::EmptySequence => {
                write!(f, "Likelihood evaluation requires a non-empty event sequence.")
            }
            HawkesError::NonFiniteTime { index, value } => {
                write!(f, "Event time at index {index} is non-finite: {value}")
            }
            HawkesError::NegativeTime { index, value } => {
                write!(f, "Event time at index {index} is negative: {value}")
            }
            HawkesError::UnorderedTimes { index, prev, value } => {
                write!(
                    f,
                    "Event times must be non-decreasing; index {index} has {value} after {prev}"
                )
            }
            HawkesError::MarkOutOfRange { index, mark, dim } => {
                write!(f, "Mark at index {index} is {mark}, outside [0, {dim})")
            }
            // ---- Evaluation window ----
            HawkesError::InvalidHorizon { value } => {
                write!(f, "Observation horizon must be finite and > 0; got: {value}")
            }
            HawkesError::HorizonBeforeLastEvent { horizon, last } => {
                write!(
                    f,
                    "Observation horizon ({horizon}) must not precede the last event time ({last})"
                )
            }
            HawkesError::InvalidTime { value } => {
                write!(f, "Intensity query time must be finite and >= 0; got: {value}")
            }
            // ---- Likelihood domain ----
            HawkesError::NonPositiveIntensity { index, value } => {
                write!(
                    f,
                    "Intensity at event index {index} is not strictly positive ({value}); log-likelihood undefined"
                )
            }
            // ---- Simulation resource caps ----
            HawkesError::ZeroLimit { name } => {
                write!(f, "Simulation limit `{name}` must be strictly positive.")
            }
            HawkesError::GenerationLimitExceeded { limit } => {
                write!(f, "Cluster simulation exceeded the generation cap ({limit}).")
            }
            HawkesError::EventLimitExceeded { limit } => {
                write!(f, "Cluster simulation exceeded the total-event cap ({limit}).")
            }
            // ---- statrs distribution errors ----
            HawkesError::InvalidPoissonRate => {
                write!(f, "Poisson distribution requires a finite rate > 0.")
            }
        }
    }
}

impl From<StatsError> for HawkesError {
    fn from(_: StatsError) -> HawkesError {
        HawkesError::InvalidPoissonRate
    }
}

/// Errors specific to parameter construction and validation.
///
/// Typical causes include shape mismatches between the background vector and
/// the excitation matrix, negative or non-finite coordinates, and a
/// non-positive decay rate.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// The background vector is empty (the model needs at least one process).
    NoProcesses,

    /// A background intensity is negative or non-finite.
    InvalidBackground { index: usize, value: f64 },

    /// Excitation matrix is not K x K for K background intensities.
    ExcitationShapeMismatch { expected: usize, rows: usize, cols: usize },

    /// An excitation weight is negative or non-finite.
    InvalidExcitation { row: usize, col: usize, value: f64 },

    /// Decay rate must be finite and > 0.
    InvalidDecay { value: f64 },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::NoProcesses => {
                write!(f, "Background vector is empty; the model needs at least one process.")
            }
            ParamError::InvalidBackground { index, value } => {
                write!(
                    f,
                    "Background intensity at index {index} must be non-negative and finite, got {value}"
                )
            }
            ParamError::ExcitationShapeMismatch { expected, rows, cols } => {
                write!(
                    f,
                    "Excitation matrix must be {expected}x{expected} to match the background vector, got {rows}x{cols}"
                )
            }
            ParamError::InvalidExcitation { row, col, value } => {
                write!(
                    f,
                    "Excitation weight at ({row}, {col}) must be non-negative and finite, got {value}"
                )
            }
            ParamError::InvalidDecay { value } => {
                write!(f, "Decay rate must be finite and > 0, got {value}")
            }
        }
    }
}
