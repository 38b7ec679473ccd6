//! Event-sequence containers for multivariate Hawkes models.
//!
//! Purpose
//! -------
//! Provide small, validated containers for marked event sequences used by the
//! likelihood engine and produced by the cluster simulator. This module
//! centralizes input validation for raw realizations so downstream code can
//! assume clean, time-ordered data.
//!
//! Key behaviors
//! -------------
//! - [`HawkesData`] enforces the realization invariants (equal array lengths,
//!   finite non-negative times, non-decreasing order).
//! - [`HawkesData::from_events`] builds a realization from an unordered event
//!   list with a deterministic, stable time sort (the simulator's output
//!   path).
//! - [`HawkesEvent`] is the plain `(time, mark)` pair exchanged between the
//!   offspring sampler and the cluster loop.
//!
//! Invariants & assumptions
//! ------------------------
//! - Times must be **finite and non-negative**, sorted non-decreasing.
//! - An empty realization is legal here: a subcritical simulation over a
//!   short window can produce zero events. Non-emptiness is a precondition
//!   of likelihood evaluation and is enforced there, not in the container.
//! - Mark/dimension consistency depends on a parameter set and is therefore
//!   checked at each evaluation entry point, not at construction.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; marks identify which of the K processes produced
//!   an event.
//! - Exact time ties keep their pre-sort relative order (`from_events` uses
//!   a stable sort with `f64::total_cmp`), so output order is a
//!   deterministic function of the input order.
//!
//! Downstream usage
//! ----------------
//! - Construct [`HawkesData`] at the boundary where observed realizations
//!   enter the stack, or receive one from `simulate`.
//! - Consumers may rely on the ordering/finiteness invariants when
//!   implementing recursions over the sequence.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `HawkesData::new` (happy
//!   path, length mismatch, non-finite, negative, and unordered times) and
//!   the sorting behavior of `from_events`.
use crate::hawkes::errors::{HawkesError, HawkesResult};
use ndarray::Array1;

/// A single marked event: a non-negative time and the index of the process
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HawkesEvent {
    /// Event time (>= 0).
    pub time: f64,
    /// Index of the emitting process, in `[0, K)`.
    pub mark: usize,
}

/// `HawkesData`: validated, time-ordered marked event sequence.
///
/// Purpose
/// -------
/// Represent one realization of a multivariate Hawkes process: parallel
/// arrays of event times and marks, validated so that downstream recursions
/// can assume ordered, finite data.
///
/// Fields
/// ------
/// - `times`: `Array1<f64>`
///   Event times; finite, non-negative, non-decreasing.
/// - `marks`: `Array1<usize>`
///   Emitting-process index per event; same length as `times`. Range checks
///   against a concrete dimension K happen at evaluation entry points.
///
/// Invariants
/// ----------
/// - `times.len() == marks.len()`.
/// - All times are finite, >= 0, and non-decreasing.
///
/// Performance
/// -----------
/// - Validation is a single O(n) scan; after construction this is a plain
///   container with no hidden allocations.
///
/// Notes
/// -----
/// - The container may be empty; likelihood evaluation rejects empty input
///   separately with `HawkesError::EmptySequence`.
#[derive(Debug, Clone, PartialEq)]
pub struct HawkesData {
    /// Event times (finite, >= 0, non-decreasing).
    pub times: Array1<f64>,
    /// Emitting-process index per event.
    pub marks: Array1<usize>,
}

impl HawkesData {
    /// Construct a validated realization from parallel time/mark arrays.
    ///
    /// Parameters
    /// ----------
    /// - `times`: `Array1<f64>`
    ///   Event times. Must be finite, non-negative, and non-decreasing.
    /// - `marks`: `Array1<usize>`
    ///   Emitting-process index per event; must have the same length as
    ///   `times`.
    ///
    /// Returns
    /// -------
    /// `HawkesResult<HawkesData>`
    ///   - `Ok(HawkesData)` if all invariants are satisfied.
    ///   - `Err(HawkesError)` describing the first violation encountered.
    ///
    /// Errors
    /// ------
    /// - `HawkesError::LengthMismatch { times, marks }`
    ///   Returned when the arrays differ in length.
    /// - `HawkesError::NonFiniteTime { index, value }`
    ///   Returned when any time is NaN or ±∞.
    /// - `HawkesError::NegativeTime { index, value }`
    ///   Returned when any time is < 0.
    /// - `HawkesError::UnorderedTimes { index, prev, value }`
    ///   Returned when a time is smaller than its predecessor.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `HawkesError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_pointprocess::hawkes::core::data::HawkesData;
    /// #
    /// let data = HawkesData::new(array![0.5, 1.0, 1.0], array![0, 1, 0]).unwrap();
    /// assert_eq!(data.len(), 3);
    /// assert_eq!(data.last_time(), Some(1.0));
    /// ```
    pub fn new(times: Array1<f64>, marks: Array1<usize>) -> HawkesResult<Self> {
        if times.len() != marks.len() {
            return Err(HawkesError::LengthMismatch { times: times.len(), marks: marks.len() });
        }

        let mut prev = 0.0_f64;
        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() {
                return Err(HawkesError::NonFiniteTime { index, value });
            }
            if value < 0.0 {
                return Err(HawkesError::NegativeTime { index, value });
            }
            if index > 0 && value < prev {
                return Err(HawkesError::UnorderedTimes { index, prev, value });
            }
            prev = value;
        }

        Ok(HawkesData { times, marks })
    }

    /// Build a realization from an unordered event list.
    ///
    /// Sorts the events ascending by time with a **stable** comparison
    /// (`f64::total_cmp`), so exact ties keep their input order and the
    /// result is a deterministic function of the input sequence. This is the
    /// assembly path used by the cluster simulator.
    ///
    /// # Errors
    /// - Propagates the same validation errors as [`HawkesData::new`]
    ///   (non-finite or negative times; ordering violations cannot occur
    ///   after the sort).
    pub fn from_events(mut events: Vec<HawkesEvent>) -> HawkesResult<Self> {
        events.sort_by(|a, b| a.time.total_cmp(&b.time));
        let times = Array1::from_iter(events.iter().map(|e| e.time));
        let marks = Array1::from_iter(events.iter().map(|e| e.mark));
        HawkesData::new(times, marks)
    }

    /// Number of events in the realization.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the realization contains no events.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last event, or `None` for an empty realization.
    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }
}
