//! Resource caps for cluster simulation.
//!
//! Purpose
//! -------
//! Provide a small, validated container bounding the branching loop of the
//! cluster simulator. The branching representation only terminates almost
//! surely for subcritical parameter sets; these caps turn a potentially
//! unbounded run under unstable parameters into a typed failure instead of
//! a hang.
//!
//! Conventions
//! -----------
//! - `max_generations` counts offspring generations (immigrants are
//!   generation zero and are not counted against it).
//! - `max_events` counts every accepted event, immigrants included.
//! - Breaching a cap aborts the run with
//!   `HawkesError::GenerationLimitExceeded` or
//!   `HawkesError::EventLimitExceeded`; no partial realization is returned.
use crate::hawkes::errors::{HawkesError, HawkesResult};

/// Default cap on offspring generations.
const DEFAULT_MAX_GENERATIONS: usize = 1_000;
/// Default cap on total accepted events.
const DEFAULT_MAX_EVENTS: usize = 10_000_000;

/// `SimulationLimits`: validated resource caps for the branching loop.
///
/// Fields
/// ------
/// - `max_generations`: `usize`
///   Upper bound on the number of offspring generations (> 0).
/// - `max_events`: `usize`
///   Upper bound on the total number of accepted events (> 0).
///
/// Notes
/// -----
/// - The defaults are generous enough that any subcritical simulation over
///   a reasonable window finishes far below them; they exist to bound runs
///   under supercritical parameters, which remain a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationLimits {
    /// Cap on offspring generations (> 0).
    pub max_generations: usize,
    /// Cap on total accepted events (> 0).
    pub max_events: usize,
}

impl SimulationLimits {
    /// Construct validated caps.
    ///
    /// # Errors
    /// - `HawkesError::ZeroLimit { name }` if either cap is zero.
    pub fn new(max_generations: usize, max_events: usize) -> HawkesResult<Self> {
        if max_generations == 0 {
            return Err(HawkesError::ZeroLimit { name: "max_generations" });
        }
        if max_events == 0 {
            return Err(HawkesError::ZeroLimit { name: "max_events" });
        }
        Ok(SimulationLimits { max_generations, max_events })
    }
}

impl Default for SimulationLimits {
    fn default() -> Self {
        SimulationLimits {
            max_generations: DEFAULT_MAX_GENERATIONS,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // `SimulationLimits::new` accepts positive caps and preserves them.
    //
    // Given
    // -----
    // - `(max_generations, max_events) = (10, 100)`.
    //
    // Expect
    // ------
    // - `Ok(..)` with fields preserved.
    fn new_accepts_positive_caps() {
        let limits = SimulationLimits::new(10, 100).unwrap();

        assert_eq!(limits.max_generations, 10);
        assert_eq!(limits.max_events, 100);
    }

    #[test]
    // Purpose
    // -------
    // `SimulationLimits::new` rejects zero caps and names the offender.
    //
    // Given
    // -----
    // - A zero generation cap, then a zero event cap.
    //
    // Expect
    // ------
    // - `ZeroLimit { name: "max_generations" }` and
    //   `ZeroLimit { name: "max_events" }` respectively.
    fn new_rejects_zero_caps() {
        assert_eq!(
            SimulationLimits::new(0, 100).unwrap_err(),
            HawkesError::ZeroLimit { name: "max_generations" }
        );
        assert_eq!(
            SimulationLimits::new(10, 0).unwrap_err(),
            HawkesError::ZeroLimit { name: "max_events" }
        );
    }

    #[test]
    // Purpose
    // -------
    // The default caps are positive and pass their own validation.
    //
    // Given
    // -----
    // - `SimulationLimits::default()`.
    //
    // Expect
    // ------
    // - Re-validating the defaults succeeds.
    fn default_caps_validate() {
        let defaults = SimulationLimits::default();

        assert!(SimulationLimits::new(defaults.max_generations, defaults.max_events).is_ok());
    }
}
