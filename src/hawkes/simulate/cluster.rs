//! Exact cluster (branching) simulation of multivariate Hawkes processes.
//!
//! Purpose
//! -------
//! Generate exact samples from the model without thinning or rejection over
//! the full window, using the branching representation: background-rate
//! immigrants plus Poisson-distributed offspring per event, generation by
//! generation until a generation comes up empty.
//!
//! Key behaviors
//! -------------
//! - Immigrants: per process k, a Poisson(mu[k] * horizon) count of events
//!   uniform on `[0, horizon)`.
//! - Iteration: every event of the current generation feeds
//!   [`sample_offspring`] with its own excitation row; the union of the
//!   returned children is the next generation.
//! - Output: all generations unioned and assembled into a time-sorted
//!   [`HawkesData`] with a stable, deterministic tie-break.
//! - Resource caps ([`SimulationLimits`]) bound the loop; breaching one
//!   aborts with a typed error and no partial result.
//!
//! Invariants & assumptions
//! ------------------------
//! - Termination is only guaranteed almost surely for subcritical
//!   parameter sets (see `HawkesParams::max_branching_ratio`); this is a
//!   caller precondition, not something the loop verifies.
//! - All randomness flows through the caller-supplied generator, so a
//!   fixed seed reproduces the realization exactly.
//! - Single-path simulation is synchronous and single-threaded;
//!   [`simulate_many`] is the only parallel entry point and gives each
//!   worker its own generator derived from the base seed.
use crate::hawkes::core::data::{HawkesData, HawkesEvent};
use crate::hawkes::core::params::HawkesParams;
use crate::hawkes::core::validation::validate_horizon;
use crate::hawkes::errors::{HawkesError, HawkesResult};
use crate::hawkes::simulate::limits::SimulationLimits;
use crate::hawkes::simulate::offspring::sample_offspring;
use rand::Rng;
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rayon::prelude::*;
use statrs::distribution::Poisson;

/// Draw one exact realization over `[0, horizon)`.
///
/// Parameters
/// ----------
/// - `params`: validated model parameters; subcriticality is the caller's
///   responsibility (the caps below are the safety net, not a proof).
/// - `horizon`: observation window length; must be finite and > 0.
/// - `limits`: generation and total-event caps.
/// - `rng`: caller-owned generator; pass a seeded `StdRng` for
///   reproducibility.
///
/// Returns
/// -------
/// A time-sorted [`HawkesData`] realization. May be empty (no immigrants
/// were drawn).
///
/// # Errors
/// - `HawkesError::InvalidHorizon { value }` for a bad window.
/// - `HawkesError::GenerationLimitExceeded { limit }` /
///   `HawkesError::EventLimitExceeded { limit }` when a cap is breached.
pub fn simulate(
    params: &HawkesParams, horizon: f64, limits: &SimulationLimits, rng: &mut StdRng,
) -> HawkesResult<HawkesData> {
    validate_horizon(horizon)?;

    let mut accepted: Vec<HawkesEvent> = Vec::new();
    let mut current = sample_immigrants(params, horizon, rng)?;
    let mut total = current.len();
    if total > limits.max_events {
        return Err(HawkesError::EventLimitExceeded { limit: limits.max_events });
    }

    let mut generation = 0_usize;
    while !current.is_empty() {
        generation += 1;
        if generation > limits.max_generations {
            return Err(HawkesError::GenerationLimitExceeded {
                limit: limits.max_generations,
            });
        }

        let mut next: Vec<HawkesEvent> = Vec::new();
        for parent in &current {
            let children = sample_offspring(
                parent.time,
                params.excitation.row(parent.mark),
                params.decay,
                horizon,
                rng,
            )?;
            total += children.len();
            if total > limits.max_events {
                return Err(HawkesError::EventLimitExceeded { limit: limits.max_events });
            }
            next.extend(children);
        }
        accepted.append(&mut current);
        current = next;
    }

    HawkesData::from_events(accepted)
}

/// Draw `n_paths` independent realizations in parallel.
///
/// Each path owns a `StdRng` seeded with `seed + path index`, so paths are
/// independent, reproducible, and safe to run concurrently; the result
/// order matches the path index regardless of scheduling. Fails if any
/// path fails.
pub fn simulate_many(
    params: &HawkesParams, horizon: f64, limits: &SimulationLimits, n_paths: usize, seed: u64,
) -> HawkesResult<Vec<HawkesData>> {
    (0..n_paths)
        .into_par_iter()
        .map(|path| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(path as u64));
            simulate(params, horizon, limits, &mut rng)
        })
        .collect()
}

/// Generation zero: Poisson(mu[k] * horizon) events per process, uniform on
/// the window.
fn sample_immigrants(
    params: &HawkesParams, horizon: f64, rng: &mut StdRng,
) -> HawkesResult<Vec<HawkesEvent>> {
    let mut immigrants = Vec::new();
    for (mark, &rate) in params.background.iter().enumerate() {
        let mean = rate * horizon;
        if mean <= 0.0 {
            continue;
        }
        let count = Poisson::new(mean)?.sample(rng) as usize;
        for _ in 0..count {
            immigrants.push(HawkesEvent { time: rng.gen::<f64>() * horizon, mark });
        }
    }
    Ok(immigrants)
}
