//! Integration tests for Hawkes simulation and likelihood evaluation.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from validated parameters, through
//!   exact cluster simulation, to likelihood evaluation of the simulated
//!   realizations.
//! - Exercise realistic parameter regimes (multivariate, cross-exciting,
//!   subcritical) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `hawkes::core`:
//!   - `HawkesParams` construction and the branching-ratio diagnostic.
//!   - `log_likelihood` vs `log_likelihood_pairwise` on simulated data.
//!   - `intensity_at` consistency with the background floor.
//! - `hawkes::simulate`:
//!   - Single-path and parallel multi-path simulation with seeded
//!     generators and default resource caps.
//!   - Sort/bounds invariants on every output.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (validators,
//!   scratch state, error payloads); these are covered by unit tests.
//! - Statistical goodness-of-fit beyond first-moment checks; distributional
//!   properties are covered where the draws are made.
use ndarray::array;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_pointprocess::hawkes::{
    HawkesData, HawkesParams, SimulationLimits, intensity_at, log_likelihood,
    log_likelihood_pairwise, simulate, simulate_many,
};

/// Purpose
/// -------
/// Provide a subcritical trivariate parameter set with both self- and
/// cross-excitation, representative of a realistic mutually exciting
/// system.
///
/// Configuration
/// -------------
/// - Background rates (0.5, 0.3, 0.2).
/// - Excitation rows summing to at most 0.6, so the branching ratio is
///   comfortably below one and cluster simulation terminates quickly.
/// - Decay rate 1.2.
///
/// Invariants
/// ----------
/// - Panics if `HawkesParams::new` rejects the set; this is a test-time
///   configuration error, not a runtime path under test.
fn stable_trivariate_params() -> HawkesParams {
    HawkesParams::new(
        array![0.5, 0.3, 0.2],
        array![
            [0.25, 0.10, 0.05],
            [0.05, 0.30, 0.10],
            [0.10, 0.10, 0.20]
        ],
        1.2,
    )
    .expect("HawkesParams::new should accept a subcritical parameter set")
}

/// Purpose
/// -------
/// Assert the realization invariants every simulation output must satisfy:
/// non-decreasing times, all within `[0, horizon)`, marks within the
/// parameter dimension.
fn assert_realization_invariants(data: &HawkesData, params: &HawkesParams, horizon: f64) {
    for i in 0..data.len() {
        let time = data.times[i];
        assert!(
            (0.0..horizon).contains(&time),
            "event {i} at {time} outside [0, {horizon})"
        );
        assert!(data.marks[i] < params.dim(), "event {i} has out-of-range mark");
        if i > 0 {
            assert!(data.times[i - 1] <= time, "event {i} breaks the time ordering");
        }
    }
}

#[test]
// Purpose
// -------
// Simulated realizations from a subcritical trivariate model satisfy the
// sort/bounds invariants and evaluate to identical log-likelihoods under
// the recursive engine and the pairwise oracle.
//
// Given
// -----
// - `stable_trivariate_params()`, horizon 30, several seeds.
//
// Expect
// ------
// - Invariants hold for every realization; the two evaluations agree
//   within 1e-9 relative for every non-empty realization.
fn simulate_then_evaluate_agrees_with_pairwise_oracle() {
    let params = stable_trivariate_params();
    let limits = SimulationLimits::default();
    let horizon = 30.0;

    assert!(params.max_branching_ratio() < 1.0);

    for seed in [3_u64, 17, 29, 101] {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = simulate(&params, horizon, &limits, &mut rng)
            .expect("subcritical simulation should stay within default caps");

        assert_realization_invariants(&data, &params, horizon);
        if data.is_empty() {
            continue;
        }

        let recursive = log_likelihood(&data, &params, horizon)
            .expect("likelihood should be defined for positive background rates");
        let pairwise = log_likelihood_pairwise(&data, &params, horizon).unwrap();

        assert!(
            (recursive - pairwise).abs() <= 1e-9 * pairwise.abs().max(1.0),
            "seed {seed}: recursive {recursive} vs pairwise {pairwise}"
        );
        assert!(recursive.is_finite());
    }
}

#[test]
// Purpose
// -------
// The pure-Poisson scenario composes end to end: with zero excitation the
// simulated realizations are immigrant-only and their likelihood matches
// the closed-form Poisson expression exactly.
//
// Given
// -----
// - mu = [1.0], A = [[0.0]], theta = 1.0, T = 10.0, several seeds.
//
// Expect
// ------
// - For every non-empty realization of N events,
//   `log_likelihood == N ln(1.0) - 1.0 * 10.0 == -10.0` within 1e-12.
fn pure_poisson_realizations_match_closed_form() {
    let params = HawkesParams::new(array![1.0], array![[0.0]], 1.0).unwrap();
    let limits = SimulationLimits::default();
    let horizon = 10.0;

    for seed in [1_u64, 8, 21] {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = simulate(&params, horizon, &limits, &mut rng).unwrap();

        assert_realization_invariants(&data, &params, horizon);
        if data.is_empty() {
            continue;
        }

        let expected = data.len() as f64 * 1.0_f64.ln() - 1.0 * horizon;
        let loglik = log_likelihood(&data, &params, horizon).unwrap();
        assert!(
            (loglik - expected).abs() < 1e-12,
            "seed {seed}: loglik {loglik} vs closed form {expected}"
        );
    }
}

#[test]
// Purpose
// -------
// Parallel multi-path simulation composes with evaluation: every path is
// a valid realization and evaluates consistently under both engines.
//
// Given
// -----
// - 8 paths of the trivariate model over horizon 15 with base seed 400.
//
// Expect
// ------
// - 8 realizations, all satisfying the invariants; recursive and pairwise
//   evaluations agree on each non-empty path.
fn parallel_paths_evaluate_consistently() {
    let params = stable_trivariate_params();
    let limits = SimulationLimits::default();
    let horizon = 15.0;

    let realizations = simulate_many(&params, horizon, &limits, 8, 400).unwrap();
    assert_eq!(realizations.len(), 8);

    for data in &realizations {
        assert_realization_invariants(data, &params, horizon);
        if data.is_empty() {
            continue;
        }
        let recursive = log_likelihood(data, &params, horizon).unwrap();
        let pairwise = log_likelihood_pairwise(data, &params, horizon).unwrap();
        assert!((recursive - pairwise).abs() <= 1e-9 * pairwise.abs().max(1.0));
    }
}

#[test]
// Purpose
// -------
// Intensity queries on simulated histories respect the background floor
// (non-negative excitation can only raise the intensity) and reduce to the
// background exactly at time zero.
//
// Given
// -----
// - One simulated trivariate realization; queries at t = 0 and at several
//   interior times.
//
// Expect
// ------
// - `intensity_at(.., 0.0) == mu`; every queried intensity is >= mu
//   elementwise.
fn intensity_queries_respect_background_floor() {
    let params = stable_trivariate_params();
    let limits = SimulationLimits::default();
    let mut rng = StdRng::seed_from_u64(77);
    let data = simulate(&params, 20.0, &limits, &mut rng).unwrap();

    let at_zero = intensity_at(&data, &params, 0.0).unwrap();
    assert_eq!(at_zero, params.background);

    for t in [1.0, 5.0, 12.5, 19.9] {
        let lambda = intensity_at(&data, &params, t).unwrap();
        for k in 0..params.dim() {
            assert!(
                lambda[k] >= params.background[k],
                "lambda[{k}] = {} fell below the background rate at t = {t}",
                lambda[k]
            );
        }
    }
}
