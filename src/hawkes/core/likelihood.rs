//! Log-likelihood evaluation for multivariate exponential-kernel Hawkes
//! processes: the O(N*K) recursion and its O(N^2) pairwise reference.
//!
//! ## Model convention
//! With background `mu`, infectivity `A`, and decay `theta`, the conditional
//! intensity of process m at event time `t_i` is
//!
//! `lambda_m(t_i) = mu[m] + theta * sum_k A[k, m] * sum_{j < i, c_j = k} exp(-theta (t_i - t_j))`
//!
//! and the log-likelihood over `[0, T)` is the sum of `ln lambda_{c_i}(t_i)`
//! minus `sum_k mu[k] * T` minus the integrated-excitation correction
//! `sum_j (sum_k A[j, k]) * F[j]` with
//! `F[j] = sum_{i: c_i = j} (1 - exp(-theta (T - t_i)))`.
//!
//! ## What this module does
//! - [`log_likelihood`]: evaluates the inner history sums in constant time
//!   per event and process via [`DecayState`], instead of rescanning all
//!   prior events. The per-process accumulator is decayed and folded back
//!   **only when its own process fires**; evaluating it read-only in between
//!   is what keeps the recursion exactly equal to the pairwise sum (see the
//!   workspace module docs for why an unconditional write-back diverges).
//! - [`log_likelihood_pairwise`]: the direct O(N^2) evaluation of the same
//!   formula. It is the correctness oracle for the recursion and a
//!   diagnostic for callers; both entry points validate identically and
//!   agree to floating tolerance on every valid input.
//!
//! ## Failure semantics
//! All inputs are validated before any computation (fail-fast, no partial
//! results). A computed intensity <= 0 surfaces as
//! `HawkesError::NonPositiveIntensity` rather than a silent `-inf`, so a
//! degenerate model (e.g. a first event whose process has zero background
//! rate) is distinguishable from a programming error.
use crate::hawkes::core::{
    data::HawkesData,
    params::HawkesParams,
    validation::{validate_evaluation_window, validate_marks},
    workspace::{Compensator, DecayState, log_intensity_term},
};
use crate::hawkes::errors::{HawkesError, HawkesResult};

/// Evaluate the exact log-likelihood of a realization via the O(N*K)
/// recursion.
///
/// # Preconditions (validated, in order)
/// - `data` is non-empty.
/// - Every mark lies in `[0, params.dim())`.
/// - `horizon` is finite, > 0, and >= the last event time.
///
/// # Returns
/// The scalar log-likelihood under `params` over the window `[0, horizon)`.
///
/// # Errors
/// - `HawkesError::EmptySequence` and the validation errors above.
/// - `HawkesError::NonPositiveIntensity { index, value }` if the intensity
///   at any event is not strictly positive (undefined logarithm).
///
/// # Notes
/// - O(N*K) time, O(K) scratch; the scratch state is created fresh per call
///   and never shared.
/// - The first event is seeded with `ln(mu[c_0])` exactly: no prior history
///   exists, so its intensity is the background rate alone.
pub fn log_likelihood(
    data: &HawkesData, params: &HawkesParams, horizon: f64,
) -> HawkesResult<f64> {
    validate_inputs(data, params, horizon)?;

    let theta = params.decay;
    let mut state = DecayState::new(params.dim(), theta);
    let mut compensator = Compensator::new(params.dim(), theta, horizon);

    let mut loglik = 0.0;
    let mut prev_time = 0.0;
    for (index, (&time, &mark)) in data.times.iter().zip(data.marks.iter()).enumerate() {
        let drive = if index == 0 {
            0.0
        } else {
            state.advance(time - prev_time);
            state.drive(mark, &params.excitation)
        };
        loglik += log_intensity_term(index, params.background[mark], theta, drive)?;
        compensator.observe(mark, time);
        state.register(mark);
        prev_time = time;
    }

    Ok(loglik - params.background.sum() * horizon - compensator.correction(&params.excitation))
}

/// Evaluate the same log-likelihood by the direct O(N^2) pairwise sum.
///
/// Reference implementation: every event's excitation drive is recomputed
/// by scanning all prior events. Kept public as the correctness oracle for
/// [`log_likelihood`] and as a diagnostic for callers; identical validation
/// and failure semantics.
pub fn log_likelihood_pairwise(
    data: &HawkesData, params: &HawkesParams, horizon: f64,
) -> HawkesResult<f64> {
    validate_inputs(data, params, horizon)?;

    let theta = params.decay;
    let mut compensator = Compensator::new(params.dim(), theta, horizon);

    let mut loglik = 0.0;
    for i in 0..data.len() {
        let (time, mark) = (data.times[i], data.marks[i]);
        let mut drive = 0.0;
        for j in 0..i {
            let weight = (-theta * (time - data.times[j])).exp();
            drive += params.excitation[[data.marks[j], mark]] * weight;
        }
        loglik += log_intensity_term(i, params.background[mark], theta, drive)?;
        compensator.observe(mark, time);
    }

    Ok(loglik - params.background.sum() * horizon - compensator.correction(&params.excitation))
}

fn validate_inputs(data: &HawkesData, params: &HawkesParams, horizon: f64) -> HawkesResult<()> {
    if data.is_empty() {
        return Err(HawkesError::EmptySequence);
    }
    validate_marks(data.marks.view(), params.dim())?;
    validate_evaluation_window(horizon, data.last_time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The univariate Poisson reduction (closed form).
    // - Recursive vs pairwise agreement across K, excitation sparsity, and
    //   exact time ties.
    // - Validation and domain-error paths shared by both entry points.
    //
    // They intentionally DO NOT cover:
    // - Simulated-data pipelines (integration tests).
    // -------------------------------------------------------------------------

    fn univariate_poisson_params(mu: f64) -> HawkesParams {
        HawkesParams::new(array![mu], array![[0.0]], 1.0).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // With K = 1 and zero excitation the likelihood reduces to the
    // closed-form Poisson expression `N ln(mu) - mu T`.
    //
    // Given
    // -----
    // - mu = 0.7, T = 10, five sorted event times.
    //
    // Expect
    // ------
    // - Both entry points equal `5 ln(0.7) - 7.0` to 1e-12.
    fn reduces_to_poisson_closed_form() {
        let data =
            HawkesData::new(array![0.4, 1.1, 3.0, 7.2, 9.9], array![0, 0, 0, 0, 0]).unwrap();
        let params = univariate_poisson_params(0.7);
        let horizon = 10.0;

        let expected = 5.0 * 0.7_f64.ln() - 0.7 * horizon;

        let recursive = log_likelihood(&data, &params, horizon).unwrap();
        let pairwise = log_likelihood_pairwise(&data, &params, horizon).unwrap();

        assert!((recursive - expected).abs() < 1e-12, "recursive {recursive} vs {expected}");
        assert!((pairwise - expected).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The recursion matches the pairwise reference on a small bivariate
    // realization with a dense excitation matrix.
    //
    // Given
    // -----
    // - N = 5, K = 2, alternating marks, all excitation entries positive.
    //
    // Expect
    // ------
    // - Agreement within 1e-9 relative.
    fn recursive_matches_pairwise_dense_bivariate() {
        let data = HawkesData::new(
            array![0.1, 0.5, 0.9, 2.0, 2.4],
            array![0, 1, 0, 1, 0],
        )
        .unwrap();
        let params = HawkesParams::new(
            array![0.4, 0.6],
            array![[0.3, 0.2], [0.1, 0.25]],
            1.3,
        )
        .unwrap();

        let recursive = log_likelihood(&data, &params, 3.0).unwrap();
        let pairwise = log_likelihood_pairwise(&data, &params, 3.0).unwrap();

        assert!(
            (recursive - pairwise).abs() <= 1e-9 * pairwise.abs().max(1.0),
            "recursive {recursive} vs pairwise {pairwise}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Agreement holds for a sparse excitation matrix (cross-excitation
    // only) where foreign events interleave between a process's own events,
    // the exact pattern that breaks an unconditional accumulator write-back.
    //
    // Given
    // -----
    // - K = 2 with A = [[0, 0.5], [0.4, 0]] and marks interleaved so each
    //   process fires with foreign events in between.
    //
    // Expect
    // ------
    // - Agreement within 1e-9 relative.
    fn recursive_matches_pairwise_sparse_cross_excitation() {
        let data = HawkesData::new(
            array![0.2, 0.6, 1.0, 1.5, 2.2, 2.9],
            array![0, 1, 1, 0, 1, 0],
        )
        .unwrap();
        let params = HawkesParams::new(
            array![0.5, 0.3],
            array![[0.0, 0.5], [0.4, 0.0]],
            0.8,
        )
        .unwrap();

        let recursive = log_likelihood(&data, &params, 4.0).unwrap();
        let pairwise = log_likelihood_pairwise(&data, &params, 4.0).unwrap();

        assert!(
            (recursive - pairwise).abs() <= 1e-9 * pairwise.abs().max(1.0),
            "recursive {recursive} vs pairwise {pairwise}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Agreement holds across three processes and through exact time ties.
    //
    // Given
    // -----
    // - K = 3 with a tie at t = 1.0 between two different marks.
    //
    // Expect
    // ------
    // - Agreement within 1e-9 relative.
    fn recursive_matches_pairwise_trivariate_with_ties() {
        let data = HawkesData::new(
            array![0.0, 1.0, 1.0, 1.7, 2.5, 3.1, 3.1],
            array![2, 0, 1, 2, 1, 0, 2],
        )
        .unwrap();
        let params = HawkesParams::new(
            array![0.3, 0.2, 0.4],
            array![[0.2, 0.1, 0.0], [0.0, 0.3, 0.1], [0.15, 0.0, 0.2]],
            2.0,
        )
        .unwrap();

        let recursive = log_likelihood(&data, &params, 5.0).unwrap();
        let pairwise = log_likelihood_pairwise(&data, &params, 5.0).unwrap();

        assert!(
            (recursive - pairwise).abs() <= 1e-9 * pairwise.abs().max(1.0),
            "recursive {recursive} vs pairwise {pairwise}"
        );
    }

    #[test]
    // Purpose
    // -------
    // A first event whose process has zero background rate is a domain
    // error (its intensity is exactly zero), not a silent -inf.
    //
    // Given
    // -----
    // - mu = [0.0], one event.
    //
    // Expect
    // ------
    // - `NonPositiveIntensity { index: 0, value: 0.0 }` from both entry
    //   points.
    fn zero_background_first_event_is_domain_error() {
        let data = HawkesData::new(array![1.0], array![0]).unwrap();
        let params = HawkesParams::new(array![0.0], array![[0.5]], 1.0).unwrap();

        let expected = HawkesError::NonPositiveIntensity { index: 0, value: 0.0 };
        assert_eq!(log_likelihood(&data, &params, 2.0).unwrap_err(), expected);
        assert_eq!(log_likelihood_pairwise(&data, &params, 2.0).unwrap_err(), expected);
    }

    #[test]
    // Purpose
    // -------
    // Validation is fail-fast and shared: empty data, out-of-range marks,
    // and a horizon before the last event are all rejected before any
    // computation.
    //
    // Given
    // -----
    // - An empty realization; marks reaching K; horizon 1.0 with an event
    //   at 2.0.
    //
    // Expect
    // ------
    // - `EmptySequence`, `MarkOutOfRange`, and `HorizonBeforeLastEvent`
    //   respectively.
    fn validation_rejects_bad_inputs_before_computation() {
        let params = univariate_poisson_params(1.0);

        let empty =
            HawkesData::new(ndarray::Array1::zeros(0), ndarray::Array1::from_vec(vec![])).unwrap();
        assert_eq!(
            log_likelihood(&empty, &params, 1.0).unwrap_err(),
            HawkesError::EmptySequence
        );

        let bad_mark = HawkesData::new(array![0.5], array![1]).unwrap();
        assert_eq!(
            log_likelihood(&bad_mark, &params, 1.0).unwrap_err(),
            HawkesError::MarkOutOfRange { index: 0, mark: 1, dim: 1 }
        );

        let late = HawkesData::new(array![2.0], array![0]).unwrap();
        assert_eq!(
            log_likelihood_pairwise(&late, &params, 1.0).unwrap_err(),
            HawkesError::HorizonBeforeLastEvent { horizon: 1.0, last: 2.0 }
        );
    }
}
