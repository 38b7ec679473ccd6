//! Conditional-intensity queries at arbitrary times.
//!
//! Complements the likelihood engine with the decayed-history intensity
//! lookup: given a validated realization and parameters, evaluate the
//! intensity vector at any query time. The intensity is taken
//! left-continuous, so only events **strictly before** the query time
//! contribute.
use crate::hawkes::core::{
    data::HawkesData,
    params::HawkesParams,
    validation::{validate_marks, validate_query_time},
};
use crate::hawkes::errors::HawkesResult;
use ndarray::Array1;

/// Evaluate the conditional intensity vector at `time`.
///
/// For every process k:
///
/// `lambda_k(time) = mu[k] + theta * sum_{t_i < time} A[c_i, k] * exp(-theta (time - t_i))`
///
/// # Errors
/// - `HawkesError::InvalidTime { value }` if `time` is NaN, ±∞, or < 0.
/// - `HawkesError::MarkOutOfRange { .. }` if the realization's marks exceed
///   the parameter dimension.
///
/// # Notes
/// - O(N*K) over the history before `time`; an empty history returns the
///   background vector.
/// - Events at exactly `time` are excluded (left-continuous convention).
pub fn intensity_at(
    data: &HawkesData, params: &HawkesParams, time: f64,
) -> HawkesResult<Array1<f64>> {
    validate_query_time(time)?;
    validate_marks(data.marks.view(), params.dim())?;

    let theta = params.decay;
    let mut lambda = params.background.clone();
    for (&event_time, &mark) in data.times.iter().zip(data.marks.iter()) {
        if event_time >= time {
            break;
        }
        let weight = theta * (-theta * (time - event_time)).exp();
        lambda.scaled_add(weight, &params.excitation.row(mark));
    }
    Ok(lambda)
}
