//! Offspring sampling for the branching (cluster) representation.
//!
//! Given one parent event, draw its immediate children across all target
//! processes: a Poisson(`influence[k]`) count per process k, each child at
//! an exponential offset from the parent with rate `decay`, truncated to
//! the observation window. This is the leaf of the cluster simulator and
//! the only place besides immigrant seeding that consumes entropy.
//!
//! The exponential offsets are drawn by inversion, `-ln(1 - U) / decay`
//! with U uniform on `[0, 1)`, so `1 - U` lies in `(0, 1]` and the
//! logarithm is always finite.
use crate::hawkes::core::data::HawkesEvent;
use crate::hawkes::errors::HawkesResult;
use ndarray::ArrayView1;
use rand::Rng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use statrs::distribution::Poisson;

/// Draw one parent's immediate children across all target processes.
///
/// Parameters
/// ----------
/// - `parent_time`: time of the parent event; children are offset forward
///   from it.
/// - `influence`: the parent process's excitation row `A[parent_mark, ..]`;
///   entry k is the expected number of children of process k. Zero entries
///   draw nothing.
/// - `decay`: exponential kernel rate (> 0, upheld by the validated
///   parameter set every caller draws this from).
/// - `horizon`: children at or beyond it are discarded.
/// - `rng`: caller-owned generator; the only state this function touches.
///
/// Returns
/// -------
/// The surviving children in draw order (per-process, then per-draw), which
/// is a deterministic function of the generator stream. Empty if no draws
/// survive.
///
/// # Errors
/// - `HawkesError::InvalidPoissonRate` if an influence entry is positive
///   but not a valid Poisson mean (non-finite); finite non-negative rows
///   from a validated parameter set never trigger this.
pub fn sample_offspring(
    parent_time: f64, influence: ArrayView1<f64>, decay: f64, horizon: f64, rng: &mut StdRng,
) -> HawkesResult<Vec<HawkesEvent>> {
    let mut children = Vec::new();
    for (mark, &mean) in influence.iter().enumerate() {
        if mean <= 0.0 {
            continue;
        }
        let count = Poisson::new(mean)?.sample(rng) as usize;
        for _ in 0..count {
            let u: f64 = rng.gen();
            let offset = -(1.0 - u).ln() / decay;
            let time = parent_time + offset;
            if time < horizon {
                children.push(HawkesEvent { time, mark });
            }
        }
    }
    Ok(children)
}
