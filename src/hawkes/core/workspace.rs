//! Per-call scratch state for the recursive likelihood evaluation.
//!
//! Implements the decayed-excitation accumulators and the compensator used
//! by the O(N*K) log-likelihood recursion. Both types are created fresh for
//! every evaluation and discarded on return; nothing is shared across calls.
//!
//! ## Decay-state convention
//! For each process k the state holds:
//! - `phi[k]`: decayed weighted count of k's events, stored **as of k's own
//!   last event** (excluding that event's unit contribution), and
//! - `elapsed[k]`: time since k's last event, initialized to +inf so the
//!   decay factor `exp(-decay * elapsed[k])` is exactly 0 before k's first
//!   event.
//!
//! The decayed contribution of process k at the current event time is
//! `exp(-decay * elapsed[k]) * (1 + phi[k])`. The write-back of that value
//! into `phi[k]` happens **only when k itself fires** ([`DecayState::register`]);
//! between k's events the expression is evaluated read-only. Applying the
//! write-back at every event instead would compound the decay on older
//! contributions and add a unit term per foreign event, which diverges from
//! the pairwise sum the recursion must reproduce.
use crate::hawkes::errors::HawkesResult;
use crate::hawkes::core::validation::validate_intensity;
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Decayed-excitation accumulators for one likelihood evaluation.
///
/// Holds `phi[k]` and `elapsed[k]` per process (see the module docs for the
/// storage convention) plus the shared decay rate. All updates are O(K) per
/// event, which is what turns the naive O(N^2) history sum into the O(N*K)
/// recursion.
#[derive(Debug)]
pub struct DecayState {
    /// Decayed weighted count per process, as of that process's last event.
    phi: Array1<f64>,
    /// Time since each process's last event; +inf before the first one.
    elapsed: Array1<f64>,
    /// Exponential decay rate (theta).
    decay: f64,
}

impl DecayState {
    /// Fresh state for `dim` processes: `phi = 0`, `elapsed = +inf`.
    pub fn new(dim: usize, decay: f64) -> Self {
        DecayState {
            phi: Array1::zeros(dim),
            elapsed: Array1::from_elem(dim, f64::INFINITY),
            decay,
        }
    }

    /// Advance every elapsed-time register by the gap to the next event.
    ///
    /// +inf registers stay +inf, so processes that have not fired yet keep
    /// a zero decay factor.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    /// Decayed contribution of process k at the current time:
    /// `exp(-decay * elapsed[k]) * (1 + phi[k])`.
    ///
    /// Exactly 0 before k's first event (`exp(-inf) == 0`).
    pub fn decayed(&self, k: usize) -> f64 {
        (-self.decay * self.elapsed[k]).exp() * (1.0 + self.phi[k])
    }

    /// Excitation drive onto `target` from all processes:
    /// `sum_k excitation[[k, target]] * decayed(k)`.
    pub fn drive(&self, target: usize, excitation: &Array2<f64>) -> f64 {
        (0..self.phi.len()).map(|k| excitation[[k, target]] * self.decayed(k)).sum()
    }

    /// Record that process k fired at the current time: fold the decayed
    /// value back into `phi[k]` and reset its elapsed-time register.
    ///
    /// The event itself is not added here; it enters future evaluations via
    /// the `1 +` term once `elapsed[k]` has grown past zero.
    pub fn register(&mut self, k: usize) {
        self.phi[k] = self.decayed(k);
        self.elapsed[k] = 0.0;
    }
}

/// Compensator accumulator for one likelihood evaluation.
///
/// Collects, per emitting process j, the sum over j's events of
/// `1 - exp(-decay * (horizon - t_i))`; the integrated-intensity correction
/// is that vector dotted with the excitation row sums (`dot(A^T, F)`
/// summed). Every term lies in [0, 1), so the residuals and the correction
/// are non-negative and non-decreasing in the horizon.
#[derive(Debug)]
pub struct Compensator {
    /// Accumulated kernel mass per emitting process.
    residual: Array1<f64>,
    /// Exponential decay rate (theta).
    decay: f64,
    /// Observation horizon T.
    horizon: f64,
}

impl Compensator {
    /// Fresh accumulator for `dim` processes over `[0, horizon)`.
    pub fn new(dim: usize, decay: f64, horizon: f64) -> Self {
        Compensator { residual: Array1::zeros(dim), decay, horizon }
    }

    /// Account for an event of process `mark` at `time <= horizon`.
    pub fn observe(&mut self, mark: usize, time: f64) {
        self.residual[mark] += 1.0 - (-self.decay * (self.horizon - time)).exp();
    }

    /// Integrated-excitation correction: `sum_j (sum_k A[j, k]) * F[j]`.
    pub fn correction(&self, excitation: &Array2<f64>) -> f64 {
        excitation.sum_axis(Axis(1)).dot(&self.residual)
    }

    /// Per-process accumulated kernel mass (diagnostic / test hook).
    pub fn residual(&self) -> ArrayView1<'_, f64> {
        self.residual.view()
    }
}

/// Evaluate one event's log-intensity term for the likelihood sum.
///
/// `lambda = background[mark] + decay * drive`, guarded so a non-positive
/// intensity surfaces as a typed domain error instead of a `-inf` log.
pub fn log_intensity_term(
    index: usize, background: f64, decay: f64, drive: f64,
) -> HawkesResult<f64> {
    let lambda = validate_intensity(index, background + decay * drive)?;
    Ok(lambda.ln())
}
