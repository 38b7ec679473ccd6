//! core: shared Hawkes data, parameters, validation, and the likelihood
//! engine.
//!
//! Purpose
//! -------
//! Collect the core building blocks for multivariate exponential-kernel
//! Hawkes models: validated event-sequence and parameter containers, shared
//! validation helpers, the per-call decay/compensator scratch state, the
//! O(N*K) log-likelihood recursion with its O(N^2) pairwise oracle, and
//! conditional-intensity queries. The simulation layer builds on top of
//! these primitives but is otherwise independent of the likelihood engine:
//! the two halves never call each other.
//!
//! Key behaviors
//! -------------
//! - Define validated containers ([`HawkesData`], [`HawkesEvent`],
//!   [`HawkesParams`]) so downstream numerics never re-validate.
//! - Implement exact likelihood evaluation ([`log_likelihood`]) with a
//!   public brute-force reference ([`log_likelihood_pairwise`]) that serves
//!   as its correctness oracle.
//! - Expose decayed-history intensity lookups ([`intensity_at`]).
//! - Centralize fail-fast validation routines in [`validation`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Realizations are time-ordered with finite, non-negative times; marks
//!   are range-checked against the parameter dimension at every evaluation
//!   entry point.
//! - Parameters satisfy mu >= 0, A >= 0 (K x K), theta > 0.
//! - Scratch state ([`workspace`]) is created fresh per call and never
//!   shared; every public function here is synchronous, CPU-bound, and free
//!   of I/O and logging.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; `A[[j, k]]` is the influence of process j on
//!   process k; the kernel `A[[j, k]] * theta * exp(-theta dt)` integrates
//!   to `A[[j, k]]`.
//! - Errors are surfaced via `HawkesResult` / `ParamResult`; panics are
//!   reserved for programming errors.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own invariants; the
//!   recursive-vs-pairwise agreement tests in [`likelihood`] are the
//!   ground-truth check for the recursion's correctness.
pub mod data;
pub mod intensity;
pub mod likelihood;
pub mod params;
pub mod validation;
pub mod workspace;

pub use self::data::{HawkesData, HawkesEvent};
pub use self::intensity::intensity_at;
pub use self::likelihood::{log_likelihood, log_likelihood_pairwise};
pub use self::params::HawkesParams;
