//! hawkes: multivariate exponential-kernel Hawkes process stack.
//!
//! Purpose
//! -------
//! Provide a cohesive layer for evaluating and simulating multivariate
//! Hawkes processes with exponentially decaying self/mutual excitation:
//! validated data and parameter containers, exact log-likelihood evaluation
//! via an O(N*K) recursion (with its O(N^2) pairwise oracle), conditional
//! intensity queries, and exact sampling via the branching (cluster)
//! representation. This is the surface consumers should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core numerics in [`core`]: event-sequence containers,
//!   parameter sets, validation helpers, per-call decay/compensator scratch
//!   state, the likelihood engine, and intensity queries.
//! - Expose the cluster simulator in the `simulate` submodule: offspring
//!   sampling, the generation loop with resource caps, and parallel
//!   multi-path fan-out.
//! - Centralize error types in [`errors`] (`HawkesError`, `ParamError`, and
//!   the `HawkesResult` / `ParamResult` aliases) so callers see a uniform
//!   error surface across the stack.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports in downstream crates.
//!
//! Invariants & assumptions
//! ------------------------
//! - Realizations are carried in validated [`HawkesData`] instances:
//!   finite, non-negative, non-decreasing times, with marks range-checked
//!   against the parameter dimension at each evaluation entry point.
//! - Parameters are carried in validated [`HawkesParams`] instances:
//!   mu >= 0 elementwise, A >= 0 and K x K, theta > 0. Subcriticality of
//!   the branching structure is a caller precondition for simulation,
//!   diagnosed via `HawkesParams::max_branching_ratio` and backstopped by
//!   [`SimulationLimits`].
//! - Both capabilities are synchronous, single-threaded, CPU-bound numeric
//!   computations with no I/O; a call runs to completion or fails. The only
//!   shared, potentially mutable resource is the random generator, which is
//!   always an explicit per-call (or per-worker) handle.
//! - Per-call scratch state is created fresh and discarded on return; there
//!   is no cross-call state anywhere in the stack.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout. `A[[j, k]]` is the influence of
//!   process j's events on process k's intensity; the kernel
//!   `A[[j, k]] * theta * exp(-theta dt)` integrates to `A[[j, k]]`, so an
//!   event of process j produces on average `A[[j, k]]` children of
//!   process k in the branching view.
//! - The stack performs no I/O and no logging; error conditions are
//!   surfaced as [`HawkesResult`] / [`ParamResult`] values carrying the
//!   offending index and value, and panics indicate programming errors.
//! - All numeric interfaces are double precision; the dimension K is
//!   inferred from the background vector and enforced everywhere else.
//!
//! Downstream usage
//! ----------------
//! - Typical evaluation flow:
//!   1. Construct [`HawkesParams`] and a [`HawkesData`] realization.
//!   2. Call [`log_likelihood`] (or the [`log_likelihood_pairwise`] oracle)
//!      with an observation horizon.
//! - Typical simulation flow:
//!   1. Construct [`HawkesParams`] and [`SimulationLimits`] (or use the
//!      defaults), plus a seeded `StdRng`.
//!   2. Call [`simulate()`] for one path or [`simulate_many`] for a
//!      parallel fan-out; feed results back into the likelihood if desired.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule; the recursive-vs-pairwise
//!   agreement tests in `core::likelihood` are the ground-truth check for
//!   the recursion, and `tests/integration_hawkes_pipeline.rs` exercises
//!   the simulate-then-evaluate composition end to end.
pub mod core;
pub mod errors;
pub mod simulate;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the everyday types and entry points most users need. More
// specialized items (validation helpers, scratch state) remain under their
// respective submodules.

pub use self::core::{
    HawkesData, HawkesEvent, HawkesParams, intensity_at, log_likelihood,
    log_likelihood_pairwise,
};

pub use self::errors::{HawkesError, HawkesResult, ParamError, ParamResult};

pub use self::simulate::{SimulationLimits, sample_offspring, simulate, simulate_many};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_pointprocess::hawkes::prelude::*;
//
// to import the main surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        HawkesData, HawkesError, HawkesEvent, HawkesParams, HawkesResult, ParamError,
        ParamResult, SimulationLimits, intensity_at, log_likelihood, log_likelihood_pairwise,
        sample_offspring, simulate, simulate_many,
    };
}
