//! rust_pointprocess: evaluation and exact simulation of multivariate
//! Hawkes processes with exponential kernels.
//!
//! Purpose
//! -------
//! Serve as the crate root for the point-process stack. The crate offers
//! two independent capabilities:
//! - exact log-likelihood evaluation of an observed marked event sequence
//!   under given parameters, via an O(N*K) recursion that avoids the
//!   quadratic history rescan, and
//! - exact sampling from the model via the branching (cluster)
//!   representation, with explicit seedable generators and resource caps.
//!
//! Key behaviors
//! -------------
//! - Re-export the [`hawkes`] module as the public crate surface; consumers
//!   import from `rust_pointprocess::hawkes` (or its `prelude`).
//! - Keep the entire boundary in-memory: validated containers in, scalar
//!   log-likelihoods or sorted realizations out. No files, network, or CLI.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work lives in the inner modules; every public
//!   entry point validates its inputs before computing and reports failures
//!   through structured error types rather than panicking.
//! - Parameter estimation is out of scope: the engine evaluates a
//!   likelihood, it does not optimize one.
//!
//! Downstream usage
//! ----------------
//! - Evaluation: build `HawkesParams` and `HawkesData`, then call
//!   `hawkes::log_likelihood` with an observation horizon.
//! - Simulation: build `HawkesParams` and `SimulationLimits`, seed a
//!   `StdRng`, and call `hawkes::simulate` or `hawkes::simulate_many`.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules; the
//!   simulate-then-evaluate pipeline is covered by the integration tests in
//!   `tests/`.

pub mod hawkes;
