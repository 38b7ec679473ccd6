//! simulate: exact branching simulation of the Hawkes model.
//!
//! Purpose
//! -------
//! Bundle the cluster-representation sampler: the per-parent offspring draw
//! ([`sample_offspring`]), the generation loop that unions offspring into a
//! sorted realization ([`simulate`], [`simulate_many`]), and the validated
//! resource caps ([`SimulationLimits`]) that bound the loop under unstable
//! parameters.
//!
//! Conventions
//! -----------
//! - All randomness flows through explicit, caller-owned `StdRng` handles;
//!   there is no process-global generator state anywhere in the stack.
//! - Simulation and likelihood evaluation never call each other; feeding a
//!   simulated realization into `core::log_likelihood` is a caller-side
//!   composition (exercised by the integration tests).
pub mod cluster;
pub mod limits;
pub mod offspring;

pub use self::cluster::{simulate, simulate_many};
pub use self::limits::SimulationLimits;
pub use self::offspring::sample_offspring;
