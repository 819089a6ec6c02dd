//! Greedy heuristic for Area-Above-Curve (AAC) scheduling.
//!
//! Given a pool of jobs (release, deadline, length, height) and a
//! time-varying capacity profile, selects a fixed-size batch from a window
//! and assigns each job one execution interval so that scheduled load
//! stays as far under capacity as the greedy rule allows. The reported
//! objective is the peak excess of load over capacity.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `SelectedJob`, `Interval`,
//!   `CapacityProfile`, `HeightProfile`, `Placement`, `AacSchedule`
//! - **`selection`**: Window filtering, batch sampling, flexibility ordering
//! - **`intervals`**: Feasible start-time enumeration per job
//! - **`scheduler`**: Greedy placement, objective evaluation, `solve`
//! - **`validation`**: Precondition checks on inputs
//! - **`error`**: `AacError` taxonomy
//! - **`generator`**: Seeded synthetic job pools for benchmarking
//!
//! # Pipeline
//!
//! ```text
//! pool ─► select ─► enumerate_intervals ─► place ─► evaluate ─► objective
//! ```
//!
//! The pipeline is synchronous and deterministic. Each run allocates its
//! own height profile; read-only inputs may be shared across threads.

pub mod error;
pub mod generator;
pub mod intervals;
pub mod models;
pub mod scheduler;
pub mod selection;
pub mod validation;

pub use error::{AacError, AacResult};
pub use scheduler::solve;
