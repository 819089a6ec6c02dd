//! Greedy placement, objective evaluation, and the solve pipeline.
//!
//! # Algorithm
//!
//! `GreedyAacScheduler` processes the least flexible jobs first and commits
//! each to the interval whose summed excess over capacity is smallest. It
//! never backtracks, so it gives fast baseline schedules rather than
//! optimal ones.
//!
//! # Objective
//!
//! `evaluate` reports the peak excess of load over capacity, floored at
//! zero. `ProfileKpi` adds area-above-curve and overload statistics.

mod greedy;
mod objective;
mod placer;

pub use greedy::{solve, AacParams, AacRequest, GreedyAacScheduler};
pub use objective::{evaluate, ProfileKpi};
pub use placer::{place, place_detailed};
