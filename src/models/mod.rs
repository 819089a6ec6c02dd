//! AAC domain models.
//!
//! Provides the data types for a single-resource, capacity-profile
//! scheduling problem and its greedy solution.
//!
//! | Type | Role |
//! |------|------|
//! | `Job` | Pool entry: release, deadline, length, height |
//! | `SelectedJob` | Job accepted into the batch, with id and flexibility |
//! | `Interval` | Half-open execution slot on the normalized horizon |
//! | `CapacityProfile` | Available capacity per step (read-only) |
//! | `HeightProfile` | Scheduled load per step (grows as jobs commit) |
//! | `AacSchedule` | Placements, final load, objective |

mod interval;
mod job;
mod profile;
mod schedule;

pub use interval::Interval;
pub use job::{Job, SelectedJob};
pub use profile::{CapacityProfile, HeightProfile};
pub use schedule::{AacSchedule, Placement};
