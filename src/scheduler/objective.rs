//! Objective value and profile quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Peak excess (objective) | max(0, max_t(height[t] - capacity[t])) |
//! | Peak step | First step attaining the peak excess |
//! | Area above curve | Sum of max(0, height[t] - capacity[t]) |
//! | Overloaded steps | Count of steps with height above capacity |
//! | Total load | Sum of height[t] |

use serde::{Deserialize, Serialize};

use crate::error::{AacError, AacResult};
use crate::models::{CapacityProfile, HeightProfile};
use crate::validation;

/// Peak excess of scheduled height over capacity, floored at zero.
///
/// # Errors
/// [`AacError::Precondition`] if the profiles differ in length.
pub fn evaluate(heights: &HeightProfile, capacity: &CapacityProfile) -> AacResult<f64> {
    validation::check_profiles(heights, capacity).map_err(AacError::precondition)?;

    Ok(heights
        .as_slice()
        .iter()
        .zip(capacity.as_slice())
        .map(|(&h, &c)| h - c)
        .fold(0.0, f64::max))
}

/// Load-versus-capacity indicators for a finished schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileKpi {
    /// Objective: peak excess, floored at zero.
    pub peak_excess: f64,
    /// First step where the peak excess occurs. `None` if nothing exceeds capacity.
    pub peak_step: Option<usize>,
    /// Area above the capacity curve.
    pub area_above_curve: f64,
    /// Steps where load exceeds capacity.
    pub overloaded_steps: usize,
    /// Total scheduled load over the horizon.
    pub total_load: f64,
}

impl ProfileKpi {
    /// Computes KPIs from a final height profile and its capacity profile.
    pub fn calculate(heights: &HeightProfile, capacity: &CapacityProfile) -> AacResult<Self> {
        validation::check_profiles(heights, capacity).map_err(AacError::precondition)?;

        let mut peak_excess = 0.0;
        let mut peak_step = None;
        let mut area_above_curve = 0.0;
        let mut overloaded_steps = 0;

        for (t, (&h, &c)) in heights
            .as_slice()
            .iter()
            .zip(capacity.as_slice())
            .enumerate()
        {
            let excess = h - c;
            if excess > 0.0 {
                area_above_curve += excess;
                overloaded_steps += 1;
                if excess > peak_excess {
                    peak_excess = excess;
                    peak_step = Some(t);
                }
            }
        }

        Ok(Self {
            peak_excess,
            peak_step,
            area_above_curve,
            overloaded_steps,
            total_load: heights.as_slice().iter().sum(),
        })
    }

    /// Whether the schedule stays at or under capacity everywhere.
    pub fn within_capacity(&self) -> bool {
        self.overloaded_steps == 0
    }
}
