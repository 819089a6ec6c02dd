//! Time-indexed capacity and load profiles.
//!
//! Both profiles hold one value per step of the horizon `[0, len)`.
//! `CapacityProfile` is read-only input; `HeightProfile` is the schedule
//! state, where cells only ever grow as jobs are committed.

use serde::{Deserialize, Serialize};

use super::Interval;

/// Available resource capacity per time step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityProfile {
    values: Vec<f64>,
}

impl CapacityProfile {
    /// Creates a profile from per-step capacities.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Creates a flat profile.
    pub fn constant(len: usize, capacity: f64) -> Self {
        Self {
            values: vec![capacity; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Capacity at step `t`, if inside the horizon.
    #[inline]
    pub fn get(&self, t: usize) -> Option<f64> {
        self.values.get(t).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for CapacityProfile {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Cumulative scheduled height per time step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeightProfile {
    values: Vec<f64>,
}

impl HeightProfile {
    /// Creates an all-zero profile over `len` steps.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Load at step `t`, if inside the horizon.
    #[inline]
    pub fn get(&self, t: usize) -> Option<f64> {
        self.values.get(t).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Summed excess `load + height - capacity` over every step of `interval`.
    ///
    /// Negative terms are kept: spare capacity on one step offsets overload
    /// on another. Caller guarantees `interval` lies inside both profiles.
    pub(crate) fn excess_sum(
        &self,
        interval: Interval,
        height: f64,
        capacity: &CapacityProfile,
    ) -> f64 {
        let range = interval.start as usize..interval.end as usize;
        self.values[range.clone()]
            .iter()
            .zip(&capacity.as_slice()[range])
            .map(|(&load, &cap)| load + height - cap)
            .sum()
    }

    /// Adds `height` to every step of `interval`.
    ///
    /// Caller guarantees `interval` lies inside the profile.
    pub(crate) fn commit(&mut self, interval: Interval, height: f64) {
        for cell in &mut self.values[interval.start as usize..interval.end as usize] {
            *cell += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_constant() {
        let cap = CapacityProfile::constant(4, 2.0);
        assert_eq!(cap.len(), 4);
        assert_eq!(cap.get(3), Some(2.0));
        assert_eq!(cap.get(4), None);
    }

    #[test]
    fn test_height_zeros() {
        let h = HeightProfile::zeros(3);
        assert_eq!(h.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_commit_adds_over_interval() {
        let mut h = HeightProfile::zeros(5);
        h.commit(Interval::new(1, 3), 2.0);
        h.commit(Interval::new(2, 5), 1.5);
        assert_eq!(h.as_slice(), &[0.0, 2.0, 3.5, 1.5, 1.5]);
    }

    #[test]
    fn test_excess_sum_keeps_negative_terms() {
        let mut h = HeightProfile::zeros(4);
        h.commit(Interval::new(0, 1), 3.0);
        let cap = CapacityProfile::new(vec![2.0, 2.0, 5.0, 2.0]);
        // step 0: 3+1-2 = 2, step 1: 0+1-2 = -1, step 2: 0+1-5 = -4
        let score = h.excess_sum(Interval::new(0, 3), 1.0, &cap);
        assert!((score - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_profile_serde_transparent() {
        let cap: CapacityProfile = serde_json::from_str("[1.0, 2.5]").unwrap();
        assert_eq!(cap.as_slice(), &[1.0, 2.5]);
    }
}
