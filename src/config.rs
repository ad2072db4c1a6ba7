//! Scheduling configuration.
//!
//! The weekly grid (teaching days and the daily slot template) is
//! explicit run input rather than process-wide state, so institutions
//! with different teaching hours configure their own grid and tests can
//! shrink it to a single slot.

use serde::{Deserialize, Serialize};

use crate::models::{Day, TimeSlot};

/// Weekly grid configuration for a scheduling run.
///
/// Defaults to the standard template: Monday through Friday, five
/// 90-minute slots from 09:00 to 16:30.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Teaching days, in weekly order.
    pub days: Vec<Day>,
    /// Daily slot template, in chronological order.
    pub slots: Vec<TimeSlot>,
}

impl SchedulingConfig {
    /// Creates a configuration with explicit days and slots.
    pub fn new(days: Vec<Day>, slots: Vec<TimeSlot>) -> Self {
        Self { days, slots }
    }

    /// Replaces the teaching days.
    pub fn with_days(mut self, days: Vec<Day>) -> Self {
        self.days = days;
        self
    }

    /// Replaces the daily slot template.
    pub fn with_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.slots = slots;
        self
    }

    /// Number of (day, slot) combinations per room.
    pub fn grid_size(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    /// Total resource units available given a room count.
    pub fn unit_capacity(&self, room_count: usize) -> usize {
        self.grid_size() * room_count
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            days: Day::ALL.to_vec(),
            slots: vec![
                TimeSlot::from_hm(9, 0, 10, 30),
                TimeSlot::from_hm(10, 30, 12, 0),
                TimeSlot::from_hm(12, 0, 13, 30),
                TimeSlot::from_hm(13, 30, 15, 0),
                TimeSlot::from_hm(15, 0, 16, 30),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let config = SchedulingConfig::default();
        assert_eq!(config.days.len(), 5);
        assert_eq!(config.slots.len(), 5);
        assert_eq!(config.grid_size(), 25);
        assert_eq!(config.unit_capacity(3), 75);
        assert_eq!(config.slots[0], TimeSlot::from_hm(9, 0, 10, 30));
        assert_eq!(config.slots[4], TimeSlot::from_hm(15, 0, 16, 30));
    }

    #[test]
    fn test_default_slots_contiguous() {
        let config = SchedulingConfig::default();
        for pair in config.slots.windows(2) {
            assert_eq!(pair[0].end_min, pair[1].start_min);
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn test_custom_grid() {
        let config = SchedulingConfig::default()
            .with_days(vec![Day::Monday])
            .with_slots(vec![TimeSlot::from_hm(9, 0, 10, 30)]);
        assert_eq!(config.grid_size(), 1);
        assert_eq!(config.unit_capacity(0), 0);
    }
}
