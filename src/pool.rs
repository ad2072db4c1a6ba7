//! Slot pool generation.
//!
//! Expands the configured weekly grid and the room list into the full
//! cross product of bookable resource units, then shuffles it once.
//! The shuffle is the first of the run's two randomization points: with
//! the pool in random order, "first compatible unit" assignment carries
//! no systematic bias toward early days or slots.
//!
//! No constraints are applied here; the pool is raw enumeration.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SchedulingConfig;
use crate::models::ResourceUnit;

/// The run-scoped pool of unconsumed resource units.
///
/// Units keep the order the shuffle gave them; consuming a unit removes
/// it permanently for the rest of the run.
#[derive(Debug, Clone)]
pub struct SlotPool {
    units: Vec<ResourceUnit>,
}

impl SlotPool {
    /// Generates the full `days x slots x rooms` pool in uniformly
    /// random order.
    pub fn generate<R: Rng>(config: &SchedulingConfig, rooms: &[String], rng: &mut R) -> Self {
        let mut units = Vec::with_capacity(config.unit_capacity(rooms.len()));
        for &day in &config.days {
            for &slot in &config.slots {
                for room_id in rooms {
                    units.push(ResourceUnit::new(day, slot, room_id.clone()));
                }
            }
        }
        units.shuffle(rng);
        Self { units }
    }

    /// Remaining units, in pool order.
    pub fn units(&self) -> &[ResourceUnit] {
        &self.units
    }

    /// Number of remaining units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the pool is exhausted.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Consumes and returns the unit at `index`.
    ///
    /// The relative order of the remaining units is preserved.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn consume(&mut self, index: usize) -> ResourceUnit {
        self.units.remove(index)
    }
}
