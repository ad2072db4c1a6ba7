//! Resource unit model.
//!
//! A resource unit is the atomic bookable combination of a day, a time
//! slot, and a room. Units exist only inside one scheduling run: the
//! slot pool enumerates them, the assignment engine consumes them.

use serde::{Deserialize, Serialize};

use super::{Day, TimeSlot};

/// An atomic bookable (day, time slot, room) combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceUnit {
    /// Teaching day.
    pub day: Day,
    /// Lecture time slot.
    pub slot: TimeSlot,
    /// Room identifier.
    pub room_id: String,
}

impl ResourceUnit {
    /// Creates a new resource unit.
    pub fn new(day: Day, slot: TimeSlot, room_id: impl Into<String>) -> Self {
        Self {
            day,
            slot,
            room_id: room_id.into(),
        }
    }

    /// Conflict key: the (day, start) pair teachers and cohorts clash on.
    ///
    /// Rooms are deliberately absent: two lectures clash when they share
    /// a day and start time, regardless of where they meet.
    #[inline]
    pub fn clash_key(&self) -> (Day, u16) {
        (self.day, self.slot.start_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_clash_key() {
        let u = ResourceUnit::new(Day::Tuesday, TimeSlot::from_hm(10, 30, 12, 0), "R101");
        assert_eq!(u.clash_key(), (Day::Tuesday, 630));
        assert_eq!(u.room_id, "R101");
    }

    #[test]
    fn test_units_same_key_different_rooms() {
        let slot = TimeSlot::from_hm(9, 0, 10, 30);
        let a = ResourceUnit::new(Day::Monday, slot, "R101");
        let b = ResourceUnit::new(Day::Monday, slot, "R102");
        assert_ne!(a, b);
        assert_eq!(a.clash_key(), b.clash_key());
    }
}
