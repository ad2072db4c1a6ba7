//! Weekly time grid: teaching days and lecture time slots.
//!
//! # Time Model
//! Slot boundaries are minutes since midnight on a teaching day.
//! A slot is a half-open interval [start, end). The week itself is a
//! fixed Monday-to-Friday cycle; dates never enter the model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day of the week.
///
/// The ordering (`Monday < ... < Friday`) matches the weekly cycle and
/// is relied on for stable reporting, not for scheduling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days, in weekly order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// English day name (e.g., "Monday").
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lecture time slot within a day.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// Slot end (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl TimeSlot {
    /// Creates a new time slot from minute offsets.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Creates a time slot from hour/minute pairs.
    pub fn from_hm(start_h: u16, start_m: u16, end_h: u16, end_m: u16) -> Self {
        Self::new(start_h * 60 + start_m, end_h * 60 + end_m)
    }

    /// Slot duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min - self.start_min
    }

    /// Whether two slots overlap in time (ignoring days).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Renders a minute offset as "HH:MM".
fn fmt_min(f: &mut fmt::Formatter<'_>, min: u16) -> fmt::Result {
    write!(f, "{:02}:{:02}", min / 60, min % 60)
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_min(f, self.start_min)?;
        f.write_str("-")?;
        fmt_min(f, self.end_min)
    }
}
