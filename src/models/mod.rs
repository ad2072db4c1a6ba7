//! Timetabling domain models.
//!
//! Core data types for one scheduling run: the weekly time grid,
//! bookable resource units, lecture demands, and the scheduled-lecture
//! output rows. Everything here is a plain value; identifiers are
//! strings already resolved by the domain source.

mod lecture;
mod time;
mod unit;

pub use lecture::{CohortId, LectureDemand, ScheduledLecture};
pub use time::{Day, TimeSlot};
pub use unit::ResourceUnit;
