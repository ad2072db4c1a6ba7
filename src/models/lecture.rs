//! Lecture demand and scheduled lecture models.
//!
//! A `LectureDemand` is one required weekly meeting of a course, already
//! bound to a teacher. A `ScheduledLecture` is the output row: a demand
//! placed on a concrete (day, slot, room) for a semester. Both carry
//! plain string identifiers; resolution from human-readable names is the
//! domain source's job.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Day;

/// The student cohort attending a department's lectures in a semester.
///
/// The engine models exactly one undivided cohort per department run.
/// Keeping the identifier explicit (rather than leaving cohorts implied)
/// lets multi-cohort scheduling extend the model without a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CohortId(pub String);

impl CohortId {
    /// Creates a cohort identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Default for CohortId {
    /// The single implicit department cohort.
    fn default() -> Self {
        Self("main".to_string())
    }
}

impl fmt::Display for CohortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One required lecture occurrence for a course, bound to one teacher.
///
/// Every course produces a fixed number of demands per week, all bound
/// to the same teacher for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureDemand {
    /// Course identifier.
    pub course_id: String,
    /// Teacher identifier, fixed per course for the run.
    pub teacher_id: String,
}

impl LectureDemand {
    /// Creates a new lecture demand.
    pub fn new(course_id: impl Into<String>, teacher_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            teacher_id: teacher_id.into(),
        }
    }
}

/// A lecture placed on a concrete day, time, and room for a semester.
///
/// Owned by the run that produced it; becomes durable only once the
/// timetable store commits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledLecture {
    /// Course identifier.
    pub course_id: String,
    /// Teacher identifier.
    pub teacher_id: String,
    /// Room identifier.
    pub room_id: String,
    /// Semester identifier.
    pub semester_id: String,
    /// Attending cohort.
    pub cohort_id: CohortId,
    /// Teaching day.
    pub day: Day,
    /// Start time (minutes since midnight, inclusive).
    pub start_min: u16,
    /// End time (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl ScheduledLecture {
    /// Conflict key: the (day, start) pair the clash invariants range over.
    #[inline]
    pub fn clash_key(&self) -> (Day, u16) {
        (self.day, self.start_min)
    }

    /// Lecture duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min - self.start_min
    }
}
