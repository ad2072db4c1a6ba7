//! Error taxonomy for scheduling runs.
//!
//! Unresolved inputs and store failures are errors; a scheduling
//! shortfall (some demands left unplaced) is not. Shortfalls travel as
//! data in [`ScheduleOutcome`](crate::engine::ScheduleOutcome) so the
//! caller decides how to present them.

use thiserror::Error;

/// A failure that aborts a scheduling run before or during commit.
///
/// The engine never retries; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The semester name did not resolve to a known semester.
    #[error("unknown semester '{0}'")]
    UnknownSemester(String),

    /// The department name did not resolve to a known department.
    #[error("unknown department '{0}'")]
    UnknownDepartment(String),

    /// The department has courses but no eligible teachers.
    #[error("department '{0}' has no eligible teachers")]
    NoTeachers(String),

    /// Lectures are demanded but no rooms exist to host them.
    #[error("no rooms available for scheduling")]
    NoRooms,

    /// The timetable store rejected the read or the atomic replacement.
    ///
    /// When this surfaces during commit, the store guarantees the prior
    /// timetable is still intact (replacement is all-or-nothing).
    #[error("timetable store failure: {0}")]
    Store(String),
}
