//! Domain source and timetable store boundaries.
//!
//! The engine reads its input entities through [`DomainSource`] and
//! commits results through [`TimetableStore`]; both are narrow trait
//! seams so callers can back them with a relational database, a service
//! client, or the bundled [`MemoryStore`]. The engine performs no I/O
//! of its own and never retries a failed boundary call.

use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::models::ScheduledLecture;

/// Read boundary: resolves and lists the input entities for a run.
pub trait DomainSource {
    /// Course identifiers belonging to a department.
    fn course_ids(&self, department: &str) -> Result<Vec<String>, ScheduleError>;

    /// Teacher identifiers eligible within a department.
    fn teacher_ids(&self, department: &str) -> Result<Vec<String>, ScheduleError>;

    /// All room identifiers.
    ///
    /// Rooms are institution-global, not department-scoped; every run
    /// draws from the same room list.
    fn room_ids(&self) -> Result<Vec<String>, ScheduleError>;

    /// Resolves a human-readable semester name to its identifier.
    fn resolve_semester(&self, name: &str) -> Result<String, ScheduleError>;
}

/// Write boundary: atomic full replacement of a semester's timetable.
pub trait TimetableStore {
    /// Replaces the semester's timetable with `lectures` in one atomic
    /// unit: delete everything for the semester, then bulk-insert.
    ///
    /// Called even when `lectures` is empty — an empty run still clears
    /// the prior timetable (idempotent replacement, not a no-op). On
    /// failure the prior timetable must remain fully intact; a mixed
    /// state is never acceptable.
    fn replace_timetable(
        &mut self,
        semester_id: &str,
        lectures: &[ScheduledLecture],
    ) -> Result<(), ScheduleError>;
}

/// In-memory domain source and timetable store.
///
/// Backs both boundaries for tests and embedded use. Departments map to
/// course and teacher lists, semesters map names to identifiers, and
/// committed timetables are kept per semester.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    courses: HashMap<String, Vec<String>>,
    teachers: HashMap<String, Vec<String>>,
    rooms: Vec<String>,
    semesters: HashMap<String, String>,
    timetable: HashMap<String, Vec<ScheduledLecture>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a department with its courses and teachers.
    pub fn with_department(
        mut self,
        name: impl Into<String>,
        courses: Vec<String>,
        teachers: Vec<String>,
    ) -> Self {
        let name = name.into();
        self.courses.insert(name.clone(), courses);
        self.teachers.insert(name, teachers);
        self
    }

    /// Sets the global room list.
    pub fn with_rooms(mut self, rooms: Vec<String>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Registers a semester name and its identifier.
    pub fn with_semester(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.semesters.insert(name.into(), id.into());
        self
    }

    /// Committed lectures for a semester (empty if none).
    pub fn lectures_for(&self, semester_id: &str) -> &[ScheduledLecture] {
        self.timetable
            .get(semester_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl DomainSource for MemoryStore {
    fn course_ids(&self, department: &str) -> Result<Vec<String>, ScheduleError> {
        self.courses
            .get(department)
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownDepartment(department.to_string()))
    }

    fn teacher_ids(&self, department: &str) -> Result<Vec<String>, ScheduleError> {
        self.teachers
            .get(department)
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownDepartment(department.to_string()))
    }

    fn room_ids(&self) -> Result<Vec<String>, ScheduleError> {
        Ok(self.rooms.clone())
    }

    fn resolve_semester(&self, name: &str) -> Result<String, ScheduleError> {
        self.semesters
            .get(name)
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownSemester(name.to_string()))
    }
}

impl TimetableStore for MemoryStore {
    fn replace_timetable(
        &mut self,
        semester_id: &str,
        lectures: &[ScheduledLecture],
    ) -> Result<(), ScheduleError> {
        // Single map write: delete-then-insert is inherently atomic here.
        self.timetable
            .insert(semester_id.to_string(), lectures.to_vec());
        Ok(())
    }
}
