//! Scheduling run orchestration.
//!
//! Wires the pipeline together for one (semester, department) request:
//! resolve inputs through the domain source, build the shuffled demand
//! list and slot pool, run the greedy assignment, and commit the result
//! as an atomic timetable replacement.
//!
//! The pipeline is strictly one-directional and single-pass; the only
//! blocking operations are the two boundary calls (domain read,
//! timetable write), and a failure at either is fatal to the run.

use rand::Rng;
use tracing::{debug, info};

use crate::assign::AssignmentEngine;
use crate::config::SchedulingConfig;
use crate::demand::build_demands;
use crate::error::ScheduleError;
use crate::pool::SlotPool;
use crate::store::{DomainSource, TimetableStore};

/// Summary of a completed scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// Resolved semester identifier the timetable was committed under.
    pub semester_id: String,
    /// Lectures placed and committed.
    pub scheduled: usize,
    /// Demands that found no conflict-free unit.
    pub unplaced: usize,
}

impl ScheduleOutcome {
    /// Total lecture demands the run started with.
    pub fn demanded(&self) -> usize {
        self.scheduled + self.unplaced
    }

    /// Human-readable result line for the caller to relay.
    pub fn summary(&self) -> String {
        format!(
            "Successfully generated and saved {} clash-free lectures",
            self.scheduled
        )
    }
}

/// Timetable generation engine over a domain source and a store.
///
/// One synchronous call per (semester, department) request. Runs for
/// different semesters may proceed concurrently on separate engine
/// instances; runs targeting the same semester must be serialized by
/// the caller (the delete-then-insert commit is the only externally
/// consistent point, and two overlapping runs would race on it).
#[derive(Debug)]
pub struct TimetableEngine<S, T> {
    source: S,
    store: T,
}

impl<S: DomainSource, T: TimetableStore> TimetableEngine<S, T> {
    /// Creates an engine over the given boundaries.
    pub fn new(source: S, store: T) -> Self {
        Self { source, store }
    }

    /// Generates and commits a timetable with the default weekly grid
    /// and a thread-local random source.
    ///
    /// Repeated calls for the same input may produce different concrete
    /// assignments and unplaced counts; both the slot pool and the
    /// demand order are shuffled per run.
    pub fn generate_schedule(
        &mut self,
        semester_name: &str,
        department_name: &str,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        self.generate_schedule_with(
            semester_name,
            department_name,
            &SchedulingConfig::default(),
            &mut rand::rng(),
        )
    }

    /// Generates and commits a timetable with an explicit grid and
    /// random source.
    ///
    /// Injecting a seeded [`Rng`] makes the whole run reproducible;
    /// production callers normally stay on [`generate_schedule`].
    ///
    /// [`generate_schedule`]: TimetableEngine::generate_schedule
    pub fn generate_schedule_with<R: Rng>(
        &mut self,
        semester_name: &str,
        department_name: &str,
        config: &SchedulingConfig,
        rng: &mut R,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let semester_id = self.source.resolve_semester(semester_name)?;
        let courses = self.source.course_ids(department_name)?;
        let teachers = self.source.teacher_ids(department_name)?;
        let rooms = self.source.room_ids()?;

        debug!(
            semester = %semester_id,
            department = %department_name,
            courses = courses.len(),
            teachers = teachers.len(),
            rooms = rooms.len(),
            "loaded scheduling inputs"
        );

        let demands = build_demands(&courses, &teachers, department_name, rng)?;
        if !demands.is_empty() && rooms.is_empty() {
            return Err(ScheduleError::NoRooms);
        }

        let pool = SlotPool::generate(config, &rooms, rng);
        let result = AssignmentEngine::new().assign(pool, &demands, &semester_id);

        // Commit even when empty: a run always fully replaces the
        // semester's prior timetable.
        self.store.replace_timetable(&semester_id, &result.lectures)?;

        let outcome = ScheduleOutcome {
            semester_id,
            scheduled: result.scheduled_count(),
            unplaced: result.unplaced,
        };
        info!(
            semester = %outcome.semester_id,
            scheduled = outcome.scheduled,
            unplaced = outcome.unplaced,
            "timetable replaced"
        );
        Ok(outcome)
    }

    /// The domain source boundary.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The timetable store boundary.
    pub fn store(&self) -> &T {
        &self.store
    }

    /// Consumes the engine and returns its boundaries.
    pub fn into_parts(self) -> (S, T) {
        (self.source, self.store)
    }
}
