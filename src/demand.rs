//! Lecture demand building.
//!
//! Expands the department's courses into the run's lecture demands:
//! each course gets one uniformly random teacher, fixed for the whole
//! run, and contributes [`LECTURES_PER_COURSE`] demands bound to that
//! teacher. The demand list is then shuffled independently of the slot
//! pool — the second of the run's two randomization points — so the
//! order in which lectures compete for scarce slots is also random.
//! Which lectures end up unplaced under scarcity varies run to run;
//! that variability is part of the best-effort contract.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ScheduleError;
use crate::models::LectureDemand;

/// Weekly lecture occurrences per course.
pub const LECTURES_PER_COURSE: usize = 2;

/// Builds the shuffled demand list for a department's courses.
///
/// A course never has two different teachers within one run: the
/// teacher is drawn once per course and shared by all of its demands.
///
/// # Errors
/// Returns [`ScheduleError::NoTeachers`] when courses exist but the
/// teacher pool is empty. An empty course list is not an error and
/// yields an empty demand list.
pub fn build_demands<R: Rng>(
    courses: &[String],
    teachers: &[String],
    department: &str,
    rng: &mut R,
) -> Result<Vec<LectureDemand>, ScheduleError> {
    if courses.is_empty() {
        return Ok(Vec::new());
    }
    if teachers.is_empty() {
        return Err(ScheduleError::NoTeachers(department.to_string()));
    }

    let mut demands = Vec::with_capacity(courses.len() * LECTURES_PER_COURSE);
    for course_id in courses {
        let teacher_id = teachers[rng.random_range(0..teachers.len())].as_str();
        for _ in 0..LECTURES_PER_COURSE {
            demands.push(LectureDemand::new(course_id.as_str(), teacher_id));
        }
    }

    demands.shuffle(rng);
    Ok(demands)
}
