//! Clash-free university timetable generation.
//!
//! Given a department's courses, teachers, and the institution's rooms
//! for a semester, produces an assignment of lectures to
//! (day, time slot, room) combinations such that no teacher and no
//! student cohort is double-booked, and commits the result as an atomic
//! replacement of the semester's timetable.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `TimeSlot`, `ResourceUnit`,
//!   `LectureDemand`, `ScheduledLecture`, `CohortId`
//! - **`config`**: The weekly grid (`SchedulingConfig`)
//! - **`pool`**: Slot pool generation (`days x slots x rooms`, shuffled)
//! - **`demand`**: Course-to-lecture-demand expansion with random
//!   teacher binding
//! - **`assign`**: The greedy single-pass assignment engine and its
//!   conflict ledger
//! - **`store`**: Domain source and timetable store boundaries, plus an
//!   in-memory implementation
//! - **`engine`**: Run orchestration (`TimetableEngine`)
//! - **`error`**: The run-level error taxonomy
//!
//! # Algorithm
//!
//! Best-effort randomized greedy assignment: both the slot pool and the
//! demand list are shuffled per run, then each demand binds to the first
//! unit whose (day, start) is free for its teacher and for the cohort.
//! Placements are clash-free by construction; demands that find no free
//! unit are reported as a count, not an error. The engine is
//! intentionally non-deterministic across runs — inject a seeded random
//! source through `generate_schedule_with` when reproducibility matters.
//!
//! # Example
//!
//! ```
//! use timetable_engine::engine::TimetableEngine;
//! use timetable_engine::store::MemoryStore;
//!
//! let store = MemoryStore::new()
//!     .with_semester("Fall 2025", "SEM1")
//!     .with_rooms(vec!["R101".into(), "R102".into()])
//!     .with_department("Physics", vec!["PHY101".into()], vec!["T1".into()]);
//!
//! let mut engine = TimetableEngine::new(store.clone(), store);
//! let outcome = engine.generate_schedule("Fall 2025", "Physics").unwrap();
//!
//! // One course, two weekly lectures, ample free units: both placed.
//! assert_eq!(outcome.scheduled, 2);
//! assert_eq!(
//!     outcome.summary(),
//!     "Successfully generated and saved 2 clash-free lectures"
//! );
//! ```

pub mod assign;
pub mod config;
pub mod demand;
pub mod engine;
pub mod error;
pub mod models;
pub mod pool;
pub mod store;
