//! # gradebook
//!
//! Keeps one student's academic record: a validated name, a fixed list of
//! subjects read from a CSV file, and per-subject grades and test results
//! with their averages.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The subject list a student is graded against
pub mod catalog;
/// Configuration sourced from the environment
pub mod config;
/// A module defining constant values to be used throughout
pub mod constants;
/// Error types
pub mod error;
/// For all parsers used
pub mod parsers;
/// Serialisable and printable record snapshots
pub mod report;
/// A student behind a lock
pub mod shared;
/// The student record itself
pub mod student;

pub use catalog::SubjectCatalog;
pub use config::{CatalogConfig, GradebookConfig, MissingSource};
pub use error::{CatalogError, RecordError, ScoreEntryError};
pub use report::{StudentReport, SubjectSummary};
pub use shared::SharedStudent;
pub use student::{ScoreEntry, ScoreRecord, Student, enroll, is_valid_name};
