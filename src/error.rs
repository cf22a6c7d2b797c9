#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Error types for student records and subject catalogs.

use std::{io, path::PathBuf};

/// Validation failures raised while reading or updating a student record.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The name is not made of alphabetic, title-cased words.
    #[error(
        "Invalid name format `{0}`. Only alphabetical characters with first letter capitalized \
         are allowed."
    )]
    InvalidNameFormat(String),
    /// The name was read before one was ever set.
    #[error("No name has been set for this student.")]
    NameUnset,
    /// Someone tried to overwrite the subject list.
    #[error("Can't modify subjects directly. Use `Student::add_score` to record results.")]
    ReadOnlyViolation,
    /// The subject is not part of the catalog the student was built against.
    #[error("{0} is not a valid subject for this student.")]
    UnknownSubject(String),
    /// The grade is outside of the accepted range.
    #[error("Invalid grade {0}. Only values between 2 and 5 are allowed.")]
    InvalidGrade(i64),
    /// The test result is outside of the accepted range.
    #[error("Invalid test result {0}. Only values between 0 and 100 are allowed.")]
    InvalidTestResult(f64),
}

/// Failures while loading a subject catalog from disk.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The subject file does not exist and the strict policy is in effect.
    #[error("Subject file `{}` does not exist", .path.display())]
    Missing {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The subject file exists but could not be read.
    #[error("Could not read subject file `{}`", .path.display())]
    Read {
        /// Path that was read.
        path:   PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The first record of the subject file is not valid CSV.
    #[error("Malformed subject record in `{}`: {message}", .path.display())]
    Malformed {
        /// Path that was parsed, or `<memory>` for in-memory input.
        path:    PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

/// A `SUBJECT:GRADE:RESULT` entry could not be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not parse score entry `{input}` (expected SUBJECT:GRADE:RESULT): {message}")]
pub struct ScoreEntryError {
    /// Raw text that failed to parse.
    pub input:   String,
    /// Parser diagnostic.
    pub message: String,
}
