#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! A student that can be handed to several threads.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{error::RecordError, report::StudentReport, student::Student};

/// Wraps a [`Student`] behind one mutex, so the name and the scores are
/// always read and written under the same lock. Cloning shares the student.
#[derive(Debug, Clone)]
pub struct SharedStudent {
    /// The guarded record.
    inner: Arc<Mutex<Student>>,
}

impl SharedStudent {
    /// Wraps `student`.
    pub fn new(student: Student) -> Self {
        Self {
            inner: Arc::new(Mutex::new(student)),
        }
    }

    /// Takes the lock. Every mutation either fully applies or fails before
    /// touching the record, so a poisoned lock still holds a valid record.
    fn lock(&self) -> MutexGuard<'_, Student> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// See [`Student::set_name`].
    pub fn set_name(&self, name: impl Into<String>) -> Result<(), RecordError> {
        self.lock().set_name(name)
    }

    /// See [`Student::name`]; returns an owned copy.
    pub fn name(&self) -> Result<String, RecordError> {
        self.lock().name().map(str::to_string)
    }

    /// See [`Student::add_score`].
    pub fn add_score(
        &self,
        subject: &str,
        grade: i64,
        test_result: f64,
    ) -> Result<(), RecordError> {
        self.lock().add_score(subject, grade, test_result)
    }

    /// See [`Student::average_test_score`].
    pub fn average_test_score(&self, subject: &str) -> Result<f64, RecordError> {
        self.lock().average_test_score(subject)
    }

    /// See [`Student::average_grades`].
    pub fn average_grades(&self) -> f64 {
        self.lock().average_grades()
    }

    /// See [`Student::report`].
    pub fn report(&self) -> StudentReport {
        self.lock().report()
    }

    /// Runs `f` with the lock held, for reads that need a consistent view of
    /// several fields.
    pub fn with<R>(&self, f: impl FnOnce(&Student) -> R) -> R {
        f(&self.lock())
    }

    /// Returns a copy of the current record.
    pub fn snapshot(&self) -> Student {
        self.lock().clone()
    }
}

impl From<Student> for SharedStudent {
    fn from(student: Student) -> Self {
        Self::new(student)
    }
}
