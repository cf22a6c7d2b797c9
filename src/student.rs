#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! A single student's record: a validated name plus grades and test results
//! per catalog subject.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::Arc};

use bon::{Builder, builder};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::SubjectCatalog,
    constants::{GRADE_RANGE, TEST_RESULT_RANGE},
    error::{RecordError, ScoreEntryError},
    parsers::parser,
    report::{StudentReport, SubjectSummary},
};

/// Grades and test results recorded for one subject, in the order they were
/// added. Both sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Grades, each within [2, 5].
    grades:       Vec<i64>,
    /// Test results, each within [0, 100].
    test_results: Vec<f64>,
}

impl ScoreRecord {
    /// Grades in insertion order.
    pub fn grades(&self) -> &[i64] {
        &self.grades
    }

    /// Test results in insertion order.
    pub fn test_results(&self) -> &[f64] {
        &self.test_results
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// True if nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Mean test result, `0.0` when there are none.
    pub fn average_test_result(&self) -> f64 {
        mean(self.test_results.iter().copied())
    }

    /// Appends one already validated entry.
    fn push(&mut self, grade: i64, test_result: f64) {
        self.grades.push(grade);
        self.test_results.push(test_result);
    }
}

/// One `SUBJECT:GRADE:RESULT` entry, as typed on the command line.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct ScoreEntry {
    /// Subject the entry is for.
    pub subject:     String,
    /// Grade awarded.
    pub grade:       i64,
    /// Test result achieved.
    pub test_result: f64,
}

impl ScoreEntry {
    /// Creates a new entry -
    /// * `subject` - subject name as it appears in the catalog
    /// * `grade` - grade awarded
    /// * `test_result` - test result achieved
    pub fn new(subject: impl Into<String>, grade: i64, test_result: f64) -> Self {
        Self {
            subject: subject.into(),
            grade,
            test_result,
        }
    }
}

impl FromStr for ScoreEntry {
    type Err = ScoreEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::score_entry(s).map_err(|e| ScoreEntryError {
            input:   s.to_string(),
            message: e.to_string(),
        })
    }
}

impl Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.subject, self.grade, self.test_result)
    }
}

/// Arithmetic mean, `0.0` for an empty input.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// True if `word` is one uppercase letter followed by lowercase letters only.
fn is_title_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.is_alphabetic()
                && first.is_uppercase()
                && chars.all(|c| c.is_alphabetic() && c.is_lowercase())
        }
        None => false,
    }
}

/// Checks a student name: alphabetic, title-cased words separated by single
/// spaces. "John Smith" passes, "John3", "john smith", "O'Brien",
/// " John" and "John  Smith" do not.
pub fn is_valid_name(name: &str) -> bool {
    // empty pieces from leading, trailing or doubled spaces fail is_title_word
    name.split(' ').all(is_title_word)
}

/// A student's academic record.
///
/// The set of subjects is fixed when the student is created: one empty
/// [`ScoreRecord`] per catalog entry. Records only ever grow.
#[derive(Debug, Clone)]
pub struct Student {
    /// Catalog the record was seeded from.
    catalog: Arc<SubjectCatalog>,
    /// Validated name, if one was set.
    name:    Option<String>,
    /// Subject name to recorded scores.
    scores:  HashMap<String, ScoreRecord>,
}

impl Student {
    /// Creates a student with no name and an empty record for every subject
    /// in `catalog`.
    pub fn new(catalog: Arc<SubjectCatalog>) -> Self {
        let scores = catalog
            .iter()
            .map(|subject| (subject.clone(), ScoreRecord::default()))
            .collect();

        Self {
            catalog,
            name: None,
            scores,
        }
    }

    /// Returns the student's name.
    pub fn name(&self) -> Result<&str, RecordError> {
        self.name.as_deref().ok_or(RecordError::NameUnset)
    }

    /// Sets the name after checking it with [`is_valid_name`]. On failure the
    /// previous name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), RecordError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(RecordError::InvalidNameFormat(name));
        }
        self.name = Some(name);
        Ok(())
    }

    /// Catalog the student was created with.
    pub fn catalog(&self) -> &Arc<SubjectCatalog> {
        &self.catalog
    }

    /// Subject names, in catalog order.
    pub fn subjects(&self) -> &[String] {
        self.catalog.subjects()
    }

    /// Recorded scores for one subject.
    pub fn scores(&self, subject: &str) -> Result<&ScoreRecord, RecordError> {
        self.scores
            .get(subject)
            .ok_or_else(|| RecordError::UnknownSubject(subject.to_string()))
    }

    /// Records a grade and a test result for `subject`.
    ///
    /// Checks run in this order: subject, grade, test result. Either both
    /// values are appended or neither is.
    pub fn add_score(
        &mut self,
        subject: &str,
        grade: i64,
        test_result: f64,
    ) -> Result<(), RecordError> {
        let record = self
            .scores
            .get_mut(subject)
            .ok_or_else(|| RecordError::UnknownSubject(subject.to_string()))?;

        if !GRADE_RANGE.contains(&grade) {
            return Err(RecordError::InvalidGrade(grade));
        }

        // NaN fails the range check too
        if !TEST_RESULT_RANGE.contains(&test_result) {
            return Err(RecordError::InvalidTestResult(test_result));
        }

        record.push(grade, test_result);
        tracing::debug!("Recorded grade {grade} and test result {test_result} for {subject}");
        Ok(())
    }

    /// Same as [`Student::add_score`] for a parsed entry.
    pub fn add_entry(&mut self, entry: &ScoreEntry) -> Result<(), RecordError> {
        self.add_score(&entry.subject, entry.grade, entry.test_result)
    }

    /// Mean test result for `subject`, `0.0` if nothing was recorded.
    pub fn average_test_score(&self, subject: &str) -> Result<f64, RecordError> {
        Ok(self.scores(subject)?.average_test_result())
    }

    /// Mean of every grade across all subjects, `0.0` if there are none.
    ///
    /// Grades are pooled in catalog order, so a subject with more grades
    /// weighs more.
    pub fn average_grades(&self) -> f64 {
        mean(
            self.catalog
                .iter()
                .filter_map(|subject| self.scores.get(subject))
                .flat_map(|record| record.grades().iter())
                .map(|&grade| grade as f64),
        )
    }

    /// Snapshot of the whole record, subjects in catalog order.
    pub fn report(&self) -> StudentReport {
        let subjects = self
            .catalog
            .iter()
            .filter_map(|subject| {
                self.scores
                    .get(subject)
                    .map(|record| SubjectSummary::from_record(subject, record))
            })
            .collect();

        StudentReport::new(self.name.clone(), subjects, self.average_grades())
    }
}

/// Builder-friendly constructor for a [`Student`] with an optional initial
/// name, checked like [`Student::set_name`].
#[builder(finish_fn = build)]
pub fn enroll(
    catalog: Arc<SubjectCatalog>,
    #[builder(into)] name: Option<String>,
) -> Result<Student, RecordError> {
    let mut student = Student::new(catalog);
    if let Some(name) = name {
        student.set_name(name)?;
    }
    Ok(student)
}
