#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};

use crate::student::ScoreRecord;

/// Everything recorded for one subject, plus its test average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    /// Subject name
    pub subject:            String,
    /// Grades in insertion order
    pub grades:             Vec<i64>,
    /// Test results in insertion order
    pub test_results:       Vec<f64>,
    /// Mean test result, `0.0` when empty
    pub average_test_score: f64,
}

impl SubjectSummary {
    /// Summarises one subject's record.
    pub fn from_record(subject: &str, record: &ScoreRecord) -> Self {
        Self {
            subject:            subject.to_string(),
            grades:             record.grades().to_vec(),
            test_results:       record.test_results().to_vec(),
            average_test_score: record.average_test_result(),
        }
    }
}

/// A student's record at a point in time, subjects in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    /// Student name, if one was set
    pub name:          Option<String>,
    /// Per-subject summaries
    pub subjects:      Vec<SubjectSummary>,
    /// Mean of all grades across subjects, `0.0` when empty
    pub average_grade: f64,
}

/// One rendered table row.
#[derive(Tabled)]
struct SummaryRow {
    /// Subject name
    #[tabled(rename = "Subject")]
    subject:            String,
    /// Comma separated grades
    #[tabled(rename = "Grades")]
    grades:             String,
    /// Comma separated test results
    #[tabled(rename = "Test results")]
    test_results:       String,
    /// Mean test result, two decimals
    #[tabled(rename = "Average test score")]
    average_test_score: String,
}

impl From<&SubjectSummary> for SummaryRow {
    fn from(summary: &SubjectSummary) -> Self {
        Self {
            subject:            summary.subject.clone(),
            grades:             summary.grades.iter().join(", "),
            test_results:       summary.test_results.iter().join(", "),
            average_test_score: format!("{:.2}", summary.average_test_score),
        }
    }
}

impl StudentReport {
    /// Creates a report from its parts.
    pub fn new(name: Option<String>, subjects: Vec<SubjectSummary>, average_grade: f64) -> Self {
        Self {
            name,
            subjects,
            average_grade,
        }
    }

    /// Summary for `subject`, if it is part of the report.
    pub fn subject(&self, subject: &str) -> Option<&SubjectSummary> {
        self.subjects.iter().find(|s| s.subject == subject)
    }

    /// Renders the report as a table with the name as header and the overall
    /// grade average as footer.
    pub fn render(&self) -> String {
        let rows = self
            .subjects
            .iter()
            .map(SummaryRow::from)
            .collect::<Vec<_>>();

        Table::new(&rows)
            .with(Panel::header(format!(
                "Record for {}",
                self.name.as_deref().unwrap_or("unnamed student")
            )))
            .with(Panel::footer(format!("Average grade: {:.2}", self.average_grade)))
            .with(Style::modern())
            .to_string()
    }
}

impl Display for StudentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
