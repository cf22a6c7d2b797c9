#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::RangeInclusive;

/// Subject file looked up when nothing else is configured
pub const DEFAULT_SUBJECTS_FILE: &str = "subjects.csv";

/// Environment variable overriding the subject file location
pub const SUBJECTS_FILE_ENV: &str = "GRADEBOOK_SUBJECTS_FILE";

/// Environment variable that makes a missing subject file an error
pub const STRICT_CATALOG_ENV: &str = "GRADEBOOK_STRICT_CATALOG";

/// Lowest accepted grade
pub const MIN_GRADE: i64 = 2;

/// Highest accepted grade
pub const MAX_GRADE: i64 = 5;

/// Accepted grades, inclusive on both ends
pub const GRADE_RANGE: RangeInclusive<i64> = MIN_GRADE..=MAX_GRADE;

/// Lowest accepted test result
pub const MIN_TEST_RESULT: f64 = 0.0;

/// Highest accepted test result
pub const MAX_TEST_RESULT: f64 = 100.0;

/// Accepted test results, inclusive on both ends
pub const TEST_RESULT_RANGE: RangeInclusive<f64> = MIN_TEST_RESULT..=MAX_TEST_RESULT;
