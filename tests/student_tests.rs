use std::sync::Arc;

use gradebook::{RecordError, ScoreEntry, Student, SubjectCatalog, enroll, is_valid_name};

fn catalog() -> Arc<SubjectCatalog> {
    Arc::new(SubjectCatalog::from_subjects(["Math", "English"]))
}

#[test]
fn valid_names_round_trip() {
    let mut student = Student::new(catalog());
    for name in ["John Smith", "John", "Anna Maria Lopez", "Élodie Durand", "J"] {
        student.set_name(name).expect("valid name");
        assert_eq!(student.name(), Ok(name));
    }
}

#[test]
fn invalid_names_are_rejected() {
    let mut student = Student::new(catalog());
    for name in [
        "john smith",
        "John smith",
        "John3",
        "JOHN",
        "McDonald",
        "O'Brien",
        "Mary-Jane",
        "",
        "   ",
        " John",
        "John ",
        "  John  ",
        "John  Smith",
        "John\tSmith",
        "John Smith\n",
        "John\u{a0}Smith",
    ] {
        assert_eq!(
            student.set_name(name),
            Err(RecordError::InvalidNameFormat(name.to_string())),
            "{name:?} should be rejected"
        );
        assert!(!is_valid_name(name));
    }
}

#[test]
fn failed_rename_keeps_previous_name() {
    let mut student = Student::new(catalog());
    student.set_name("John Smith").expect("valid name");
    assert!(student.set_name("john").is_err());
    assert_eq!(student.name(), Ok("John Smith"));

    student.set_name("Jane Doe").expect("rename");
    assert_eq!(student.name(), Ok("Jane Doe"));
}

#[test]
fn name_is_unset_until_assigned() {
    let student = Student::new(catalog());
    assert_eq!(student.name(), Err(RecordError::NameUnset));
}

#[test]
fn every_catalog_subject_starts_empty() {
    let student = Student::new(catalog());
    assert_eq!(student.subjects(), ["Math", "English"]);
    for subject in student.subjects() {
        let record = student.scores(subject).expect("seeded record");
        assert!(record.is_empty());
        assert!(record.grades().is_empty());
        assert!(record.test_results().is_empty());
    }
}

#[test]
fn unknown_subjects_are_rejected() {
    let mut student = Student::new(catalog());
    let unknown = RecordError::UnknownSubject("Art".to_string());

    assert_eq!(student.add_score("Art", 4, 80.0), Err(unknown.clone()));
    assert_eq!(student.average_test_score("Art"), Err(unknown.clone()));
    assert_eq!(student.scores("Art").map(|_| ()), Err(unknown));
    // lookups are case sensitive
    assert!(student.add_score("math", 4, 80.0).is_err());
}

#[test]
fn subject_is_checked_before_grade_and_result() {
    let mut student = Student::new(catalog());
    assert_eq!(
        student.add_score("Art", 9, 500.0),
        Err(RecordError::UnknownSubject("Art".to_string()))
    );
    assert_eq!(student.add_score("Math", 9, 500.0), Err(RecordError::InvalidGrade(9)));
}

#[test]
fn grade_bounds_are_inclusive() {
    let mut student = Student::new(catalog());
    student.add_score("Math", 2, 50.0).expect("lower bound");
    student.add_score("Math", 5, 50.0).expect("upper bound");

    for grade in [i64::MIN, -1, 0, 1, 6, 100] {
        assert_eq!(
            student.add_score("Math", grade, 50.0),
            Err(RecordError::InvalidGrade(grade))
        );
    }
    assert_eq!(student.scores("Math").expect("math").grades(), [2, 5]);
}

#[test]
fn test_result_bounds_are_inclusive() {
    let mut student = Student::new(catalog());
    student.add_score("English", 4, 0.0).expect("lower bound");
    student.add_score("English", 4, 100.0).expect("upper bound");

    for result in [-0.1, -50.0, 100.1, 1000.0, f64::INFINITY] {
        assert_eq!(
            student.add_score("English", 4, result),
            Err(RecordError::InvalidTestResult(result))
        );
    }
    assert!(matches!(
        student.add_score("English", 4, f64::NAN),
        Err(RecordError::InvalidTestResult(r)) if r.is_nan()
    ));
    assert_eq!(student.scores("English").expect("english").test_results(), [0.0, 100.0]);
}

#[test]
fn rejected_entries_leave_no_trace() {
    let mut student = Student::new(catalog());
    student.add_score("Math", 4, 80.0).expect("valid entry");
    assert!(student.add_score("Math", 4, 101.0).is_err());
    assert!(student.add_score("Math", 7, 90.0).is_err());

    let record = student.scores("Math").expect("math");
    assert_eq!(record.grades(), [4]);
    assert_eq!(record.test_results(), [80.0]);
    assert_eq!(record.len(), 1);
}

#[test]
fn entries_keep_insertion_order() {
    let mut student = Student::new(catalog());
    student.add_score("Math", 5, 60.0).expect("first");
    student.add_score("Math", 2, 95.0).expect("second");
    student.add_score("Math", 5, 60.0).expect("duplicate");

    let record = student.scores("Math").expect("math");
    assert_eq!(record.grades(), [5, 2, 5]);
    assert_eq!(record.test_results(), [60.0, 95.0, 60.0]);
    assert!(student.scores("English").expect("english").is_empty());
}

#[test]
fn empty_averages_are_zero() {
    let student = Student::new(catalog());
    assert_eq!(student.average_test_score("Math"), Ok(0.0));
    assert_eq!(student.average_grades(), 0.0);

    let no_subjects = Student::new(Arc::new(SubjectCatalog::default()));
    assert_eq!(no_subjects.average_grades(), 0.0);
}

#[test]
fn math_and_english_scenario() {
    let mut student = Student::new(catalog());
    student.set_name("John Smith").expect("valid name");

    student.add_score("Math", 4, 80.0).expect("math 1");
    student.add_score("Math", 3, 75.0).expect("math 2");
    student.add_score("English", 5, 90.0).expect("english 1");
    student.add_score("English", 4, 85.0).expect("english 2");

    assert_eq!(student.average_test_score("Math"), Ok(77.5));
    assert_eq!(student.average_test_score("English"), Ok(87.5));
    assert_eq!(student.average_grades(), 4.0);
}

#[test]
fn grade_average_weighs_subjects_by_count() {
    let mut student = Student::new(catalog());
    student.add_score("Math", 2, 50.0).expect("math 1");
    student.add_score("Math", 2, 50.0).expect("math 2");
    student.add_score("Math", 2, 50.0).expect("math 3");
    student.add_score("English", 5, 50.0).expect("english");

    // (2 + 2 + 2 + 5) / 4, not the mean of the per-subject means
    assert_eq!(student.average_grades(), 2.75);
}

#[test]
fn students_sharing_a_catalog_keep_separate_scores() {
    let shared = catalog();
    let mut first = Student::new(Arc::clone(&shared));
    let second = Student::new(Arc::clone(&shared));

    first.add_score("Math", 5, 100.0).expect("record for first");

    assert_eq!(first.average_test_score("Math"), Ok(100.0));
    assert_eq!(second.average_test_score("Math"), Ok(0.0));
    assert!(second.scores("Math").expect("math").is_empty());
    assert!(Arc::ptr_eq(first.catalog(), second.catalog()));
}

#[test]
fn cloned_students_do_not_share_scores() {
    let mut original = Student::new(catalog());
    let copy = original.clone();
    original.add_score("English", 3, 40.0).expect("record");
    assert!(copy.scores("English").expect("english").is_empty());
}

#[test]
fn add_entry_matches_add_score() {
    let mut student = Student::new(catalog());
    let entry: ScoreEntry = "Math:4:80".parse().expect("parse entry");
    student.add_entry(&entry).expect("record entry");
    assert_eq!(student.average_test_score("Math"), Ok(80.0));

    let bad = ScoreEntry::new("Math", 1, 80.0);
    assert_eq!(student.add_entry(&bad), Err(RecordError::InvalidGrade(1)));
}

#[test]
fn enroll_builder_validates_name() {
    let student = enroll()
        .catalog(catalog())
        .name("John Smith")
        .build()
        .expect("enroll with name");
    assert_eq!(student.name(), Ok("John Smith"));

    let unnamed = enroll().catalog(catalog()).build().expect("enroll without name");
    assert_eq!(unnamed.name(), Err(RecordError::NameUnset));

    let err = enroll()
        .catalog(catalog())
        .name("john")
        .build()
        .expect_err("invalid name");
    assert_eq!(err, RecordError::InvalidNameFormat("john".to_string()));
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(
        RecordError::UnknownSubject("Art".into()).to_string(),
        "Art is not a valid subject for this student."
    );
    assert!(RecordError::InvalidGrade(7).to_string().contains("between 2 and 5"));
    assert!(
        RecordError::InvalidTestResult(101.0)
            .to_string()
            .contains("between 0 and 100")
    );
    assert!(RecordError::ReadOnlyViolation.to_string().contains("add_score"));
}
