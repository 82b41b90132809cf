//! Integration tests for SGPA/CGPA aggregation and required-SGPA prediction

use gradecalc::core::bands::{
    assess_required_sgpa, classify_band, equivalent_grade, CGPA_BANDS, SGPA_BANDS,
};
use gradecalc::core::error::EngineError;
use gradecalc::core::grades::Grade;
use gradecalc::core::metrics::{
    compute_cgpa, compute_sgpa, predict_required_sgpa, MetricKind,
};
use gradecalc::core::models::{Roster, SemesterRecord, SubjectRecord};

fn subject(name: &str, credit: f64, grade: &str) -> SubjectRecord {
    SubjectRecord::new(Some(name.to_string()), credit, grade.parse().ok())
}

fn semester(sgpa: f64, credits: u32) -> SemesterRecord {
    SemesterRecord::new(None, sgpa, credits)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_single_subject_sgpa() {
    let result = compute_sgpa(&[subject("Maths", 4.0, "A")]).expect("valid subject");
    assert_eq!(result.kind, MetricKind::Sgpa);
    assert!(approx(result.value, 9.0));
    assert!(approx(result.total_credits, 4.0));
}

#[test]
fn test_weighted_sgpa() {
    // (3 * 8 + 2 * 9) / 5
    let result = compute_sgpa(&[subject("Physics", 3.0, "B+"), subject("Chemistry", 2.0, "A")])
        .expect("valid subjects");
    assert!(approx(result.value, 8.4));
    assert!(approx(result.total_credits, 5.0));
    assert_eq!(result.band, classify_band(8.4, &SGPA_BANDS));
}

#[test]
fn test_sgpa_rounds_to_two_decimals() {
    // 26 / 3 = 8.666...
    let result = compute_sgpa(&[
        subject("A", 1.0, "A+"),
        subject("B", 1.0, "B+"),
        subject("C", 1.0, "B+"),
    ])
    .expect("valid subjects");
    assert!(approx(result.value, 8.67));
    assert!(approx(result.value * 100.0, (result.value * 100.0).round()));
}

#[test]
fn test_invalid_subjects_are_skipped() {
    let result = compute_sgpa(&[
        subject("Zero credit", 0.0, "A+"),
        subject("Negative", -3.0, "A+"),
        subject("Ungraded", 4.0, "Z"),
        subject("Counted", 4.0, "C"),
    ])
    .expect("one subject is valid");

    assert!(approx(result.value, 5.0));
    assert!(approx(result.total_credits, 4.0));
    assert_eq!(result.contributions.len(), 1);
    assert_eq!(result.contributions[0].label, "Counted");
    assert_eq!(result.contributions[0].position, 1);
}

#[test]
fn test_all_f_grades_give_zero() {
    let result = compute_sgpa(&[subject("Lab", 2.0, "F")]).expect("F is a valid grade");
    assert!(approx(result.value, 0.0));
    assert_eq!(result.band.tier, "needs-improvement");
}

#[test]
fn test_no_valid_subject_fails() {
    let err = compute_sgpa(&[SubjectRecord::default()]).unwrap_err();
    assert!(matches!(err, EngineError::NoValidInput { .. }));
    assert!(compute_sgpa(&[]).is_err());
}

#[test]
fn test_sgpa_stays_within_scale() {
    for grade in ["A+", "A", "B+", "B", "C+", "C", "D", "F"] {
        let value = compute_sgpa(&[subject("X", 3.5, grade)]).unwrap().value;
        assert!((0.0..=10.0).contains(&value), "{grade} gave {value}");
    }
}

#[test]
fn test_cgpa_equal_credits() {
    let result = compute_cgpa(&[semester(8.0, 20), semester(9.0, 20)]).expect("valid semesters");
    assert_eq!(result.kind, MetricKind::Cgpa);
    assert!(approx(result.value, 8.5));
    assert!(approx(result.total_credits, 40.0));
    assert_eq!(result.band, classify_band(8.5, &CGPA_BANDS));
}

#[test]
fn test_cgpa_skips_out_of_range_semesters() {
    let result = compute_cgpa(&[
        semester(11.0, 20),
        semester(0.0, 20),
        semester(7.0, 0),
        semester(7.5, 22),
    ])
    .expect("one semester is valid");
    assert!(approx(result.value, 7.5));
    assert!(approx(result.total_credits, 22.0));
    assert_eq!(result.contributions[0].label, "Semester 1");
}

#[test]
fn test_no_valid_semester_fails() {
    assert!(matches!(
        compute_cgpa(&[semester(12.0, 20)]),
        Err(EngineError::NoValidInput { .. })
    ));
}

#[test]
fn test_computations_are_deterministic() {
    let subjects = [subject("A", 3.0, "B"), subject("B", 4.5, "A+")];
    assert_eq!(compute_sgpa(&subjects), compute_sgpa(&subjects));

    let semesters = [semester(6.75, 18), semester(8.1, 24)];
    assert_eq!(compute_cgpa(&semesters), compute_cgpa(&semesters));
}

#[test]
fn test_predict_required_sgpa() {
    let required = predict_required_sgpa(7.5, 100.0, 8.0, 25.0).expect("valid inputs");
    assert!(approx(required, 10.0));
    assert_eq!(equivalent_grade(required), Some(Grade::APlus));
}

#[test]
fn test_predict_unreachable_is_a_value() {
    let required = predict_required_sgpa(6.0, 120.0, 9.0, 20.0).expect("valid inputs");
    assert!(required > 10.0);
    assert_eq!(assess_required_sgpa(required).tier, "unreachable");
    assert_eq!(equivalent_grade(required), None);
}

#[test]
fn test_predict_target_below_current_fails() {
    let err = predict_required_sgpa(8.0, 50.0, 7.0, 20.0).unwrap_err();
    assert!(matches!(err, EngineError::TargetBelowCurrent { .. }));
}

#[test]
fn test_predict_rejects_non_positive_and_out_of_range() {
    assert!(matches!(
        predict_required_sgpa(0.0, 50.0, 7.0, 20.0),
        Err(EngineError::InvalidInput { .. })
    ));
    assert!(matches!(
        predict_required_sgpa(7.0, 50.0, 8.0, -1.0),
        Err(EngineError::InvalidInput { .. })
    ));
    assert!(matches!(
        predict_required_sgpa(7.0, 50.0, 10.5, 20.0),
        Err(EngineError::OutOfRange { .. })
    ));
}

#[test]
fn test_roster_feeds_engine() {
    let mut roster: Roster<SubjectRecord> = Roster::new();
    let first = roster.ids()[0];
    roster
        .update(first, |s| {
            s.credit = 4.0;
            s.grade = Some(Grade::A);
        })
        .expect("first row exists");
    let second = roster.add(subject("Elective", 2.0, "B"));

    let result = compute_sgpa(&roster.records()).unwrap();
    assert!(approx(result.value, 8.33));

    roster.remove(second).expect("two rows present");
    assert!(approx(compute_sgpa(&roster.records()).unwrap().value, 9.0));
    assert!(roster.remove(first).is_err());
}

#[test]
fn test_overflowing_totals_are_errors() {
    let err = compute_sgpa(&[subject("Huge", 1e308, "A"), subject("Huger", 1e308, "B")])
        .unwrap_err();
    assert!(matches!(err, EngineError::TooLarge { .. }));

    assert!(matches!(
        predict_required_sgpa(5.0, 1e308, 6.0, 1e308),
        Err(EngineError::TooLarge { .. })
    ));
}
