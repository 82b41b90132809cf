//! Integration tests for loading rosters from CSV files

use gradecalc::core::error::InputError;
use gradecalc::core::grades::Grade;
use gradecalc::core::input::{parse_semesters_csv, parse_subjects_csv};
use gradecalc::core::metrics::{compute_cgpa, compute_sgpa};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write CSV");
    path
}

#[test]
fn test_subjects_csv_to_sgpa() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "subjects.csv",
        "# fall term\nName,Credit,Grade\nPhysics,3,B+\n\"Chemistry\",2,a\n,4,Z\n",
    );

    let subjects = parse_subjects_csv(&path).expect("CSV should parse");
    assert_eq!(subjects.len(), 3);
    assert_eq!(subjects[1].grade, Some(Grade::A));
    assert_eq!(subjects[1].name.as_deref(), Some("Chemistry"));
    assert!(subjects[2].name.is_none());
    assert!(subjects[2].grade.is_none());

    let result = compute_sgpa(&subjects).unwrap();
    assert!((result.value - 8.4).abs() < 1e-9);
}

#[test]
fn test_semesters_csv_column_order_is_free() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "semesters.csv",
        "credits,sgpa,semester\n20,8,One\n20,9,Two\nabc,7,Three\n",
    );

    let semesters = parse_semesters_csv(&path).expect("CSV should parse");
    assert_eq!(semesters.len(), 3);
    assert_eq!(semesters[2].credits, 0);

    let result = compute_cgpa(&semesters).unwrap();
    assert!((result.value - 8.5).abs() < 1e-9);
    assert_eq!(result.contributions.len(), 2);
}

#[test]
fn test_quoted_comma_keeps_columns_aligned() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(
        &dir,
        "quoted.csv",
        "name,credit,grade\n\"Physics, Intro\",4,A\n",
    );

    let subjects = parse_subjects_csv(&path).expect("CSV should parse");
    assert_eq!(subjects[0].name.as_deref(), Some("Physics, Intro"));

    let result = compute_sgpa(&subjects).expect("quoted row is valid");
    assert!((result.value - 9.0).abs() < 1e-9);
    assert_eq!(result.contributions[0].label, "Physics, Intro");
}

#[test]
fn test_missing_column_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(&dir, "bad.csv", "name,credit\nMaths,4\n");

    let err = parse_subjects_csv(&path).unwrap_err();
    assert!(matches!(err, InputError::MissingColumn { column: "grade", .. }));
}

#[test]
fn test_empty_file_has_no_header() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(&dir, "empty.csv", "\n# nothing here\n");

    assert!(matches!(
        parse_semesters_csv(&path),
        Err(InputError::MissingHeader(_))
    ));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = parse_subjects_csv(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
}
