//! Grades command handler: prints the grade point scale

use gradecalc::core::grades::GRADE_SCALE;

/// Print each letter grade with its point value
pub fn run() {
    println!("{:<6} Points", "Grade");
    for (grade, points) in GRADE_SCALE {
        println!("{:<6} {points}", grade.as_str());
    }
}
