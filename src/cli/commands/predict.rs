//! Predict command handler

use gradecalc::core::bands::{assess_required_sgpa, equivalent_grade};
use gradecalc::core::metrics::predict_required_sgpa;
use gradecalc::{debug, verbose};

/// Required SGPA as printed; non-positive values mean the target is already met
fn format_required(required: f64) -> String {
    if required > 0.0 {
        format!("{required:.2}")
    } else {
        "N/A".to_string()
    }
}

/// Run the predict command.
///
/// # Errors
/// Returns a printable message when the inputs are rejected.
pub fn run(current: f64, earned: f64, target: f64, next: f64) -> Result<(), String> {
    let required =
        predict_required_sgpa(current, earned, target, next).map_err(|e| format!("✗ {e}"))?;
    debug!("Raw required SGPA: {required}");

    println!("Required SGPA: {}", format_required(required));
    if let Some(grade) = equivalent_grade(required) {
        println!("Equivalent Grade: {grade}");
    }
    println!("{}", assess_required_sgpa(required));

    verbose!(
        "\n{current} CGPA over {earned} credits, aiming for {target} after {next} more credits"
    );
    Ok(())
}
