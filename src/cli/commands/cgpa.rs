//! CGPA command handler

use crate::args::ExportArgs;
use crate::commands::export;
use gradecalc::config::Config;
use gradecalc::core::input::{parse_semester_arg, parse_semesters_csv};
use gradecalc::core::metrics::{compute_cgpa, AggregateResult};
use gradecalc::core::models::{Roster, SemesterRecord};
use gradecalc::{error, verbose};
use std::path::Path;

fn load_semesters(
    input_file: Option<&Path>,
    inline: &[String],
) -> Result<Roster<SemesterRecord>, String> {
    let mut records = Vec::new();

    if let Some(path) = input_file {
        let loaded = parse_semesters_csv(path).map_err(|e| {
            error!("Failed to load semesters from {}: {e}", path.display());
            format!("✗ {e}")
        })?;
        verbose!("✓ Loaded {} semesters from {}", loaded.len(), path.display());
        records.extend(loaded);
    }

    for value in inline {
        records.push(parse_semester_arg(value).map_err(|e| format!("✗ {e}"))?);
    }

    Ok(Roster::from_records(records))
}

fn print_result(result: &AggregateResult) {
    println!("CGPA: {:.2}", result.value);
    println!("Total Credits Considered: {}", result.total_credits);
    println!("{}", result.band);

    verbose!("\nSemesters counted:");
    for c in &result.contributions {
        verbose!(
            "  {}. {}: SGPA {} × {} credits",
            c.position,
            c.label,
            c.points,
            c.credits
        );
    }
}

/// Run the cgpa command.
///
/// # Errors
/// Returns a printable message if loading fails, no semester is valid, or
/// the export cannot be written.
pub fn run(
    input_file: Option<&Path>,
    semesters: &[String],
    export_args: &ExportArgs,
    config: &Config,
) -> Result<(), String> {
    let roster = load_semesters(input_file, semesters)?;
    let result = compute_cgpa(&roster.records()).map_err(|e| format!("✗ {e}"))?;

    print_result(&result);
    export::run(&result, export_args, config)
}
