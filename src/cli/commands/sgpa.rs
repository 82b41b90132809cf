//! SGPA command handler

use crate::args::ExportArgs;
use crate::commands::export;
use gradecalc::config::Config;
use gradecalc::core::input::{parse_subject_arg, parse_subjects_csv};
use gradecalc::core::metrics::{compute_sgpa, AggregateResult};
use gradecalc::core::models::{Roster, SubjectRecord};
use gradecalc::{error, verbose};
use std::path::Path;

/// Load subjects from the CSV file and `--subject` values, in that order
fn load_subjects(
    input_file: Option<&Path>,
    inline: &[String],
) -> Result<Roster<SubjectRecord>, String> {
    let mut records = Vec::new();

    if let Some(path) = input_file {
        let loaded = parse_subjects_csv(path).map_err(|e| {
            error!("Failed to load subjects from {}: {e}", path.display());
            format!("✗ {e}")
        })?;
        verbose!("✓ Loaded {} subjects from {}", loaded.len(), path.display());
        records.extend(loaded);
    }

    for value in inline {
        records.push(parse_subject_arg(value).map_err(|e| format!("✗ {e}"))?);
    }

    Ok(Roster::from_records(records))
}

fn print_result(result: &AggregateResult) {
    println!("SGPA: {:.2}", result.value);
    println!("Total Credits: {}", result.total_credits);
    println!("{}", result.band);

    verbose!("\nSubjects counted:");
    for c in &result.contributions {
        if let Some(grade) = c.grade {
            verbose!(
                "  {}. {}: {} credits × {} ({grade}) = {}",
                c.position,
                c.label,
                c.credits,
                c.points,
                c.weighted_points
            );
        }
    }
}

/// Run the sgpa command.
///
/// # Errors
/// Returns a printable message if loading fails, no subject is valid, or
/// the export cannot be written.
pub fn run(
    input_file: Option<&Path>,
    subjects: &[String],
    export_args: &ExportArgs,
    config: &Config,
) -> Result<(), String> {
    let roster = load_subjects(input_file, subjects)?;
    let result = compute_sgpa(&roster.records()).map_err(|e| format!("✗ {e}"))?;

    print_result(&result);
    export::run(&result, export_args, config)
}
