//! Shared `--export` handling for the sgpa and cgpa commands

use crate::args::ExportArgs;
use chrono::Local;
use gradecalc::config::Config;
use gradecalc::core::metrics::AggregateResult;
use gradecalc::core::report::{ReportContext, ReportFormat};
use gradecalc::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Resolve the export format: CLI flag first, then config `format`
fn resolve_format(flag: Option<&str>, config: &Config) -> Result<ReportFormat, String> {
    flag.map_or_else(
        || Ok(config.report_format()),
        |f| ReportFormat::from_str(f).map_err(|e| format!("✗ {e}")),
    )
}

/// Output path: explicit `--export FILE`, else `<reports_dir>/<default name>`
fn resolve_path(explicit: Option<&Path>, reports_dir: &str, default_name: &str) -> PathBuf {
    explicit.map_or_else(
        || Path::new(reports_dir).join(default_name),
        Path::to_path_buf,
    )
}

/// Write `result` to a report file when `--export` was given.
///
/// # Errors
/// Returns a printable message for an unknown format or a failed write.
pub fn run(result: &AggregateResult, args: &ExportArgs, config: &Config) -> Result<(), String> {
    let Some(target) = &args.export else {
        return Ok(());
    };

    let format = resolve_format(args.format.as_deref(), config)?;
    let ctx = ReportContext::new(result, Local::now().naive_local());
    let path = resolve_path(
        target.as_deref(),
        &config.paths.reports_dir,
        &ctx.default_file_name(format),
    );

    format.reporter().generate(&ctx, &path).map_err(|e| {
        error!("Export failed for {}: {e}", path.display());
        format!("✗ Failed to write {}: {e}", path.display())
    })?;

    info!("{} exported as {format}", result.kind);
    println!("✓ Result exported: {}", path.display());
    Ok(())
}
