//! Result export
//!
//! Renders an SGPA/CGPA result and the records it was computed from into a
//! downloadable report. Everything in a report comes from the
//! [`AggregateResult`] plus a caller-supplied timestamp, so rendering the
//! same result at the same timestamp always gives the same text.

pub mod formats;

use crate::core::metrics::{AggregateResult, Contribution, MetricKind};
use chrono::NaiveDateTime;
use std::error::Error;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Timestamp layout used in the "Generated on" line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Computed result, including the valid records
    pub result: &'a AggregateResult,
    /// When the report was generated
    pub generated_at: NaiveDateTime,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(result: &'a AggregateResult, generated_at: NaiveDateTime) -> Self {
        Self {
            result,
            generated_at,
        }
    }

    /// Metric name, also used as the report title ("SGPA" / "CGPA")
    #[must_use]
    pub const fn metric_name(&self) -> &'static str {
        self.result.kind.name()
    }

    /// Label of the credits line
    #[must_use]
    pub const fn credits_label(&self) -> &'static str {
        match self.result.kind {
            MetricKind::Sgpa => "Total Credits",
            MetricKind::Cgpa => "Total Credits Considered",
        }
    }

    /// Metric value as printed
    #[must_use]
    pub fn value(&self) -> String {
        format_number(self.result.value)
    }

    /// Total credits as printed
    #[must_use]
    pub fn total_credits(&self) -> String {
        format_number(self.result.total_credits)
    }

    /// Formatted generation timestamp
    #[must_use]
    pub fn generated_on(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Field summary of one record, e.g. "4 credits, Grade A (9 points)"
    #[must_use]
    pub fn record_fields(&self, contribution: &Contribution) -> String {
        match (self.result.kind, contribution.grade) {
            (MetricKind::Sgpa, Some(grade)) => format!(
                "{} credits, Grade {grade} ({} points)",
                format_number(contribution.credits),
                format_number(contribution.points)
            ),
            (MetricKind::Sgpa, None) => {
                format!("{} credits", format_number(contribution.credits))
            }
            (MetricKind::Cgpa, _) => format!(
                "SGPA {}, Credits {}",
                format_number(contribution.points),
                format_number(contribution.credits)
            ),
        }
    }

    /// Suggested file name, e.g. `SGPA_Result_2026-03-01.txt`
    #[must_use]
    pub fn default_file_name(&self, format: ReportFormat) -> String {
        format!(
            "{}_Result_{}.{}",
            self.metric_name(),
            self.generated_at.format("%Y-%m-%d"),
            format.extension()
        )
    }
}

/// Shortest decimal form of a number: `9`, `7.8`, `8.55`
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
