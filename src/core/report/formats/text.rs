//! Plain-text result file, the format offered for download after a calculation

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.txt")]
struct TextReportTemplate<'a> {
    title: &'a str,
    value: String,
    credits_label: &'a str,
    total_credits: String,
    message: String,
    rows_label: &'a str,
    rows: Vec<String>,
    generated_on: String,
}

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let rows = ctx
            .result
            .contributions
            .iter()
            .map(|c| format!("{}. {}: {}", c.position, c.label, ctx.record_fields(c)))
            .collect();

        let template = TextReportTemplate {
            title: ctx.metric_name(),
            value: ctx.value(),
            credits_label: ctx.credits_label(),
            total_credits: ctx.total_credits(),
            message: ctx.result.band.to_string(),
            rows_label: ctx.result.kind.row_label(),
            rows,
            generated_on: ctx.generated_on(),
        };

        Ok(template.render()?.trim().to_string())
    }
}
