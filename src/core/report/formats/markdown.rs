//! Markdown report generator
//!
//! Same content as the text export, laid out as tables so it renders well in
//! GitHub, GitLab and VS Code.

use crate::core::metrics::{Contribution, MetricKind};
use crate::core::report::{format_number, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.md")]
struct MarkdownReportTemplate<'a> {
    title: &'a str,
    value: String,
    credits_label: &'a str,
    total_credits: String,
    message: String,
    rows_heading: &'a str,
    header: String,
    divider: String,
    rows: Vec<String>,
    generated_on: String,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn columns(kind: MetricKind) -> &'static [&'static str] {
        match kind {
            MetricKind::Sgpa => &["#", "Subject", "Credits", "Grade", "Points"],
            MetricKind::Cgpa => &["#", "Semester", "SGPA", "Credits"],
        }
    }

    fn cells(kind: MetricKind, c: &Contribution) -> Vec<String> {
        let label = escape_cell(&c.label);
        match kind {
            MetricKind::Sgpa => vec![
                c.position.to_string(),
                label,
                format_number(c.credits),
                c.grade.map(|g| g.to_string()).unwrap_or_default(),
                format_number(c.points),
            ],
            MetricKind::Cgpa => vec![
                c.position.to_string(),
                label,
                format_number(c.points),
                format_number(c.credits),
            ],
        }
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("| {} |", joined.join(" | "))
}

/// Keep free-text labels from breaking the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let kind = ctx.result.kind;
        let columns = Self::columns(kind);

        let template = MarkdownReportTemplate {
            title: ctx.metric_name(),
            value: ctx.value(),
            credits_label: ctx.credits_label(),
            total_credits: ctx.total_credits(),
            message: ctx.result.band.to_string(),
            rows_heading: match kind {
                MetricKind::Sgpa => "Subject",
                MetricKind::Cgpa => "Semester",
            },
            header: table_row(columns),
            divider: table_row(vec!["---"; columns.len()].as_slice()),
            rows: ctx
                .result
                .contributions
                .iter()
                .map(|c| table_row(Self::cells(kind, c).as_slice()))
                .collect(),
            generated_on: ctx.generated_on(),
        };

        Ok(format!("{}\n", template.render()?.trim()))
    }
}
