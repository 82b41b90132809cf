//! Data models for `gradecalc`

pub mod roster;
pub mod semester;
pub mod subject;

pub use roster::{RecordId, Roster};
pub use semester::SemesterRecord;
pub use subject::SubjectRecord;

/// Trim a free-text label, treating blank input as absent.
pub(crate) fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}
