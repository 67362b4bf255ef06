use serde::Serialize;

use crate::criteria::CriteriaNode;

/// Top-level JSON output: `{"advisory": [...]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdvisoryDocument {
    pub advisory: Vec<AdvisoryRecord>,
}

/// One converted definition.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdvisoryRecord {
    pub title: String,
    pub fixes_cve: Vec<String>,
    pub severity: String,
    pub affected_cpe: Vec<String>,
    /// Zero or one root node.
    pub criteria: Vec<CriteriaNode>,
}
