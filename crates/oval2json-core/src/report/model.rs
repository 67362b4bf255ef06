use crate::advisory::AdvisoryDocument;
use crate::report::Diagnostics;

/// Result of converting one document.
///
/// Only `output` is part of the JSON contract. `diagnostics` and `document`
/// feed logs and the text summary.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: AdvisoryDocument,
    pub diagnostics: Diagnostics,
    pub document: Option<DocumentInfo>,
}

/// Input document fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub path: Option<String>,
    pub size_bytes: u64,
    pub sha256: String,
}
