use crate::TOOL_NAME;
use crate::report::model::Conversion;

/// Human-readable summary of a conversion.
pub fn render_text(conversion: &Conversion, version: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{TOOL_NAME} {version}\n"));

    if let Some(doc) = &conversion.document {
        out.push_str(&format!(
            "Document: {} ({} bytes, sha256 {})\n",
            doc.path.as_deref().unwrap_or("<stdin>"),
            doc.size_bytes,
            doc.sha256
        ));
    }

    let diagnostics = &conversion.diagnostics;
    out.push_str(&format!(
        "Indexed: {} objects, {} states, {} tests\n",
        diagnostics.objects_indexed, diagnostics.states_indexed, diagnostics.tests_indexed
    ));
    out.push_str(&format!(
        "Advisories: {} of {} definitions\n",
        conversion.output.advisory.len(),
        diagnostics.definitions_seen
    ));

    for a in &conversion.output.advisory {
        let atoms: usize = a.criteria.iter().map(|c| c.atom_count()).sum();
        let severity = if a.severity.is_empty() { "-" } else { a.severity.as_str() };
        out.push_str(&format!(
            "  - {} [{}] {} CVEs, {} conditions\n",
            a.title,
            severity,
            a.fixes_cve.len(),
            atoms
        ));
    }

    if !diagnostics.dropped.is_empty() {
        out.push_str(&format!("Dropped: {}\n", diagnostics.dropped.len()));
        for reason in &diagnostics.dropped {
            out.push_str(&format!("  - {reason}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::{AdvisoryDocument, AdvisoryRecord};
    use crate::error::Unresolved;
    use crate::report::{Diagnostics, DocumentInfo};

    fn conversion() -> Conversion {
        Conversion {
            output: AdvisoryDocument {
                advisory: vec![AdvisoryRecord {
                    title: "RHSA-2024:0002: zlib update".into(),
                    fixes_cve: vec!["CVE-2024-1".into(), "CVE-2024-2".into()],
                    ..Default::default()
                }],
            },
            diagnostics: Diagnostics {
                objects_indexed: 2,
                states_indexed: 3,
                tests_indexed: 4,
                definitions_seen: 2,
                dropped: vec![Unresolved::MissingMetadata {
                    definition_id: "oval:def:9".into(),
                }],
            },
            document: Some(DocumentInfo {
                path: None,
                size_bytes: 10,
                sha256: "abcd".into(),
            }),
        }
    }

    #[test]
    fn summary_lists_advisories_and_drops() {
        let text = render_text(&conversion(), "0.1.0");

        assert!(text.starts_with("oval2json 0.1.0\n"));
        assert!(text.contains("Document: <stdin> (10 bytes, sha256 abcd)"));
        assert!(text.contains("Indexed: 2 objects, 3 states, 4 tests"));
        assert!(text.contains("Advisories: 1 of 2 definitions"));
        assert!(text.contains("  - RHSA-2024:0002: zlib update [-] 2 CVEs, 0 conditions"));
        assert!(text.contains("Dropped: 1\n  - definition `oval:def:9` has no metadata block"));
    }

    #[test]
    fn lossless_summary_has_no_dropped_section() {
        let mut conversion = conversion();
        conversion.diagnostics.dropped.clear();
        conversion.document = None;

        let text = render_text(&conversion, "0.1.0");
        assert!(!text.contains("Dropped"));
        assert!(!text.contains("Document:"));
    }
}
