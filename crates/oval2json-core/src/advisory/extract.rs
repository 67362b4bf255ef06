use roxmltree::{Document, Node};

use crate::advisory::model::AdvisoryRecord;
use crate::criteria::build_criteria;
use crate::error::Unresolved;
use crate::index::IndexSet;
use crate::oval::{self, ns};
use crate::report::Diagnostics;

/// Convert every `/oval_definitions/definitions/definition`, in order.
///
/// Definitions without a metadata block are dropped and recorded.
pub fn extract_advisories(
    doc: &Document<'_>,
    indexes: &IndexSet,
    diagnostics: &mut Diagnostics,
) -> Vec<AdvisoryRecord> {
    let root = doc.root_element();
    if !root.has_tag_name((ns::DEFINITIONS, "oval_definitions")) {
        return Vec::new();
    }

    let mut advisories = Vec::new();

    for definition in oval::children_named(root, ns::DEFINITIONS, "definitions")
        .flat_map(|defs| oval::children_named(defs, ns::DEFINITIONS, "definition"))
    {
        diagnostics.definitions_seen += 1;

        if let Some(advisory) = extract_advisory(definition, indexes, diagnostics) {
            advisories.push(advisory);
        }
    }

    advisories
}

/// Convert one `definition` element. `None` when it has no metadata.
pub fn extract_advisory(
    definition: Node<'_, '_>,
    indexes: &IndexSet,
    diagnostics: &mut Diagnostics,
) -> Option<AdvisoryRecord> {
    let Some(metadata) = oval::child_named(definition, ns::DEFINITIONS, "metadata") else {
        diagnostics.record(Unresolved::MissingMetadata {
            definition_id: definition.attribute("id").unwrap_or_default().to_string(),
        });
        return None;
    };

    let title = first_text(metadata, "title");

    let fixes_cve = oval::children_named(metadata, ns::DEFINITIONS, "reference")
        .filter(|r| r.attribute("source") == Some("CVE"))
        .filter_map(|r| r.attribute("ref_id"))
        .map(str::to_string)
        .collect();

    let block = oval::child_named(metadata, ns::DEFINITIONS, "advisory");
    let severity = block.map(|b| first_text(b, "severity")).unwrap_or_default();
    let affected_cpe = block.map(affected_cpe).unwrap_or_default();

    let criteria = oval::child_named(definition, ns::DEFINITIONS, "criteria")
        .map(|root| build_criteria(root, indexes, diagnostics))
        .into_iter()
        .collect();

    Some(AdvisoryRecord {
        title,
        fixes_cve,
        severity,
        affected_cpe,
        criteria,
    })
}

fn first_text(node: Node<'_, '_>, local: &'static str) -> String {
    oval::children_named(node, ns::DEFINITIONS, local)
        .find_map(oval::text)
        .unwrap_or_default()
        .to_string()
}

/// `cpe` entries of every `affected_cpe_list`.
///
/// Red Hat feeds put `cpe` in the definitions namespace; the common
/// namespace is accepted as well.
fn affected_cpe(block: Node<'_, '_>) -> Vec<String> {
    oval::children_named(block, ns::DEFINITIONS, "affected_cpe_list")
        .flat_map(|list| oval::element_children(list))
        .filter(|c| c.has_tag_name((ns::COMMON, "cpe")) || c.has_tag_name((ns::DEFINITIONS, "cpe")))
        .filter_map(oval::text)
        .map(str::to_string)
        .collect()
}
