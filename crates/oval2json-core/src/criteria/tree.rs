use roxmltree::Node;

use crate::criteria::model::{CriteriaNode, CriteriaTerm};
use crate::criteria::resolve::resolve_criterion;
use crate::error::Unresolved;
use crate::index::IndexSet;
use crate::oval;
use crate::report::Diagnostics;

/// Recursively convert a `criteria` element into a group node.
///
/// Nested `criteria` recurse, `criterion` leaves go through
/// [`resolve_criterion`]. Leaves that do not resolve are dropped and
/// recorded. The group is returned even when no child survives.
pub fn build_criteria(
    node: Node<'_, '_>,
    indexes: &IndexSet,
    diagnostics: &mut Diagnostics,
) -> CriteriaNode {
    // Verbatim, lower-cased; an undeclared operator is the empty string.
    let operator = node.attribute("operator").unwrap_or("").to_lowercase();

    let mut terms = Vec::new();

    for child in oval::element_children(node) {
        let resolved = match child.tag_name().name() {
            "criteria" => Ok(build_criteria(child, indexes, diagnostics)),
            "criterion" => match oval::attr(child, "test_ref") {
                Some(test_ref) => resolve_criterion(test_ref, indexes),
                None => Err(Unresolved::MissingTestRef),
            },
            other => Err(Unresolved::UnsupportedChild {
                tag: other.to_string(),
            }),
        };

        match resolved {
            Ok(term) => terms.push(CriteriaTerm::Node(term)),
            Err(reason) => diagnostics.record(reason),
        }
    }

    CriteriaNode::group(operator, terms)
}
