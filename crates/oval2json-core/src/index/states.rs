use std::collections::HashMap;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::oval;

pub const DEFAULT_OPERATION: &str = "equals";

/// One expected property of a state: `(type, operation, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionRecord {
    pub kind: String,
    pub operation: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub id: String,
    /// Never empty; ordered as in the document.
    pub conditions: Vec<ConditionRecord>,
}

/// State id → ordered condition list.
#[derive(Debug, Clone, Default)]
pub struct StateIndex {
    states: HashMap<String, StateRecord>,
}

impl StateIndex {
    pub fn build(doc: &Document<'_>) -> Self {
        let mut states = HashMap::new();

        for node in oval::section_entries(doc, "states") {
            let Some(id) = oval::attr(node, "id") else {
                debug!(tag = node.tag_name().name(), "skipping state without id");
                continue;
            };

            let conditions: Vec<ConditionRecord> =
                oval::element_children(node).map(condition).collect();

            if conditions.is_empty() {
                debug!(id, "skipping state without conditions");
                continue;
            }

            states.insert(
                id.to_string(),
                StateRecord {
                    id: id.to_string(),
                    conditions,
                },
            );
        }

        Self { states }
    }

    pub fn get(&self, id: &str) -> Option<&StateRecord> {
        self.states.get(id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

fn condition(child: Node<'_, '_>) -> ConditionRecord {
    ConditionRecord {
        kind: condition_type(child.tag_name().name()),
        operation: oval::attr(child, "operation")
            .unwrap_or(DEFAULT_OPERATION)
            .to_string(),
        value: child.text().map(str::to_string),
    }
}

/// Local tag name with a trailing `keyid` rewritten to `_keyid`.
fn condition_type(local: &str) -> String {
    match local.strip_suffix("keyid") {
        Some(stem) => format!("{stem}_keyid"),
        None => local.to_string(),
    }
}
