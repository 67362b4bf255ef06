use std::collections::HashMap;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::oval::{self, ns};

/// Subject named by an OVAL object: a package name or a file basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub id: String,
    pub name: String,
}

/// Object id → subject name.
#[derive(Debug, Clone, Default)]
pub struct ObjectIndex {
    subjects: HashMap<String, SubjectRecord>,
}

impl ObjectIndex {
    /// Index every object that declares an id and yields a subject name.
    ///
    /// Objects of any other kind are left out; tests pointing at them will
    /// not resolve.
    pub fn build(doc: &Document<'_>) -> Self {
        let mut subjects = HashMap::new();

        for node in oval::section_entries(doc, "objects") {
            let Some(id) = oval::attr(node, "id") else {
                debug!(tag = node.tag_name().name(), "skipping object without id");
                continue;
            };

            match subject_name(node) {
                Some(name) => {
                    subjects.insert(
                        id.to_string(),
                        SubjectRecord {
                            id: id.to_string(),
                            name,
                        },
                    );
                }
                None => debug!(id, "skipping object without a derivable name"),
            }
        }

        Self { subjects }
    }

    pub fn get(&self, id: &str) -> Option<&SubjectRecord> {
        self.subjects.get(id)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

fn subject_name(node: Node<'_, '_>) -> Option<String> {
    let kind = node.tag_name().name();

    if kind.ends_with("rpminfo_object") {
        let name = oval::child_named(node, ns::LINUX, "name").and_then(oval::text)?;
        Some(name.to_string())
    } else if kind.ends_with("rpmverifyfile_object") {
        let path = oval::child_named(node, ns::LINUX, "filepath").and_then(oval::text)?;
        basename(path).map(str::to_string)
    } else {
        None
    }
}

/// Final `/`-separated component. `None` when the path ends in a separator.
fn basename(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|b| !b.is_empty())
}
