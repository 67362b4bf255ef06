//! Namespace-aware access to the OVAL node tree.
//!
//! Everything downstream reads the document through these helpers so the
//! "empty attribute means absent" rule is applied in one place.

pub mod ns;

use roxmltree::{Document, Node};

use crate::error::ConvertError;

/// Parse OVAL text into a node tree. Malformed markup is fatal.
pub fn parse_document(text: &str) -> Result<Document<'_>, ConvertError> {
    Ok(Document::parse(text)?)
}

/// Direct element children, in document order.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// Direct element children with the given namespace and local name.
pub fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &'static str,
    local: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    element_children(node).filter(move |c| c.has_tag_name((namespace, local)))
}

/// First direct element child with the given namespace and local name.
pub fn child_named<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &'static str,
    local: &'static str,
) -> Option<Node<'a, 'input>> {
    children_named(node, namespace, local).next()
}

/// First descendant element (excluding `node` itself) with the given name.
pub fn descendant_named<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &'static str,
    local: &'static str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|d| d.is_element() && d.has_tag_name((namespace, local)))
}

/// Attribute value, treating an empty string as absent.
pub fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|v| !v.is_empty())
}

/// Leading text of an element, treating an empty string as absent.
pub fn text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text().filter(|t| !t.is_empty())
}

/// Every element child of every `<definitions-ns:{section}>` element.
///
/// Covers `objects`, `states` and `tests`, wherever they sit in the tree.
pub fn section_entries<'a, 'input>(
    doc: &'a Document<'input>,
    section: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    doc.descendants()
        .filter(move |n| n.is_element() && n.has_tag_name((ns::DEFINITIONS, section)))
        .flat_map(|section| element_children(section))
}
