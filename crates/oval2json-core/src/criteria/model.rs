use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};

/// Single comparison: `[type, subject, operation, value]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub kind: String,
    pub subject: String,
    pub operation: String,
    pub value: Option<String>,
}

impl Serialize for Atom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.kind)?;
        tuple.serialize_element(&self.subject)?;
        tuple.serialize_element(&self.operation)?;
        tuple.serialize_element(&self.value)?;
        tuple.end()
    }
}

/// Boolean expression over atoms.
///
/// Group operators are open strings (`"and"`, `"or"`, or whatever
/// lower-cased operator the document declares). Serialized as a single-key
/// object: `{"and": [...]}`, `{"not": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaNode {
    Group {
        operator: String,
        terms: Vec<CriteriaTerm>,
    },
    Not(Box<CriteriaNode>),
}

/// Member of a group: a nested node or an atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CriteriaTerm {
    Node(CriteriaNode),
    Atom(Atom),
}

impl CriteriaNode {
    pub fn group(operator: impl Into<String>, terms: Vec<CriteriaTerm>) -> Self {
        Self::Group {
            operator: operator.into(),
            terms,
        }
    }

    /// Implicit conjunction of a resolved state's atoms.
    pub fn all_of(atoms: Vec<Atom>) -> Self {
        Self::group("and", atoms.into_iter().map(CriteriaTerm::Atom).collect())
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Number of atoms anywhere below this node.
    pub fn atom_count(&self) -> usize {
        match self {
            Self::Group { terms, .. } => terms
                .iter()
                .map(|t| match t {
                    CriteriaTerm::Node(n) => n.atom_count(),
                    CriteriaTerm::Atom(_) => 1,
                })
                .sum(),
            Self::Not(inner) => inner.atom_count(),
        }
    }
}

impl Serialize for CriteriaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Group { operator, terms } => map.serialize_entry(operator, terms)?,
            Self::Not(inner) => map.serialize_entry("not", inner)?,
        }
        map.end()
    }
}

impl From<CriteriaNode> for CriteriaTerm {
    fn from(node: CriteriaNode) -> Self {
        Self::Node(node)
    }
}
