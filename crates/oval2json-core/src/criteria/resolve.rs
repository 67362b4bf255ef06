use crate::criteria::model::{Atom, CriteriaNode};
use crate::error::Unresolved;
use crate::index::IndexSet;

/// Resolve a criterion's test reference into a criteria node.
///
/// Joins test → object and test → state. Produces one atom per state
/// condition, in state order, under an `and`. A `none satisfy` check wraps
/// the conjunction in `not`; every other check value leaves it bare.
///
/// Any missing link yields an [`Unresolved`] and the caller drops the leaf.
pub fn resolve_criterion(test_ref: &str, indexes: &IndexSet) -> Result<CriteriaNode, Unresolved> {
    let test = indexes.tests.get(test_ref).ok_or_else(|| Unresolved::Test {
        test_ref: test_ref.to_string(),
    })?;

    let subject = indexes
        .objects
        .get(&test.object_ref)
        .ok_or_else(|| Unresolved::Object {
            test_ref: test_ref.to_string(),
            object_ref: test.object_ref.clone(),
        })?;

    let state = indexes
        .states
        .get(&test.state_ref)
        .ok_or_else(|| Unresolved::State {
            test_ref: test_ref.to_string(),
            state_ref: test.state_ref.clone(),
        })?;

    let atoms: Vec<Atom> = state
        .conditions
        .iter()
        .map(|c| Atom {
            kind: c.kind.clone(),
            subject: subject.name.clone(),
            operation: c.operation.clone(),
            value: c.value.clone(),
        })
        .collect();

    // The state index never stores empty condition lists.
    if atoms.is_empty() {
        return Err(Unresolved::EmptyConditions {
            test_ref: test_ref.to_string(),
        });
    }

    let block = CriteriaNode::all_of(atoms);

    Ok(if test.negated() { block.negate() } else { block })
}
