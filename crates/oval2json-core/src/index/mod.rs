//! Cross-reference indexes built once per conversion.
//!
//! Build order is objects, states, tests. After [`IndexSet::build`] returns
//! the set is read-only and is passed by reference to every resolver call.

pub mod objects;
pub mod states;

pub use objects::{ObjectIndex, SubjectRecord};
pub use states::{ConditionRecord, StateIndex, StateRecord};
pub use oval_tests::{TestIndex, TestRecord};

use roxmltree::Document;
use tracing::debug;

/// The three indexes owned by a single conversion.
#[derive(Debug, Clone, Default)]
pub struct IndexSet {
    pub objects: ObjectIndex,
    pub states: StateIndex,
    pub tests: TestIndex,
}

impl IndexSet {
    pub fn build(doc: &Document<'_>) -> Self {
        let objects = ObjectIndex::build(doc);
        let states = StateIndex::build(doc);
        let tests = TestIndex::build(doc);

        debug!(
            objects = objects.len(),
            states = states.len(),
            tests = tests.len(),
            "indexes built"
        );

        Self {
            objects,
            states,
            tests,
        }
    }
}
