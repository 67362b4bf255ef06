use tracing::warn;

use crate::error::Unresolved;
use crate::index::IndexSet;

/// Side channel for records dropped during a conversion.
///
/// Drops never change the output shape; they are logged and kept here so
/// callers can tell a clean conversion from a lossy one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub objects_indexed: usize,
    pub states_indexed: usize,
    pub tests_indexed: usize,
    pub definitions_seen: usize,
    pub dropped: Vec<Unresolved>,
}

impl Diagnostics {
    pub fn for_indexes(indexes: &IndexSet) -> Self {
        Self {
            objects_indexed: indexes.objects.len(),
            states_indexed: indexes.states.len(),
            tests_indexed: indexes.tests.len(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, reason: Unresolved) {
        warn!(%reason, "dropped unresolved record");
        self.dropped.push(reason);
    }

    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }
}
