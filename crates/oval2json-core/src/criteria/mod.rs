pub mod model;
pub mod resolve;
pub mod tree;

pub use model::{Atom, CriteriaNode, CriteriaTerm};
pub use resolve::resolve_criterion;
pub use tree::build_criteria;
