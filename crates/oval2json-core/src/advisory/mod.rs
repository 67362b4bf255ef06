pub mod extract;
pub mod model;

pub use extract::{extract_advisories, extract_advisory};
pub use model::{AdvisoryDocument, AdvisoryRecord};
