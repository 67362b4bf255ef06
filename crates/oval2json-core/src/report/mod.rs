pub mod diagnostics;
pub mod model;
pub mod render;

pub use diagnostics::Diagnostics;
pub use model::{Conversion, DocumentInfo};
