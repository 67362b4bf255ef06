pub mod read;

pub use read::{DocumentSource, read_document, read_stdin};
