use thiserror::Error;

/// Failures that abort a whole conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("malformed OVAL document: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Reasons a criterion leaf or a definition is dropped from the output.
///
/// None of these abort the conversion. They are collected into
/// [`crate::report::Diagnostics`] and logged at `warn` level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolved {
    #[error("test `{test_ref}` is not indexed")]
    Test { test_ref: String },

    #[error("object `{object_ref}` referenced by test `{test_ref}` has no subject name")]
    Object { test_ref: String, object_ref: String },

    #[error("state `{state_ref}` referenced by test `{test_ref}` has no conditions")]
    State { test_ref: String, state_ref: String },

    #[error("test `{test_ref}` resolved to an empty condition list")]
    EmptyConditions { test_ref: String },

    #[error("criterion without test_ref")]
    MissingTestRef,

    #[error("unsupported criteria child `{tag}`")]
    UnsupportedChild { tag: String },

    #[error("definition `{definition_id}` has no metadata block")]
    MissingMetadata { definition_id: String },
}
