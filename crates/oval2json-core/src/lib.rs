pub mod advisory;
pub mod criteria;
pub mod error;
pub mod index;
pub mod oval;
pub mod report;
pub mod source;

use tracing::debug;

use crate::advisory::{AdvisoryDocument, extract_advisories};
use crate::error::ConvertError;
use crate::index::IndexSet;
use crate::report::{Conversion, Diagnostics};
use crate::source::DocumentSource;

pub const TOOL_NAME: &str = "oval2json";

/// Convert OVAL definitions text into advisory records.
///
/// Only malformed markup fails. Unresolvable references drop the affected
/// leaf or definition and are reported through [`Conversion::diagnostics`].
pub fn convert(text: &str) -> Result<Conversion, ConvertError> {
    let doc = oval::parse_document(text)?;

    // Owned by this call; never shared between conversions.
    let indexes = IndexSet::build(&doc);
    let mut diagnostics = Diagnostics::for_indexes(&indexes);

    let advisory = extract_advisories(&doc, &indexes, &mut diagnostics);

    debug!(
        advisories = advisory.len(),
        definitions = diagnostics.definitions_seen,
        dropped = diagnostics.dropped.len(),
        "conversion finished"
    );

    Ok(Conversion {
        output: AdvisoryDocument { advisory },
        diagnostics,
        document: None,
    })
}

/// [`convert`] a read document, keeping its fingerprint for reporting.
pub fn convert_source(source: &DocumentSource) -> Result<Conversion, ConvertError> {
    let mut conversion = convert(&source.text)?;
    conversion.document = Some(source.info());
    Ok(conversion)
}
