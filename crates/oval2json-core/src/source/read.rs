use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::io::Read;
use std::{fs, path::Path};

use crate::error::ConvertError;
use crate::report::DocumentInfo;

/// Raw OVAL document handed to the conversion pipeline.
///
/// Holds the exact text converted and a fingerprint of the bytes it was
/// decoded from.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    /// Optional source path (informational only).
    pub path: Option<String>,

    /// UTF-8 document text.
    pub text: String,

    pub size_bytes: u64,

    /// Hex-encoded SHA-256 of the input bytes.
    pub sha256: String,
}

impl DocumentSource {
    /// Decode `bytes` as UTF-8 and fingerprint them.
    pub fn from_bytes(path: Option<String>, bytes: Vec<u8>) -> Result<Self, ConvertError> {
        let digest = Sha256::digest(&bytes);
        let size_bytes = bytes.len() as u64;

        let text = String::from_utf8(bytes).map_err(|e| ConvertError::Encoding(e.utf8_error()))?;

        Ok(Self {
            path,
            text,
            size_bytes,
            sha256: hex::encode(digest),
        })
    }

    /// Report-facing metadata. Drops the document text.
    pub fn info(&self) -> DocumentInfo {
        DocumentInfo {
            path: self.path.clone(),
            size_bytes: self.size_bytes,
            sha256: self.sha256.clone(),
        }
    }
}

/// Read an OVAL document from disk.
pub fn read_document(path: &Path) -> Result<DocumentSource> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read document: {}", path.display()))?;

    Ok(DocumentSource::from_bytes(
        Some(path.display().to_string()),
        bytes,
    )?)
}

/// Read an OVAL document from standard input until EOF.
pub fn read_stdin() -> Result<DocumentSource> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("failed to read document from stdin")?;

    Ok(DocumentSource::from_bytes(None, bytes)?)
}
