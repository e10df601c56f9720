//! Format detection and dispatch.
//!
//! A document is always read from XML and written back in both formats;
//! this module names the two formats and routes encoding to the right
//! handler.

pub mod json;
pub mod xml;

use crate::errors::MapperError;
use crate::models_po::Document;
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Indented XML with declaration header
    Xml,
    /// Single-line JSON
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|s| s.to_str())?;

        match extension.to_lowercase().as_str() {
            "json" => Some(Format::Json),
            "xml" => Some(Format::Xml),
            _ => None,
        }
    }

    /// Detect format from the first non-whitespace byte
    pub fn from_content(content: &[u8]) -> Option<Self> {
        match content.iter().find(|b| !b.is_ascii_whitespace())? {
            b'{' | b'[' => Some(Format::Json),
            b'<' => Some(Format::Xml),
            _ => None,
        }
    }

    /// Get the typical file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

/// Encode a document in the given format.
pub fn encode(doc: &Document, format: Format) -> Result<Vec<u8>, MapperError> {
    match format {
        Format::Xml => xml::encode_structured(doc),
        Format::Json => json::encode_compact(doc),
    }
}
