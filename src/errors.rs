//! Defines the custom error types for the application.
//!
//! Each variant names the pipeline stage that failed, so the binary can
//! report a single diagnostic without further context.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Failed to read input file {1}")]
    InputRead(#[source] std::io::Error, PathBuf),

    #[error("Malformed XML input: {0}")]
    MalformedInput(String),

    #[error("Document does not match the purchase order schema: {0}")]
    SchemaMismatch(String),

    #[error("Document contains no purchase orders")]
    EmptyDocument,

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Failed to write output file {1}")]
    OutputWrite(#[source] std::io::Error, PathBuf),
}

impl From<quick_xml::DeError> for MapperError {
    fn from(err: quick_xml::DeError) -> Self {
        use quick_xml::DeError;

        match err {
            DeError::InvalidXml(e) => MapperError::MalformedInput(e.to_string()),
            DeError::UnexpectedEof => {
                MapperError::MalformedInput("unexpected end of input".to_string())
            }
            other => MapperError::SchemaMismatch(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for MapperError {
    fn from(err: quick_xml::Error) -> Self {
        MapperError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_de_error_classification() {
        let custom = quick_xml::DeError::Custom("missing field `POS`".to_string());
        assert!(matches!(
            MapperError::from(custom),
            MapperError::SchemaMismatch(msg) if msg.contains("POS")
        ));

        assert!(matches!(
            MapperError::from(quick_xml::DeError::UnexpectedEof),
            MapperError::MalformedInput(_)
        ));
    }

    #[test]
    fn test_io_errors_keep_source() {
        let err = MapperError::InputRead(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            PathBuf::from("po.xml"),
        );
        assert_eq!(err.to_string(), "Failed to read input file po.xml");
        assert_eq!(err.source().unwrap().to_string(), "gone");
    }
}
