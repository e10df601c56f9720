//! Purchase order XML format handler

use crate::errors::MapperError;
use crate::formats::Format;
use crate::models_po::Document;
use log::debug;
use quick_xml::Reader;
use quick_xml::events::Event;
use quick_xml::se::Serializer;
use serde::Serialize;

/// Declaration written in front of every encoded document.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const ROOT_TAG: &str = "DOCUMENT";
const INDENT_SIZE: usize = 3;

/// Parse a purchase order document from raw bytes.
///
/// The buffer is scanned once with a plain `Reader` so that syntax problems
/// surface as `MalformedInput` before serde gets to report shape problems
/// as `SchemaMismatch`. The same pass collects the raw `PO_APPROVALS` text,
/// which serde's deserializer would trim.
pub fn decode(bytes: &[u8]) -> Result<Document, MapperError> {
    if Format::from_content(bytes) == Some(Format::Json) {
        return Err(MapperError::MalformedInput(
            "input looks like JSON, expected an XML document".to_string(),
        ));
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|e| MapperError::MalformedInput(format!("input is not valid UTF-8: {}", e)))?;

    let approvals = scan_structure(text)?;

    let mut doc: Document = quick_xml::de::from_str(text)?;
    if doc.pos.orders.len() != approvals.len() {
        return Err(MapperError::SchemaMismatch(format!(
            "found {} <PO> elements but decoded {} purchase orders",
            approvals.len(),
            doc.pos.orders.len()
        )));
    }
    for (order, raw) in doc.pos.orders.iter_mut().zip(approvals) {
        order.approvals = raw;
    }

    debug!("Decoded {}", doc.stats());
    Ok(doc)
}

const ORDER_PARENT: [&[u8]; 2] = [b"DOCUMENT", b"POS"];
const APPROVALS_PATH: [&[u8]; 4] = [b"DOCUMENT", b"POS", b"PO", b"PO_APPROVALS"];

fn at_path(stack: &[Vec<u8>], path: &[&[u8]]) -> bool {
    stack.len() == path.len() && stack.iter().zip(path).all(|(a, b)| a.as_slice() == *b)
}

/// Walks every event of the document, checking that it has exactly one
/// `<DOCUMENT>` root and that nothing is left open at the end.
///
/// Returns the approvals text of each `<PO>` in document order: the direct
/// character data of `<PO_APPROVALS>`, untrimmed, with child elements
/// skipped. An order without approvals gets an empty string.
fn scan_structure(text: &str) -> Result<Vec<String>, MapperError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut seen_root = false;
    let mut approvals: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                if stack.is_empty() {
                    check_root(&name, &mut seen_root)?;
                }
                if name == b"PO" && at_path(&stack, &ORDER_PARENT) {
                    approvals.push(String::new());
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = e.name();
                if stack.is_empty() {
                    check_root(name.as_ref(), &mut seen_root)?;
                }
                if name.as_ref() == b"PO" && at_path(&stack, &ORDER_PARENT) {
                    approvals.push(String::new());
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(t) => {
                if stack.is_empty() && t.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err(MapperError::MalformedInput(format!(
                        "text outside the root element at byte {}",
                        reader.buffer_position()
                    )));
                }
                if at_path(&stack, &APPROVALS_PATH) {
                    if let Some(raw) = approvals.last_mut() {
                        raw.push_str(&t.unescape()?);
                    }
                }
            }
            Event::CData(c) => {
                if stack.is_empty() {
                    return Err(MapperError::MalformedInput(
                        "CDATA outside the root element".to_string(),
                    ));
                }
                if at_path(&stack, &APPROVALS_PATH) {
                    if let Some(raw) = approvals.last_mut() {
                        raw.push_str(&String::from_utf8_lossy(&c));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(MapperError::MalformedInput(format!(
            "unexpected end of input with {} unclosed element(s)",
            stack.len()
        )));
    }
    if !seen_root {
        return Err(MapperError::MalformedInput(
            "no root element found".to_string(),
        ));
    }
    Ok(approvals)
}

fn check_root(name: &[u8], seen_root: &mut bool) -> Result<(), MapperError> {
    if *seen_root {
        return Err(MapperError::MalformedInput(
            "more than one root element".to_string(),
        ));
    }
    *seen_root = true;

    if name != ROOT_TAG.as_bytes() {
        return Err(MapperError::SchemaMismatch(format!(
            "expected root element <{}>, found <{}>",
            ROOT_TAG,
            String::from_utf8_lossy(name)
        )));
    }
    Ok(())
}

/// Serialize a document back to XML with the declaration header and
/// 3-space indentation.
pub fn encode_structured(doc: &Document) -> Result<Vec<u8>, MapperError> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', INDENT_SIZE);

    doc.serialize(serializer).map_err(|e| {
        MapperError::Serialization(format!("Failed to serialize document to XML: {}", e))
    })?;

    let mut output = Vec::with_capacity(XML_HEADER.len() + body.len());
    output.extend_from_slice(XML_HEADER.as_bytes());
    output.extend_from_slice(body.as_bytes());
    Ok(output)
}
