//! Console output for a conversion run.

use crate::errors::MapperError;
use crate::models_po::Document;
use colored::Colorize;

/// Debug dump of the first purchase order followed by its key fields.
pub fn first_order_summary(doc: &Document) -> Result<String, MapperError> {
    let order = doc.first_order()?;
    Ok(format!(
        "{:#?}\nSid: {}, Vendor: {}, Date: {}",
        order, order.po_sid, order.vend_code, order.created_date
    ))
}

/// Banner printed between the summary and the echoed XML output.
pub fn output_banner() -> String {
    format!("------- {} -------", "Output".bold())
}
