//! Main library for the purchase order mapper.
//!
//! This crate maps a fixed-schema purchase order XML document onto a typed
//! record tree and writes that tree back out as indented XML and as
//! single-line JSON.

pub mod errors;
pub mod formats;
pub mod models_po;
pub mod report;

use errors::MapperError;
use formats::Format;
use log::{info, warn};
use models_po::DocumentStats;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Top-level configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub xml_output_file: PathBuf,
    pub json_output_file: PathBuf,
    /// Print the first order and the XML output to stdout.
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("po.xml"),
            xml_output_file: PathBuf::from("new.xml"),
            json_output_file: PathBuf::from("new.json"),
            echo: true,
        }
    }
}

/// The main entry point for the conversion logic.
///
/// Reads and decodes the input, builds both encodings in memory, then writes
/// them in order: XML first, JSON second. Any failure stops the run; nothing
/// is written unless decoding and both encodings succeeded.
pub fn run(config: &Config) -> Result<DocumentStats, MapperError> {
    let start_time = Instant::now();
    info!("Starting conversion");
    info!("  Input: {}", config.input_file.display());
    info!("  XML output: {}", config.xml_output_file.display());
    info!("  JSON output: {}", config.json_output_file.display());

    check_output_extension(&config.xml_output_file, Format::Xml);
    check_output_extension(&config.json_output_file, Format::Json);

    // --- 1. Load and decode ---
    let bytes = fs::read(&config.input_file)
        .map_err(|e| MapperError::InputRead(e, config.input_file.clone()))?;

    let decode_start = Instant::now();
    let doc = formats::xml::decode(&bytes)?;
    let stats = doc.stats();
    info!("Decoded {} (Took {:.2?})", stats, decode_start.elapsed());

    // --- 2. Encode both formats ---
    let xml_output = formats::encode(&doc, Format::Xml)?;
    let json_output = formats::encode(&doc, Format::Json)?;

    // --- 3. Echo ---
    if config.echo {
        match report::first_order_summary(&doc) {
            Ok(summary) => println!("{}", summary),
            Err(e) => warn!("{}", e),
        }
        println!();
        println!("{}", report::output_banner());
        println!();
        println!("{}", String::from_utf8_lossy(&xml_output));
    }

    // --- 4. Persist ---
    write_output(&config.xml_output_file, &xml_output)?;
    write_output(&config.json_output_file, &json_output)?;

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(stats)
}

fn write_output(path: &Path, contents: &[u8]) -> Result<(), MapperError> {
    fs::write(path, contents).map_err(|e| MapperError::OutputWrite(e, path.to_path_buf()))?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn check_output_extension(path: &Path, format: Format) {
    if let Some(detected) = Format::from_extension(path) {
        if detected != format {
            warn!(
                "{} will contain {} despite its .{} extension",
                path.display(),
                format.extension().to_uppercase(),
                detected.extension()
            );
        }
    }
}
