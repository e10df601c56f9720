//! Main binary entry point for po-mapper.

use clap::Parser;
use po_mapper::Config;
use po_mapper::errors::MapperError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = "po.xml")]
    input: PathBuf,

    #[arg(short = 'x', long, value_name = "FILE", default_value = "new.xml")]
    xml_output: PathBuf,

    #[arg(short = 'j', long, value_name = "FILE", default_value = "new.json")]
    json_output: PathBuf,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long, help = "Do not echo the first order and the XML output")]
    quiet: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_app() -> Result<(), MapperError> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config {
        input_file: cli.input,
        xml_output_file: cli.xml_output,
        json_output_file: cli.json_output,
        echo: !cli.quiet,
    };

    let stats = po_mapper::run(&config)?;
    log::info!("Converted {}", stats);
    Ok(())
}

fn main() -> ExitCode {
    match run_app() {
        Ok(_) => {
            log::info!("Conversion completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            ExitCode::FAILURE
        }
    }
}
