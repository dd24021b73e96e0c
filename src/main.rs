use anyhow::Result;
use std::process;
use log::error;

use gstinspect::{app, cli, logging};

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Application panicked: {}", panic_info);
        eprintln!("Panic: {}", panic_info);
        process::exit(101);
    }));

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args();
    cli::validate_args(&args)?;

    let config_manager = app::load_configuration(&args)?;

    let log_config = app::configure_logging(&args, &config_manager)?;
    logging::init_logger(log_config)?;

    let colour_config = app::configure_colours(&args, &config_manager)?;
    let (format, options) = app::configure_inspection(&args, &config_manager)?;

    app::run_inspection(format, options, colour_config)
}
