use clap::Parser;
use anyhow::Result;
use std::path::PathBuf;
use log::debug;

/// GStreamer registry inspector
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gstinspect")]
#[command(about = "Walks the GStreamer plugin registry and prints plugin, feature, pad template and property metadata")]
#[command(version)]
pub struct Args {
    /// Only report these plugins (by plugin name)
    #[arg(value_name = "PLUGIN")]
    pub plugins: Vec<String>,

    /// Report format: text or json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Do not instantiate elements to list their properties
    #[arg(long)]
    pub no_properties: bool,

    /// Leave blacklisted plugins out of the report
    #[arg(long)]
    pub skip_blacklisted: bool,

    /// Force coloured output even when stdout is not a terminal
    #[arg(long)]
    pub color: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug level logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (error level logging only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug output (trace level logging)
    #[arg(long)]
    pub debug: bool,

    /// Log format: text or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Log file path for file output
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level for file output (independent of console level)
    #[arg(long, value_name = "LEVEL")]
    pub log_file_level: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Configuration section name
    #[arg(long, value_name = "SECTION")]
    pub config_name: Option<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

/// Validate CLI argument combinations
pub fn validate_args(args: &Args) -> Result<()> {
    let log_flags_count = [args.verbose, args.quiet, args.debug]
        .iter()
        .filter(|&&flag| flag)
        .count();

    if log_flags_count > 1 {
        return Err(anyhow::anyhow!(
            "Conflicting log level flags: only one of --verbose, --quiet, or --debug may be specified"
        ));
    }

    if args.color && args.no_color {
        return Err(anyhow::anyhow!("--color and --no-color cannot be used together"));
    }

    if let Some(format) = &args.format {
        format
            .parse::<crate::report::OutputFormat>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    if let Some(format) = &args.log_format {
        format
            .parse::<crate::logging::LogFormat>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    if let Some(level) = &args.log_file_level {
        crate::logging::parse_log_level(level)?;
        if args.log_file.is_none() {
            return Err(anyhow::anyhow!("--log-file-level requires --log-file to be specified"));
        }
    }

    debug!("CLI arguments validated successfully");
    Ok(())
}
