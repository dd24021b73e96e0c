//! Application initialization and configuration

use anyhow::Result;
use log::{debug, warn, LevelFilter};
use crate::{cli, config, display, logging};
use crate::inspect::InspectOptions;
use crate::registry::ReadOptions;
use crate::report::OutputFormat;

pub fn load_configuration(args: &cli::Args) -> Result<config::ConfigManager> {
    let mut manager = match &args.config_file {
        Some(config_file) => config::ConfigManager::load_from_file(config_file.clone())?,
        None => config::ConfigManager::load()?,
    };

    if let Some(section_name) = &args.config_name {
        match manager.config_file_path() {
            Some(path) => debug!("Using section [{}] of {}", section_name, path.display()),
            None => warn!("Configuration section {} requested but no configuration file was found", section_name),
        }
        manager.select_section(section_name.clone());
    }

    Ok(manager)
}

/// Build the logging configuration. CLI flags win over the config file.
pub fn configure_logging(args: &cli::Args, config: &config::ConfigManager) -> Result<logging::LogConfig> {
    let console_level = if args.debug {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        config.get_log_level("base", "console-level")?.unwrap_or(LevelFilter::Warn)
    };

    let configured_format = config.get_value("base", "log-format").map(String::as_str);
    let format: logging::LogFormat = match args.log_format.as_deref().or(configured_format) {
        Some(format) => format.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => logging::LogFormat::Text,
    };

    let log_file = args.log_file.clone().or_else(|| config.get_path("base", "log-file"));
    let file_level = match &args.log_file_level {
        Some(level) => Some(logging::parse_log_level(level)?),
        None => config.get_log_level("base", "file-log-level")?,
    };

    let file = match (log_file, file_level) {
        (Some(path), Some(level)) => Some((path, level)),
        (Some(path), None) => Some((path, console_level)),
        (None, Some(_)) => {
            return Err(anyhow::anyhow!("A log file level was set without a log file"));
        }
        (None, None) => None,
    };

    Ok(logging::LogConfig {
        console_level,
        file,
        format,
    })
}

/// Colour configuration. Precedence: --no-color > --color > config file > TTY detection
pub fn configure_colours(args: &cli::Args, config: &config::ConfigManager) -> Result<display::ColourConfig> {
    if args.no_color {
        return Ok(display::ColourConfig::disabled());
    }

    let mut colour_config = config.get_colour_config()?;
    if args.color {
        colour_config.set_color_forced(true);
    }
    Ok(colour_config)
}

/// Resolve the report format and inspection options from CLI and config
pub fn configure_inspection(
    args: &cli::Args,
    config: &config::ConfigManager,
) -> Result<(OutputFormat, InspectOptions)> {
    let settings = config.get_inspect_settings()?;

    let format: OutputFormat = match &args.format {
        Some(format) => format.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => settings.format,
    };

    let options = InspectOptions {
        plugin_names: args.plugins.clone(),
        skip_blacklisted: args.skip_blacklisted || settings.skip_blacklisted,
        read: ReadOptions {
            element_properties: !args.no_properties && settings.properties,
        },
    };

    debug!("Report format {:?}, options {:?}", format, options);
    Ok((format, options))
}
