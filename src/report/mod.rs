//! Report writers
//!
//! The inspector hands each plugin and its features to a [`ReportWriter`].
//! [`TextReport`] streams an indented human-readable dump; [`JsonReport`]
//! collects everything and writes a single document at the end.

pub mod json;
pub mod text;

use serde::Serialize;

use crate::registry::{Feature, InspectResult, PluginInfo};

pub use json::JsonReport;
pub use text::TextReport;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}. Valid options: text, json", s)),
        }
    }
}

/// Totals for one inspection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InspectSummary {
    pub plugins: usize,
    pub features: usize,
}

impl InspectSummary {
    pub fn add_plugin(&mut self, features: usize) {
        self.plugins += 1;
        self.features += features;
    }
}

/// Receives the registry walk one plugin at a time
pub trait ReportWriter {
    /// Report one plugin together with all of its features
    fn plugin(&mut self, plugin: &PluginInfo, features: &[Feature]) -> InspectResult<()>;

    /// Called once after the last plugin
    fn finish(&mut self, summary: &InspectSummary) -> InspectResult<()>;
}
