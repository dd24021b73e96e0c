//! JSON report
//!
//! Collects every plugin and writes one pretty-printed document when the
//! walk finishes.

use std::io::Write;

use serde::Serialize;

use crate::registry::{Feature, InspectResult, PluginInfo};

use super::{InspectSummary, ReportWriter};

#[derive(Debug, Serialize)]
struct PluginEntry {
    #[serde(flatten)]
    plugin: PluginInfo,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    plugins: &'a [PluginEntry],
    total: &'a InspectSummary,
}

/// Buffers the report and writes it as JSON to `out` on finish
pub struct JsonReport<W: Write> {
    out: W,
    plugins: Vec<PluginEntry>,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            plugins: Vec::new(),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for JsonReport<W> {
    fn plugin(&mut self, plugin: &PluginInfo, features: &[Feature]) -> InspectResult<()> {
        self.plugins.push(PluginEntry {
            plugin: plugin.clone(),
            features: features.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self, summary: &InspectSummary) -> InspectResult<()> {
        let document = Document {
            plugins: &self.plugins,
            total: summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
