//! Registry walk
//!
//! A single pass over the registry: enumerate plugins, apply the name
//! filter, read each plugin's features and hand them to the report writer.

use log::{debug, info, warn};

use crate::registry::{InspectError, InspectResult, PluginInfo, ReadOptions, RegistrySource};
use crate::report::{InspectSummary, ReportWriter};

/// Which plugins to report and how much to read for each
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectOptions {
    /// Only report plugins with these names; empty means every plugin
    pub plugin_names: Vec<String>,
    /// Leave blacklisted plugins out of the report
    pub skip_blacklisted: bool,
    pub read: ReadOptions,
}

impl InspectOptions {
    fn named(&self, plugin: &PluginInfo) -> bool {
        self.plugin_names.is_empty() || self.plugin_names.iter().any(|name| *name == plugin.name)
    }

    fn skips(&self, plugin: &PluginInfo) -> bool {
        self.skip_blacklisted && plugin.blacklisted
    }
}

/// Drives one inspection run over a registry source
pub struct Inspector<'a, S: RegistrySource + ?Sized> {
    source: &'a S,
    options: InspectOptions,
}

impl<'a, S: RegistrySource + ?Sized> Inspector<'a, S> {
    pub fn new(source: &'a S, options: InspectOptions) -> Self {
        Self { source, options }
    }

    /// Walk the registry, writing every selected plugin to `writer`
    pub fn run(&self, writer: &mut dyn ReportWriter) -> InspectResult<InspectSummary> {
        let mut summary = InspectSummary::default();
        let mut found: Vec<&str> = Vec::new();

        let plugins = self.source.plugins()?;
        debug!("Inspecting {} registered plugins", plugins.len());

        for plugin in plugins.iter().filter(|p| self.options.named(p)) {
            found.push(&plugin.name);
            if self.options.skips(plugin) {
                if self.options.plugin_names.is_empty() {
                    debug!("Skipping blacklisted plugin {}", plugin.name);
                } else {
                    warn!("Plugin {} is blacklisted and was skipped", plugin.name);
                }
                continue;
            }

            let features = self.source.features(plugin, &self.options.read)?;
            debug!("Plugin {} has {} features", plugin.name, features.len());

            writer.plugin(plugin, &features)?;
            summary.add_plugin(features.len());
        }

        let missing: Vec<String> = self
            .options
            .plugin_names
            .iter()
            .filter(|name| !found.contains(&name.as_str()))
            .cloned()
            .collect();
        for name in &missing {
            warn!("No plugin named {} in the registry", name);
        }
        if missing.len() == self.options.plugin_names.len() && !missing.is_empty() {
            return Err(InspectError::NoMatchingPlugins { names: missing });
        }

        writer.finish(&summary)?;
        info!("Reported {} plugins with {} features", summary.plugins, summary.features);
        Ok(summary)
    }
}
