//! In-memory registry source
//!
//! Holds a fixed set of plugins and features. Used to drive the inspector
//! and the report writers without a GStreamer installation.

use super::error::InspectResult;
use super::model::{Feature, FeatureKind, PluginInfo, Properties};
use super::{ReadOptions, RegistrySource};

#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    plugins: Vec<(PluginInfo, Vec<Feature>)>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin and its features, keeping insertion order
    pub fn with_plugin(mut self, plugin: PluginInfo, features: Vec<Feature>) -> Self {
        self.plugins.push((plugin, features));
        self
    }
}

impl RegistrySource for MemoryRegistry {
    fn plugins(&self) -> InspectResult<Vec<PluginInfo>> {
        Ok(self.plugins.iter().map(|(plugin, _)| plugin.clone()).collect())
    }

    fn features(&self, plugin: &PluginInfo, options: &ReadOptions) -> InspectResult<Vec<Feature>> {
        let mut features: Vec<Feature> = self
            .plugins
            .iter()
            .find(|(p, _)| p.name == plugin.name)
            .map(|(_, features)| features.clone())
            .unwrap_or_default();

        if !options.element_properties {
            for feature in &mut features {
                if let FeatureKind::Element(info) = &mut feature.kind {
                    info.properties = Properties::Skipped;
                }
            }
        }
        Ok(features)
    }
}
