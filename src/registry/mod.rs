//! Plugin registry access
//!
//! The inspector reads the registry through [`RegistrySource`]. The
//! GStreamer-backed implementation lives in [`gst`]; tests supply their own
//! in-memory sources.

pub mod error;
pub mod memory;
pub mod model;

#[cfg(feature = "gstreamer")]
pub mod gst;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{InspectError, InspectResult};
pub use memory::MemoryRegistry;
pub use model::*;

#[cfg(feature = "gstreamer")]
pub use self::gst::GstRegistry;

/// Options that change how much a source reads per feature
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOptions {
    /// Instantiate each element factory to list its properties
    pub element_properties: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { element_properties: true }
    }
}

/// Read-only view of a plugin registry
pub trait RegistrySource {
    /// All plugins known to the registry, in registry order
    fn plugins(&self) -> InspectResult<Vec<PluginInfo>>;

    /// Features registered by `plugin`, in registry order
    fn features(&self, plugin: &PluginInfo, options: &ReadOptions) -> InspectResult<Vec<Feature>>;
}
