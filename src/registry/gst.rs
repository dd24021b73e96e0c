//! GStreamer-backed registry source
//!
//! Copies plugin, feature, pad template and property metadata out of the
//! process-wide GStreamer registry.

use gstreamer as gst;
use gst::glib;
use gst::glib::translate::IntoGlib;
use gst::prelude::*;
use log::{debug, trace, warn};

use super::error::{InspectError, InspectResult};
use super::model::*;
use super::{ReadOptions, RegistrySource};

/// The GStreamer registry singleton
pub struct GstRegistry {
    registry: gst::Registry,
}

impl GstRegistry {
    /// Initialise GStreamer and take hold of its registry
    pub fn new() -> InspectResult<Self> {
        gst::init().map_err(|e| InspectError::init(e.to_string()))?;
        debug!("Initialised {}", gst::version_string());
        Ok(Self {
            registry: gst::Registry::get(),
        })
    }

    fn feature(&self, feature: &gst::PluginFeature, options: &ReadOptions) -> Feature {
        let name = feature.name().to_string();
        let rank = Rank(feature.rank().into_glib());

        let kind = if let Some(factory) = feature.downcast_ref::<gst::ElementFactory>() {
            FeatureKind::Element(element_info(factory, options))
        } else if let Some(factory) = feature.downcast_ref::<gst::TypeFindFactory>() {
            FeatureKind::TypeFind {
                extensions: factory.extensions().iter().map(|e| e.to_string()).collect(),
            }
        } else if let Some(factory) = feature.downcast_ref::<gst::DeviceProviderFactory>() {
            FeatureKind::DeviceProvider {
                long_name: factory
                    .metadata(&gst::ELEMENT_METADATA_LONGNAME)
                    .unwrap_or_default()
                    .to_string(),
            }
        } else if feature.is::<gst::TracerFactory>() {
            FeatureKind::Tracer
        } else if feature.is::<gst::DynamicTypeFactory>() {
            FeatureKind::DynamicType
        } else {
            FeatureKind::Other {
                type_name: feature.type_().name().to_string(),
            }
        };

        trace!("Read feature {} ({})", name, kind.label());
        Feature { name, rank, kind }
    }
}

impl RegistrySource for GstRegistry {
    fn plugins(&self) -> InspectResult<Vec<PluginInfo>> {
        let plugins: Vec<PluginInfo> = self.registry.plugins().iter().map(plugin_info).collect();
        debug!("Registry lists {} plugins", plugins.len());
        Ok(plugins)
    }

    fn features(&self, plugin: &PluginInfo, options: &ReadOptions) -> InspectResult<Vec<Feature>> {
        Ok(self
            .registry
            .features_by_plugin(&plugin.name)
            .iter()
            .map(|feature| self.feature(feature, options))
            .collect())
    }
}

fn plugin_info(plugin: &gst::Plugin) -> PluginInfo {
    PluginInfo {
        name: plugin.plugin_name().to_string(),
        description: plugin.description().to_string(),
        filename: plugin.filename().map(|path| path.display().to_string()),
        version: plugin.version().to_string(),
        license: plugin.license().to_string(),
        source: plugin.source().to_string(),
        release_date: plugin.release_date_string().map(|date| date.to_string()),
        package: plugin.package().to_string(),
        origin: plugin.origin().to_string(),
        blacklisted: plugin.plugin_flags().contains(gst::PluginFlags::BLACKLISTED),
    }
}

fn element_info(factory: &gst::ElementFactory, options: &ReadOptions) -> ElementInfo {
    let metadata = |key: &str| factory.metadata(key).unwrap_or_default().to_string();

    ElementInfo {
        long_name: metadata(&gst::ELEMENT_METADATA_LONGNAME),
        klass: metadata(&gst::ELEMENT_METADATA_KLASS),
        description: metadata(&gst::ELEMENT_METADATA_DESCRIPTION),
        author: metadata(&gst::ELEMENT_METADATA_AUTHOR),
        pad_templates: factory.static_pad_templates().iter().map(pad_template_info).collect(),
        properties: if options.element_properties {
            element_properties(factory)
        } else {
            Properties::Skipped
        },
    }
}

fn pad_template_info(template: &gst::StaticPadTemplate) -> PadTemplateInfo {
    PadTemplateInfo {
        name: template.name_template().to_string(),
        direction: match template.direction() {
            gst::PadDirection::Src => PadDirection::Src,
            gst::PadDirection::Sink => PadDirection::Sink,
            _ => PadDirection::Unknown,
        },
        presence: match template.presence() {
            gst::PadPresence::Always => PadPresence::Always,
            gst::PadPresence::Sometimes => PadPresence::Sometimes,
            gst::PadPresence::Request => PadPresence::Request,
            _ => PadPresence::Unknown,
        },
        caps: caps_info(&template.caps()),
    }
}

fn caps_info(caps: &gst::CapsRef) -> CapsInfo {
    if caps.is_any() {
        CapsInfo::Any
    } else if caps.is_empty() {
        CapsInfo::Empty
    } else {
        CapsInfo::Structures(
            caps.iter_with_features()
                .map(|(structure, features)| CapsEntry {
                    structure: structure.to_string(),
                    features: (!is_system_memory(features)).then(|| features.to_string()),
                })
                .collect(),
        )
    }
}

fn is_system_memory(features: &gst::CapsFeaturesRef) -> bool {
    !features.is_any()
        && features.size() == 1
        && features.contains(gst::CAPS_FEATURE_MEMORY_SYSTEM_MEMORY)
}

/// Create a throwaway element and read back its property specs. The
/// element is dropped before returning.
fn element_properties(factory: &gst::ElementFactory) -> Properties {
    match factory.create().build() {
        Ok(element) => {
            let properties = element.list_properties().iter().map(property_info).collect();
            Properties::Listed(properties)
        }
        Err(e) => {
            warn!("Could not create element from factory {}: {}", factory.name(), e);
            Properties::Unavailable(e.to_string())
        }
    }
}

fn property_info(pspec: &glib::ParamSpec) -> PropertyInfo {
    let value_type = pspec.value_type();
    PropertyInfo {
        name: pspec.name().to_string(),
        blurb: pspec.blurb().unwrap_or_default().to_string(),
        type_name: value_type.name().to_string(),
        default_value: render_value(pspec.default_value()),
        flags: property_flags(pspec.flags()),
        values: named_values(value_type),
    }
}

fn property_flags(flags: glib::ParamFlags) -> PropertyFlags {
    let mut out = PropertyFlags::empty();
    out.set(PropertyFlags::READABLE, flags.contains(glib::ParamFlags::READABLE));
    out.set(PropertyFlags::WRITABLE, flags.contains(glib::ParamFlags::WRITABLE));
    out.set(PropertyFlags::DEPRECATED, flags.contains(glib::ParamFlags::DEPRECATED));
    out.set(PropertyFlags::CONTROLLABLE, flags.contains(gst::PARAM_FLAG_CONTROLLABLE));
    out.set(PropertyFlags::MUTABLE_PLAYING, flags.contains(gst::PARAM_FLAG_MUTABLE_PLAYING));
    out.set(PropertyFlags::MUTABLE_PAUSED, flags.contains(gst::PARAM_FLAG_MUTABLE_PAUSED));
    out.set(PropertyFlags::MUTABLE_READY, flags.contains(gst::PARAM_FLAG_MUTABLE_READY));
    out
}

/// Every value of an enum or flags type; empty for any other type
fn named_values(value_type: glib::Type) -> Vec<NamedValue> {
    if let Some(class) = glib::EnumClass::with_type(value_type) {
        class
            .values()
            .iter()
            .map(|v| NamedValue {
                value: i64::from(v.value()),
                nick: v.nick().to_string(),
                name: v.name().to_string(),
            })
            .collect()
    } else if let Some(class) = glib::FlagsClass::with_type(value_type) {
        class
            .values()
            .iter()
            .map(|v| NamedValue {
                value: i64::from(v.value()),
                nick: v.nick().to_string(),
                name: v.name().to_string(),
            })
            .collect()
    } else {
        Vec::new()
    }
}

/// Enum values render as their nick, flags as `nick+nick`, everything else
/// through GLib's string transform.
fn render_value(value: &glib::Value) -> String {
    if let Some((_, enum_value)) = glib::EnumValue::from_value(value) {
        return enum_value.nick().to_string();
    }
    if let Some((_, set)) = glib::FlagsValue::from_value(value) {
        if set.is_empty() {
            return "(none)".to_string();
        }
        return set.iter().map(|v| v.nick()).collect::<Vec<_>>().join("+");
    }
    value
        .transform::<String>()
        .ok()
        .and_then(|text| text.get::<Option<String>>().ok().flatten())
        .unwrap_or_else(|| "NULL".to_string())
}
