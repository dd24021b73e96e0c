//! Registry content shared by the integration tests

#![allow(dead_code)]

use gstinspect::registry::*;

pub fn plugin(name: &str) -> PluginInfo {
    PluginInfo {
        name: name.to_string(),
        description: format!("{} elements", name),
        filename: Some(format!("/usr/lib/gstreamer-1.0/libgst{}.so", name)),
        version: "1.24.2".to_string(),
        license: "LGPL".to_string(),
        source: "gst-plugins-base".to_string(),
        release_date: Some("2024-04-09".to_string()),
        package: "GStreamer Base Plug-ins".to_string(),
        origin: "https://gstreamer.freedesktop.org".to_string(),
        blacklisted: false,
    }
}

pub fn element(name: &str, properties: Properties) -> Feature {
    Feature {
        name: name.to_string(),
        rank: Rank::PRIMARY,
        kind: FeatureKind::Element(ElementInfo {
            long_name: format!("{} long name", name),
            klass: "Filter/Converter/Audio".to_string(),
            description: format!("{} description", name),
            author: "Jane Doe <jane@example.com>".to_string(),
            pad_templates: vec![
                PadTemplateInfo {
                    name: "sink".to_string(),
                    direction: PadDirection::Sink,
                    presence: PadPresence::Always,
                    caps: CapsInfo::Structures(vec![CapsEntry {
                        structure: "audio/x-raw, format=(string)S16LE".to_string(),
                        features: None,
                    }]),
                },
                PadTemplateInfo {
                    name: "src".to_string(),
                    direction: PadDirection::Src,
                    presence: PadPresence::Always,
                    caps: CapsInfo::Any,
                },
            ],
            properties,
        }),
    }
}

pub fn volume_property() -> PropertyInfo {
    PropertyInfo {
        name: "volume".to_string(),
        blurb: "volume factor, 1.0=100%".to_string(),
        type_name: "gdouble".to_string(),
        default_value: "1".to_string(),
        flags: PropertyFlags::READABLE | PropertyFlags::WRITABLE | PropertyFlags::CONTROLLABLE,
        values: Vec::new(),
    }
}

pub fn typefind(name: &str, extensions: &[&str]) -> Feature {
    Feature {
        name: name.to_string(),
        rank: Rank::SECONDARY,
        kind: FeatureKind::TypeFind {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        },
    }
}

pub fn sample_registry() -> MemoryRegistry {
    MemoryRegistry::new()
        .with_plugin(
            plugin("volume"),
            vec![element("volume", Properties::Listed(vec![volume_property()]))],
        )
        .with_plugin(
            plugin("typefindfunctions"),
            vec![typefind("audio/x-wav", &["wav"]), typefind("video/quicktime", &["mov", "mp4"])],
        )
        .with_plugin(
            PluginInfo {
                blacklisted: true,
                filename: None,
                ..plugin("broken")
            },
            vec![],
        )
}
