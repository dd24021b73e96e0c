//! Sample registry content shared by unit tests

use super::model::*;

pub fn core_plugin() -> PluginInfo {
    PluginInfo {
        name: "coreelements".to_string(),
        description: "GStreamer core elements".to_string(),
        filename: Some("/usr/lib/gstreamer-1.0/libgstcoreelements.so".to_string()),
        version: "1.24.2".to_string(),
        license: "LGPL".to_string(),
        source: "gstreamer".to_string(),
        release_date: Some("2024-04-09".to_string()),
        package: "GStreamer".to_string(),
        origin: "https://gstreamer.freedesktop.org".to_string(),
        blacklisted: false,
    }
}

pub fn plugin_named(name: &str) -> PluginInfo {
    PluginInfo {
        name: name.to_string(),
        description: format!("{} plugin", name),
        ..core_plugin()
    }
}

pub fn fakesrc_feature() -> Feature {
    Feature {
        name: "fakesrc".to_string(),
        rank: Rank::NONE,
        kind: FeatureKind::Element(ElementInfo {
            long_name: "Fake Source".to_string(),
            klass: "Source".to_string(),
            description: "Push empty (no data) buffers around".to_string(),
            author: "Erik Walthinsen <omega@cse.ogi.edu>".to_string(),
            pad_templates: vec![PadTemplateInfo {
                name: "src".to_string(),
                direction: PadDirection::Src,
                presence: PadPresence::Always,
                caps: CapsInfo::Any,
            }],
            properties: Properties::Listed(vec![
                PropertyInfo {
                    name: "name".to_string(),
                    blurb: "The name of the object".to_string(),
                    type_name: "gchararray".to_string(),
                    default_value: "NULL".to_string(),
                    flags: PropertyFlags::READABLE | PropertyFlags::WRITABLE,
                    values: Vec::new(),
                },
                PropertyInfo {
                    name: "sizetype".to_string(),
                    blurb: "How to determine buffer sizes".to_string(),
                    type_name: "GstFakeSrcSizeType".to_string(),
                    default_value: "empty".to_string(),
                    flags: PropertyFlags::READABLE | PropertyFlags::WRITABLE,
                    values: vec![
                        NamedValue {
                            value: 1,
                            nick: "empty".to_string(),
                            name: "Send empty buffers".to_string(),
                        },
                        NamedValue {
                            value: 2,
                            nick: "fixed".to_string(),
                            name: "Fixed size buffers (sizemax sized)".to_string(),
                        },
                    ],
                },
            ]),
        }),
    }
}

pub fn tracer_feature(name: &str) -> Feature {
    Feature {
        name: name.to_string(),
        rank: Rank::NONE,
        kind: FeatureKind::Tracer,
    }
}
