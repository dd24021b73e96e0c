// Integration tests for the registry walk and both report formats
// Drives the public API with an in-memory registry

mod common;

use common::*;
use gstinspect::app::inspect_to;
use gstinspect::display::ColourManager;
use gstinspect::inspect::InspectOptions;
use gstinspect::registry::{InspectError, ReadOptions};
use gstinspect::report::{InspectSummary, OutputFormat};

fn text_report(options: InspectOptions) -> (String, InspectSummary) {
    let mut out = Vec::new();
    let summary = inspect_to(&sample_registry(), &mut out, OutputFormat::Text, options, ColourManager::plain())
        .expect("text report should succeed");
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn test_full_text_report() {
    let (text, summary) = text_report(InspectOptions::default());

    assert_eq!(summary, InspectSummary { plugins: 3, features: 3 });

    assert!(text.contains("Plugin: volume\n Description: volume elements\n"));
    assert!(text.contains("   volume: volume long name - volume description - rank=256 (primary)\n"));
    assert!(text.contains("    class: Filter/Converter/Audio\n"));
    assert!(text.contains("     sink (sink, always)\n      Capabilities:\n       audio/x-raw, format=(string)S16LE\n"));
    assert!(text.contains("     src (src, always)\n      Capabilities:\n       ANY\n"));
    assert!(text.contains("    Element Properties:\n     volume (default: 1): volume factor, 1.0=100%\n"));
    assert!(text.contains("      Type: gdouble\n      Flags: readable, writable, controllable\n"));

    assert!(text.contains("   audio/x-wav (typefind) - extensions: wav - rank=128 (secondary)\n"));
    assert!(text.contains("   video/quicktime (typefind) - extensions: mov, mp4 - rank=128 (secondary)\n"));

    assert!(text.contains("Plugin: broken\n Blacklisted: yes\n"));
    assert!(text.ends_with("\nTotal count: 3 plugins, 3 features\n"));
}

#[test]
fn test_plugins_appear_in_registry_order() {
    let (text, _) = text_report(InspectOptions::default());

    let volume = text.find("Plugin: volume").unwrap();
    let typefind = text.find("Plugin: typefindfunctions").unwrap();
    let broken = text.find("Plugin: broken").unwrap();
    assert!(volume < typefind && typefind < broken);
}

#[test]
fn test_no_properties_option() {
    let (text, _) = text_report(InspectOptions {
        read: ReadOptions { element_properties: false },
        ..InspectOptions::default()
    });

    assert!(text.contains("    pad templates:\n"));
    assert!(!text.contains("Element Properties"));
}

#[test]
fn test_filter_and_skip_blacklisted() {
    let (text, summary) = text_report(InspectOptions {
        plugin_names: vec!["typefindfunctions".to_string(), "broken".to_string()],
        skip_blacklisted: true,
        ..InspectOptions::default()
    });

    assert_eq!(summary, InspectSummary { plugins: 1, features: 2 });
    assert!(!text.contains("Plugin: volume"));
    assert!(!text.contains("Plugin: broken"));
    assert!(text.ends_with("Total count: 1 plugin, 2 features\n"));
}

#[test]
fn test_only_named_plugin_blacklisted_and_skipped() {
    let (text, summary) = text_report(InspectOptions {
        plugin_names: vec!["broken".to_string()],
        skip_blacklisted: true,
        ..InspectOptions::default()
    });

    assert_eq!(summary, InspectSummary::default());
    assert!(!text.contains("Plugin: broken"));
    assert!(text.ends_with("Total count: 0 plugins, 0 features
"));
}

#[test]
fn test_unknown_plugin_fails() {
    let mut out = Vec::new();
    let err = inspect_to(
        &sample_registry(),
        &mut out,
        OutputFormat::Text,
        InspectOptions {
            plugin_names: vec!["nonexistent".to_string()],
            ..InspectOptions::default()
        },
        ColourManager::plain(),
    )
    .unwrap_err();

    assert!(matches!(err, InspectError::NoMatchingPlugins { .. }));
    assert!(out.is_empty(), "nothing should be written when no plugin matched");
}

#[test]
fn test_json_report() {
    let mut out = Vec::new();
    inspect_to(&sample_registry(), &mut out, OutputFormat::Json, InspectOptions::default(), ColourManager::plain())
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).expect("report should be valid JSON");
    let plugins = value["plugins"].as_array().unwrap();
    assert_eq!(plugins.len(), 3);

    let volume = &plugins[0]["features"][0];
    assert_eq!(volume["kind"], "element");
    assert_eq!(volume["rank"], 256);
    assert_eq!(volume["pad_templates"][0]["caps"]["type"], "structures");
    assert_eq!(
        volume["pad_templates"][0]["caps"]["structures"][0]["structure"],
        "audio/x-raw, format=(string)S16LE"
    );
    assert_eq!(volume["properties"]["value"][0]["name"], "volume");

    let wav = &plugins[1]["features"][0];
    assert_eq!(wav["kind"], "type-find");
    assert_eq!(wav["extensions"][0], "wav");

    assert_eq!(plugins[2]["blacklisted"], true);
    assert!(plugins[2]["filename"].is_null());
    assert_eq!(value["total"]["features"], 3);
}

#[test]
fn test_broken_pipe_surfaces_as_output_error() {
    struct ClosedPipe;

    impl std::io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = inspect_to(
        &sample_registry(),
        ClosedPipe,
        OutputFormat::Text,
        InspectOptions::default(),
        ColourManager::plain(),
    )
    .unwrap_err();
    assert!(err.is_broken_pipe());
}
