//! Application execution: open the registry and write the report

use anyhow::{Context, Result};
use std::io::Write;
use log::debug;
use crate::display::{ColourConfig, ColourManager};
use crate::inspect::{InspectOptions, Inspector};
use crate::registry::{InspectResult, RegistrySource};
use crate::report::{InspectSummary, JsonReport, OutputFormat, TextReport};

/// Walk `source` and write the report in `format` to `out`
pub fn inspect_to<S, W>(
    source: &S,
    out: W,
    format: OutputFormat,
    options: InspectOptions,
    colours: ColourManager,
) -> InspectResult<InspectSummary>
where
    S: RegistrySource + ?Sized,
    W: Write,
{
    let inspector = Inspector::new(source, options);
    match format {
        OutputFormat::Text => inspector.run(&mut TextReport::new(out, colours)),
        OutputFormat::Json => inspector.run(&mut JsonReport::new(out)),
    }
}

/// Inspect the GStreamer registry and print the report on stdout
#[cfg(feature = "gstreamer")]
pub fn run_inspection(
    format: OutputFormat,
    options: InspectOptions,
    colour_config: ColourConfig,
) -> Result<()> {
    let registry = crate::registry::GstRegistry::new()?;

    // Colour codes never belong in JSON
    let colours = match format {
        OutputFormat::Text => ColourManager::with_config(colour_config),
        OutputFormat::Json => ColourManager::plain(),
    };

    let stdout = std::io::stdout();
    match inspect_to(&registry, stdout.lock(), format, options, colours) {
        Ok(summary) => {
            debug!("Inspection finished: {:?}", summary);
            Ok(())
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("Stdout closed before the report finished");
            Ok(())
        }
        Err(e) => Err(e).context("Registry inspection failed"),
    }
}

#[cfg(not(feature = "gstreamer"))]
pub fn run_inspection(
    _format: OutputFormat,
    _options: InspectOptions,
    _colour_config: ColourConfig,
) -> Result<()> {
    Err(anyhow::anyhow!(
        "gstinspect was built without the `gstreamer` feature; rebuild with default features to inspect a registry"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::*;
    use crate::registry::MemoryRegistry;

    fn registry() -> MemoryRegistry {
        MemoryRegistry::new()
            .with_plugin(core_plugin(), vec![fakesrc_feature()])
            .with_plugin(plugin_named("coretracers"), vec![tracer_feature("latency")])
    }

    #[test]
    fn test_text_output_is_deterministic() {
        let source = registry();
        let render = || {
            let mut out = Vec::new();
            inspect_to(&source, &mut out, OutputFormat::Text, InspectOptions::default(), ColourManager::plain())
                .unwrap();
            String::from_utf8(out).unwrap()
        };

        let first = render();
        assert_eq!(first, render());
        assert!(first.starts_with("Plugin: coreelements\n"));
        assert!(first.contains("Plugin: coretracers\n"));
        assert!(first.ends_with("Total count: 2 plugins, 2 features\n"));
    }

    #[test]
    fn test_json_output() {
        let source = registry();
        let mut out = Vec::new();
        let summary =
            inspect_to(&source, &mut out, OutputFormat::Json, InspectOptions::default(), ColourManager::plain())
                .unwrap();

        assert_eq!(summary, InspectSummary { plugins: 2, features: 2 });
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["plugins"][1]["features"][0]["name"], "latency");
    }
}
