//! Indented text report
//!
//! One line per metadata field, nested by indentation: plugin fields at one
//! space, features at three, element details at four and deeper.

use std::io::Write;

use crate::display::ColourManager;
use crate::registry::{
    CapsInfo, ElementInfo, Feature, FeatureKind, InspectResult, PadTemplateInfo, PluginInfo,
    Properties, PropertyInfo,
};

use super::{InspectSummary, ReportWriter};

const FEATURE_INDENT: &str = "   ";
const ELEMENT_INDENT: &str = "    ";

/// Streams the human-readable report to `out`
pub struct TextReport<W: Write> {
    out: W,
    colours: ColourManager,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W, colours: ColourManager) -> Self {
        Self { out, colours }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_plugin_header(&mut self, plugin: &PluginInfo) -> InspectResult<()> {
        let c = &self.colours;
        writeln!(self.out, "Plugin: {}", c.plugin(&plugin.name))?;
        if plugin.blacklisted {
            writeln!(self.out, " {}", c.warning("Blacklisted: yes"))?;
        }

        let fields: [(&str, &str); 8] = [
            ("Description", plugin.description.as_str()),
            ("Filename", plugin.filename.as_deref().unwrap_or("(none)")),
            ("Version", plugin.version.as_str()),
            ("License", plugin.license.as_str()),
            ("Source module", plugin.source.as_str()),
            ("Source release date", plugin.release_date.as_deref().unwrap_or("(none)")),
            ("Binary package", plugin.package.as_str()),
            ("Origin URL", plugin.origin.as_str()),
        ];
        for (label, value) in fields {
            writeln!(self.out, " {}: {}", label, value)?;
        }
        Ok(())
    }

    fn write_feature(&mut self, feature: &Feature) -> InspectResult<()> {
        let c = &self.colours;
        let name = c.feature(&feature.name);
        let rank = &feature.rank;

        match &feature.kind {
            FeatureKind::Element(info) => {
                writeln!(
                    self.out,
                    "{}{}: {} - {} - rank={}",
                    FEATURE_INDENT, name, info.long_name, info.description, rank
                )?;
                self.write_element(info)?;
            }
            FeatureKind::TypeFind { extensions } => {
                writeln!(
                    self.out,
                    "{}{} {} - extensions: {} - rank={}",
                    FEATURE_INDENT,
                    name,
                    c.label("(typefind)"),
                    extensions.join(", "),
                    rank
                )?;
            }
            FeatureKind::DeviceProvider { long_name } => {
                writeln!(
                    self.out,
                    "{}{} {} - {} - rank={}",
                    FEATURE_INDENT,
                    name,
                    c.label("(device provider)"),
                    long_name,
                    rank
                )?;
            }
            FeatureKind::Tracer => {
                writeln!(self.out, "{}{} {} - rank={}", FEATURE_INDENT, name, c.label("(tracer)"), rank)?;
            }
            FeatureKind::DynamicType => {
                writeln!(self.out, "{}{} {} - rank={}", FEATURE_INDENT, name, c.label("(dynamictype)"), rank)?;
            }
            FeatureKind::Other { type_name } => {
                writeln!(self.out, "{}{} {}", FEATURE_INDENT, name, c.label(&format!("({})", type_name)))?;
            }
        }
        Ok(())
    }

    fn write_element(&mut self, info: &ElementInfo) -> InspectResult<()> {
        writeln!(self.out, "{}class: {}", ELEMENT_INDENT, info.klass)?;
        writeln!(self.out, "{}author: {}", ELEMENT_INDENT, info.author)?;

        writeln!(self.out, "{}{}", ELEMENT_INDENT, self.colours.label("pad templates:"))?;
        for template in &info.pad_templates {
            self.write_pad_template(template)?;
        }

        match &info.properties {
            Properties::Listed(properties) => {
                writeln!(self.out, "{}{}", ELEMENT_INDENT, self.colours.label("Element Properties:"))?;
                let indent = format!("{} ", ELEMENT_INDENT);
                for property in properties {
                    self.write_property(property, &indent)?;
                }
            }
            Properties::Skipped => {}
            Properties::Unavailable(reason) => {
                writeln!(
                    self.out,
                    "{}{}",
                    ELEMENT_INDENT,
                    self.colours.warning(&format!("Element Properties: unavailable ({})", reason))
                )?;
            }
        }
        Ok(())
    }

    fn write_pad_template(&mut self, template: &PadTemplateInfo) -> InspectResult<()> {
        writeln!(
            self.out,
            "     {} ({}, {})",
            self.colours.feature(&template.name),
            template.direction.nick(),
            template.presence.nick()
        )?;
        writeln!(self.out, "      Capabilities:")?;
        match &template.caps {
            CapsInfo::Any => writeln!(self.out, "       ANY")?,
            CapsInfo::Empty => writeln!(self.out, "       EMPTY")?,
            CapsInfo::Structures(entries) => {
                for entry in entries {
                    match &entry.features {
                        Some(features) => {
                            writeln!(self.out, "       {} (features: {})", entry.structure, features)?
                        }
                        None => writeln!(self.out, "       {}", entry.structure)?,
                    }
                }
            }
        }
        Ok(())
    }

    fn write_property(&mut self, property: &PropertyInfo, indent: &str) -> InspectResult<()> {
        let c = &self.colours;
        writeln!(
            self.out,
            "{}{} (default: {}): {}",
            indent,
            c.feature(&property.name),
            property.default_value,
            property.blurb
        )?;
        writeln!(self.out, " {}Type: {}", indent, c.muted(&property.type_name))?;
        writeln!(self.out, " {}Flags: {}", indent, c.muted(&property.flags.nicks().join(", ")))?;
        if !property.values.is_empty() {
            writeln!(self.out, " {}Values:", indent)?;
            for value in &property.values {
                writeln!(self.out, "  {}{}: {} - {}", indent, value.value, value.nick, value.name)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for TextReport<W> {
    fn plugin(&mut self, plugin: &PluginInfo, features: &[Feature]) -> InspectResult<()> {
        self.write_plugin_header(plugin)?;
        for feature in features {
            self.write_feature(feature)?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &InspectSummary) -> InspectResult<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Total count: {} {}, {} {}",
            summary.plugins,
            if summary.plugins == 1 { "plugin" } else { "plugins" },
            summary.features,
            if summary.features == 1 { "feature" } else { "features" }
        )?;
        self.out.flush()?;
        Ok(())
    }
}
