//! Registry snapshot types
//!
//! Read-only views of what the registry reports for one plugin. Values are
//! copied out of the framework objects so the report writers never touch
//! the framework directly.

use bitflags::bitflags;
use serde::Serialize;
use std::fmt;

/// Metadata for a single plugin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub description: String,
    pub filename: Option<String>,
    pub version: String,
    pub license: String,
    pub source: String,
    pub release_date: Option<String>,
    pub package: String,
    pub origin: String,
    pub blacklisted: bool,
}

/// Plugin feature rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rank(pub i32);

impl Rank {
    pub const NONE: Rank = Rank(0);
    pub const MARGINAL: Rank = Rank(64);
    pub const SECONDARY: Rank = Rank(128);
    pub const PRIMARY: Rank = Rank(256);

    /// Name of a well-known rank, if this is one
    pub fn label(&self) -> Option<&'static str> {
        match *self {
            Rank::NONE => Some("none"),
            Rank::MARGINAL => Some("marginal"),
            Rank::SECONDARY => Some("secondary"),
            Rank::PRIMARY => Some("primary"),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{} ({})", self.0, label),
            None => write!(f, "{}", self.0),
        }
    }
}

/// A registry feature belonging to a plugin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub name: String,
    pub rank: Rank,
    #[serde(flatten)]
    pub kind: FeatureKind,
}

/// The closed set of feature kinds the report distinguishes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FeatureKind {
    Element(ElementInfo),
    TypeFind { extensions: Vec<String> },
    DeviceProvider { long_name: String },
    Tracer,
    DynamicType,
    Other { type_name: String },
}

impl FeatureKind {
    /// Short label used in totals and log records
    pub fn label(&self) -> &str {
        match self {
            FeatureKind::Element(_) => "element",
            FeatureKind::TypeFind { .. } => "typefind",
            FeatureKind::DeviceProvider { .. } => "device provider",
            FeatureKind::Tracer => "tracer",
            FeatureKind::DynamicType => "dynamictype",
            FeatureKind::Other { type_name } => type_name,
        }
    }
}

/// Element factory details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementInfo {
    pub long_name: String,
    pub klass: String,
    pub description: String,
    pub author: String,
    pub pad_templates: Vec<PadTemplateInfo>,
    pub properties: Properties,
}

/// Outcome of reading an element's property list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "kebab-case")]
pub enum Properties {
    Listed(Vec<PropertyInfo>),
    /// Property introspection was turned off
    Skipped,
    /// The throwaway element could not be created
    Unavailable(String),
}

/// Direction of a pad template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PadDirection {
    Src,
    Sink,
    Unknown,
}

impl PadDirection {
    pub fn nick(&self) -> &'static str {
        match self {
            PadDirection::Src => "src",
            PadDirection::Sink => "sink",
            PadDirection::Unknown => "unknown",
        }
    }
}

/// Availability of pads created from a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PadPresence {
    Always,
    Sometimes,
    Request,
    Unknown,
}

impl PadPresence {
    pub fn nick(&self) -> &'static str {
        match self {
            PadPresence::Always => "always",
            PadPresence::Sometimes => "sometimes",
            PadPresence::Request => "request",
            PadPresence::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PadTemplateInfo {
    pub name: String,
    pub direction: PadDirection,
    pub presence: PadPresence,
    pub caps: CapsInfo,
}

/// Capabilities of a pad template
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "structures", rename_all = "lowercase")]
pub enum CapsInfo {
    Any,
    Empty,
    Structures(Vec<CapsEntry>),
}

/// One capability structure. `features` is `None` for plain system memory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapsEntry {
    pub structure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
}

bitflags! {
    /// Property access flags reported for an element property
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct PropertyFlags: u32 {
        const READABLE        = 1 << 0;
        const WRITABLE        = 1 << 1;
        const DEPRECATED      = 1 << 2;
        const CONTROLLABLE    = 1 << 3;
        const MUTABLE_PLAYING = 1 << 4;
        const MUTABLE_PAUSED  = 1 << 5;
        const MUTABLE_READY   = 1 << 6;
    }
}

impl PropertyFlags {
    /// Flag nicks in display order
    pub fn nicks(&self) -> Vec<&'static str> {
        const NICKS: [(PropertyFlags, &str); 7] = [
            (PropertyFlags::READABLE, "readable"),
            (PropertyFlags::WRITABLE, "writable"),
            (PropertyFlags::DEPRECATED, "deprecated"),
            (PropertyFlags::CONTROLLABLE, "controllable"),
            (PropertyFlags::MUTABLE_PLAYING, "mutable-playing"),
            (PropertyFlags::MUTABLE_PAUSED, "mutable-paused"),
            (PropertyFlags::MUTABLE_READY, "mutable-ready"),
        ];
        NICKS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, nick)| *nick)
            .collect()
    }
}

/// A possible value of an enum or flags property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue {
    pub value: i64,
    pub nick: String,
    pub name: String,
}

/// Introspected element property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyInfo {
    pub name: String,
    pub blurb: String,
    pub type_name: String,
    pub default_value: String,
    pub flags: PropertyFlags,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<NamedValue>,
}
