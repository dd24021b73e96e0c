//! Colour output for the text report
//!
//! Wraps report fragments in ANSI colours when enabled and returns them
//! untouched otherwise.

use colored::{ColoredString, Colorize};
use super::config::{ColourConfig, ColourPalette};

/// Applies the configured palette to report text
#[derive(Debug, Clone)]
pub struct ColourManager {
    enabled: bool,
    palette: ColourPalette,
}

impl ColourManager {
    /// Create a ColourManager from a configuration, resolving TTY and
    /// NO_COLOR once up front
    pub fn with_config(config: ColourConfig) -> Self {
        let enabled = config.should_use_colours();
        if enabled {
            colored::control::set_override(true);
        }
        Self {
            enabled,
            palette: config.get_palette(),
        }
    }

    /// A manager that never emits colour codes
    pub fn plain() -> Self {
        Self::with_config(ColourConfig::disabled())
    }

    /// Check if colours are enabled
    pub fn colours_enabled(&self) -> bool {
        self.enabled
    }

    pub fn plugin(&self, text: &str) -> ColoredString {
        let painted = self.paint(text, &self.palette.plugin);
        if self.enabled {
            painted.bold()
        } else {
            painted
        }
    }

    pub fn feature(&self, text: &str) -> ColoredString {
        self.paint(text, &self.palette.feature)
    }

    pub fn label(&self, text: &str) -> ColoredString {
        self.paint(text, &self.palette.label)
    }

    pub fn muted(&self, text: &str) -> ColoredString {
        self.paint(text, &self.palette.muted)
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        self.paint(text, &self.palette.warning)
    }

    fn paint(&self, text: &str, color_name: &str) -> ColoredString {
        if !self.enabled {
            return text.normal();
        }
        match ColourPalette::parse_color(color_name) {
            Some(color) => text.color(color),
            None => text.normal(),
        }
    }
}

impl Default for ColourManager {
    fn default() -> Self {
        Self::plain()
    }
}
