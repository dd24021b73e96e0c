//! Colour configuration and theme selection
//!
//! Decides whether the text report is coloured and which palette it uses.

use colored::Color;

/// Colour configuration for the text report
#[derive(Debug, Clone, PartialEq)]
pub struct ColourConfig {
    /// Whether colours are enabled at all
    pub enabled: bool,
    /// The colour theme to use
    pub theme: ColourTheme,
    /// Whether to respect the NO_COLOR environment variable
    pub respect_no_color: bool,
    /// Force colours even when stdout is not a TTY (--color flag)
    pub color_forced: bool,
}

impl Default for ColourConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            theme: ColourTheme::Auto,
            respect_no_color: true,
            color_forced: false,
        }
    }
}

/// Available colour themes
#[derive(Debug, Clone, PartialEq)]
pub enum ColourTheme {
    /// Dark palette until background detection exists
    Auto,
    /// Optimised for light backgrounds
    Light,
    /// Optimised for dark backgrounds
    Dark,
}

impl std::str::FromStr for ColourTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColourTheme::Auto),
            "light" => Ok(ColourTheme::Light),
            "dark" => Ok(ColourTheme::Dark),
            _ => Err(format!("Invalid colour theme: {}. Valid options: auto, light, dark", s)),
        }
    }
}

/// Colours for each role in the report
#[derive(Debug, Clone, PartialEq)]
pub struct ColourPalette {
    /// Plugin names
    pub plugin: String,
    /// Feature and property names
    pub feature: String,
    /// Feature kind markers and section headings
    pub label: String,
    /// Secondary detail such as types and flags
    pub muted: String,
    /// Blacklisted plugins and unavailable property lists
    pub warning: String,
}

impl Default for ColourPalette {
    fn default() -> Self {
        Self {
            plugin: "cyan".to_string(),
            feature: "green".to_string(),
            label: "blue".to_string(),
            muted: "bright_black".to_string(),
            warning: "yellow".to_string(),
        }
    }
}

impl ColourPalette {
    /// Palette for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            plugin: "magenta".to_string(),
            feature: "green".to_string(),
            label: "blue".to_string(),
            muted: "black".to_string(),
            warning: "red".to_string(),
        }
    }

    /// Palette for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            plugin: "bright_cyan".to_string(),
            feature: "bright_green".to_string(),
            label: "bright_blue".to_string(),
            muted: "bright_black".to_string(),
            warning: "bright_yellow".to_string(),
        }
    }

    /// Parse a colour string into a Color enum
    pub fn parse_color(color_str: &str) -> Option<Color> {
        match color_str.to_lowercase().as_str() {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "bright_black" => Some(Color::BrightBlack),
            "bright_red" => Some(Color::BrightRed),
            "bright_green" => Some(Color::BrightGreen),
            "bright_yellow" => Some(Color::BrightYellow),
            "bright_blue" => Some(Color::BrightBlue),
            "bright_magenta" => Some(Color::BrightMagenta),
            "bright_cyan" => Some(Color::BrightCyan),
            "bright_white" => Some(Color::BrightWhite),
            _ => None,
        }
    }
}

impl ColourTheme {
    /// Get the colour palette for this theme
    pub fn get_palette(&self) -> ColourPalette {
        match self {
            // TODO: detect the terminal background via OSC 11 instead of assuming dark
            ColourTheme::Auto => ColourPalette::dark(),
            ColourTheme::Light => ColourPalette::light(),
            ColourTheme::Dark => ColourPalette::dark(),
        }
    }
}

impl ColourConfig {
    /// Create a colour configuration with colours disabled
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set whether colours are enabled
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Set the colour theme
    pub fn set_theme(&mut self, theme: ColourTheme) {
        self.theme = theme;
    }

    /// Set whether to respect NO_COLOR environment variable
    pub fn set_respect_no_color(&mut self, respect: bool) {
        self.respect_no_color = respect;
    }

    /// Force colours to be enabled (--color flag)
    pub fn set_color_forced(&mut self, forced: bool) {
        self.color_forced = forced;
    }

    /// Check if colours should be used given configuration and environment
    pub fn should_use_colours(&self) -> bool {
        if !self.enabled {
            return false;
        }

        if self.color_forced {
            return true;
        }

        if self.respect_no_color && std::env::var("NO_COLOR").is_ok() {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stdout().is_terminal()
    }

    /// Get the colour palette for the current theme
    pub fn get_palette(&self) -> ColourPalette {
        self.theme.get_palette()
    }
}
