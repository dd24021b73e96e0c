//! Display module for colour management
//!
//! Colour support for the text report with NO_COLOR compliance and
//! graceful degradation for non-colour terminals.

pub mod colours;
pub mod config;

pub use colours::*;
pub use config::*;
