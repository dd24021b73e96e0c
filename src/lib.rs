pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod inspect;
pub mod logging;
pub mod registry;
pub mod report;
