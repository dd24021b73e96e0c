//! Application orchestration module

pub mod initialization;
pub mod execution;

pub use initialization::{
    load_configuration,
    configure_logging,
    configure_colours,
    configure_inspection,
};
pub use execution::{inspect_to, run_inspection};
