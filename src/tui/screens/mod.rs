//! TUI screen implementations.

pub mod estimate;
pub mod help;

pub use estimate::{EstimateState, draw_estimate};
pub use help::{HelpState, draw_help};
