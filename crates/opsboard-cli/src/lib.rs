//! CLI library components for the offline operations dashboard.

pub mod display;
pub mod logging;
