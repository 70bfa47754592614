//! Command-line flows and console presentation.

pub mod prompt;
pub mod report;
pub mod setup;
pub mod ui;
