//! CLI command implementations.

pub mod browse;
pub mod chart;
pub mod feedback;
pub mod sections;
pub mod show;
