//! Data models for tables, charts and page content.

pub mod chart;
pub mod content;
pub mod table;

pub use chart::{build_bar, build_scatter, ChartResult, ChartSpec, Geometry, Orientation};
pub use content::{clamp_fraction, dedent, Block, Page, ResourceCard};
pub use table::{column, DataTable, Scalar, TableError};
