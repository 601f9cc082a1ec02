//! Visualization layer for terminal pages, charts and exports.

mod export;
mod markdown;
mod terminal;
mod theme;
mod tui;

pub use export::{export_chart_png, export_chart_svg, open_file};
pub use terminal::{render_intro, render_page};
pub use theme::Theme;
pub use tui::run_browser;
