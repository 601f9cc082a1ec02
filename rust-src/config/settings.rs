//! Application settings and path constants.

use std::path::PathBuf;

use anyhow::{Context, Result};


/// Guide title shown in page chrome.
pub const APP_TITLE: &str = "Starting Businesses in South Africa with Replit AI";

/// Subtitle under the title.
pub const APP_SUBTITLE: &str = "A Comprehensive Guide for Entrepreneurs";

/// Window/page title used by hosts that have one.
pub const PAGE_TITLE: &str = "South African Business Guide with Replit AI";

pub const PAGE_ICON: &str = "🇿🇦";

/// Width of text bars (progress and bar charts).
pub const BAR_WIDTH: usize = 30;

/// Character grid for terminal scatter plots.
pub const SCATTER_COLS: usize = 56;
pub const SCATTER_ROWS: usize = 14;

/// Exported chart dimensions (pixels).
pub const EXPORT_WIDTH: u32 = 960;
pub const EXPORT_HEIGHT: u32 = 600;

/// Default colour sequence for categorical series.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
];

/// Environment variable overriding the export directory.
pub const EXPORT_DIR_ENV: &str = "SABG_EXPORT_DIR";


/// Default directory for exported charts.
pub fn get_export_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(EXPORT_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sabg")
        .join("exports")
}


/// Ensure the export directory exists and return it.
pub fn ensure_export_dir() -> Result<PathBuf> {
    let dir = get_export_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir)
}


/// Whether ANSI colour should be emitted.
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(BAR_WIDTH, 30);
        assert!(SCATTER_COLS > SCATTER_ROWS);
        assert_eq!(DEFAULT_PALETTE.len(), 8);
        assert!(APP_TITLE.contains("South Africa"));
    }

    #[test]
    fn test_color_flag_overrides() {
        assert!(!color_enabled(true));
    }

    #[test]
    fn test_export_dir_default_or_override() {
        let dir = get_export_dir();
        match std::env::var_os(EXPORT_DIR_ENV) {
            Some(custom) => assert_eq!(dir, PathBuf::from(custom)),
            None => assert!(dir.to_string_lossy().contains(".sabg")),
        }
    }
}
