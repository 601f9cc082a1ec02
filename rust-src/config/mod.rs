//! Configuration and settings for the guide.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    color_enabled,
    ensure_export_dir,
    get_export_dir,
    APP_SUBTITLE,
    APP_TITLE,
    BAR_WIDTH,
    DEFAULT_PALETTE,
    EXPORT_DIR_ENV,
    EXPORT_HEIGHT,
    EXPORT_WIDTH,
    PAGE_ICON,
    PAGE_TITLE,
    SCATTER_COLS,
    SCATTER_ROWS,
};
