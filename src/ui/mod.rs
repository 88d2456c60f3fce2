//! UI rendering modules for Alert Forge.
//!
//! - `dialogs`: The modal alert and the actions it reports
//! - `theme`: Page palettes, alert palette, text styles and icon glyphs

pub mod dialogs;
pub mod theme;
