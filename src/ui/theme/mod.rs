//! Page themes, the fixed alert palette, text styles and painted glyphs.

pub mod colors;
pub mod fonts;
pub mod widgets;

pub use colors::PageTheme;
pub use fonts::{apply_app_style, alert_font, configure_text_styles};
pub use widgets::{paint_glyph, render_glyph};
