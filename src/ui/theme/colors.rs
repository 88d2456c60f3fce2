//! Page color themes and the fixed alert-dialog palette.

use eframe::egui::Color32;

/// Colors for the form page. The alert dialog ignores these.
#[derive(Clone, Debug, PartialEq)]
pub struct PageTheme {
    pub name: &'static str,
    pub background: Color32,
    pub card: Color32,
    pub input_bg: Color32,
    pub border: Color32,
    pub heading: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub code_bg: Color32,
    pub toggle_icon: Color32,
}

impl PageTheme {
    /// Slate dark page.
    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color32::from_rgb(15, 23, 42),    // slate-900
            card: Color32::from_rgb(30, 41, 59),          // slate-800
            input_bg: Color32::from_rgb(51, 65, 85),      // slate-700
            border: Color32::from_rgb(71, 85, 105),       // slate-600
            heading: Color32::from_rgb(56, 189, 248),     // sky-400
            text_primary: Color32::from_rgb(226, 232, 240), // slate-200
            text_muted: Color32::from_rgb(148, 163, 184), // slate-400
            accent: Color32::from_rgb(14, 165, 233),      // sky-500
            accent_hover: Color32::from_rgb(79, 70, 229), // indigo-600
            code_bg: Color32::from_rgb(51, 65, 85),
            toggle_icon: Color32::from_rgb(250, 204, 21), // yellow-400
        }
    }

    /// Slate light page.
    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color32::from_rgb(241, 245, 249), // slate-100
            card: Color32::WHITE,
            input_bg: Color32::WHITE,
            border: Color32::from_rgb(203, 213, 225),     // slate-300
            heading: Color32::from_rgb(2, 132, 199),      // sky-600
            text_primary: Color32::from_rgb(30, 41, 59),  // slate-800
            text_muted: Color32::from_rgb(71, 85, 105),   // slate-600
            accent: Color32::from_rgb(14, 165, 233),
            accent_hover: Color32::from_rgb(79, 70, 229),
            code_bg: Color32::from_rgb(226, 232, 240),
            toggle_icon: Color32::from_rgb(99, 102, 241), // indigo-500
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Window chrome gray (`#F0F0F0`), used by the dialog frame and footer.
pub const ALERT_CHROME: Color32 = Color32::from_rgb(0xF0, 0xF0, 0xF0);
pub const ALERT_BORDER: Color32 = Color32::from_rgb(0x70, 0x70, 0x70);
pub const ALERT_SEPARATOR: Color32 = Color32::from_rgb(0xD4, 0xD4, 0xD4);
pub const ALERT_BODY: Color32 = Color32::WHITE;
pub const ALERT_TEXT: Color32 = Color32::BLACK;

pub const CLOSE_HOVER: Color32 = Color32::from_rgb(220, 38, 38); // red-600
pub const CLOSE_PRESSED: Color32 = Color32::from_rgb(185, 28, 28); // red-700

pub const OK_FILL: Color32 = Color32::from_rgb(0xE1, 0xE1, 0xE1);
pub const OK_FILL_HOVER: Color32 = Color32::from_rgb(0xE5, 0xF1, 0xFB);
pub const OK_FILL_PRESSED: Color32 = Color32::from_rgb(0xCC, 0xE4, 0xF7);
pub const OK_BORDER: Color32 = Color32::from_rgb(0xAD, 0xAD, 0xAD);
pub const OK_BORDER_HOVER: Color32 = Color32::from_rgb(0x00, 0x78, 0xD4);

/// Backdrop dim: black at 30% opacity.
pub const BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 77);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        assert_eq!(PageTheme::dark().name, "Dark");
        assert_eq!(PageTheme::light().name, "Light");
        assert_eq!(PageTheme::for_mode(true), PageTheme::dark());
        assert_eq!(PageTheme::for_mode(false), PageTheme::light());
    }

    #[test]
    fn test_dark_background_is_darker() {
        let dark = PageTheme::dark().background;
        let light = PageTheme::light().background;
        assert!(dark.r() < light.r() && dark.g() < light.g() && dark.b() < light.b());
    }
}
