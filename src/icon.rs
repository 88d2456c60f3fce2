//! Alert icon selection and the style bundle each icon maps to.
//!
//! The dialog always uses the fixed light "system alert" palette, so every
//! color here is absolute and independent of the page theme.

use eframe::egui::Color32;

/// Title bar background used by error alerts (`#CA0B00`).
pub const ERROR_TITLE_BAR: Color32 = Color32::from_rgb(0xCA, 0x0B, 0x00);
/// Standard blue title bar (`#005A9E`).
pub const STANDARD_TITLE_BAR: Color32 = Color32::from_rgb(0x00, 0x5A, 0x9E);

const RED_600: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);
const YELLOW_500: Color32 = Color32::from_rgb(0xEA, 0xB3, 0x08);
const YELLOW_900: Color32 = Color32::from_rgb(0x71, 0x3F, 0x12);
const BLUE_600: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);

/// The kind of alert the user picked in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconKind {
    #[default]
    Error,
    Warning,
    Info,
    Question,
}

impl IconKind {
    /// All kinds, in the order they appear in the icon picker.
    pub const ALL: [IconKind; 4] = [
        IconKind::Error,
        IconKind::Warning,
        IconKind::Info,
        IconKind::Question,
    ];

    /// Stable machine name, as used in `config.json`.
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Error => "error",
            IconKind::Warning => "warning",
            IconKind::Info => "info",
            IconKind::Question => "question",
        }
    }

    /// Human-readable label shown in the icon picker.
    pub fn label(self) -> &'static str {
        match self {
            IconKind::Error => "Erreur (Croix Rouge)",
            IconKind::Warning => "Avertissement (Triangle Jaune)",
            IconKind::Info => "Information (Bleu i)",
            IconKind::Question => "Question (Point d'interrogation Bleu)",
        }
    }

    /// Parse a machine name; anything unrecognized is treated as an error icon.
    pub fn from_name(name: &str) -> IconKind {
        match name.trim().to_ascii_lowercase().as_str() {
            "warning" => IconKind::Warning,
            "info" => IconKind::Info,
            "question" => IconKind::Question,
            _ => IconKind::Error,
        }
    }
}

/// A shape painted by `ui::theme::paint_glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    Shield,
    CrossCircle,
    Triangle,
    InfoCircle,
    QuestionCircle,
}

impl IconGlyph {
    pub fn name(self) -> &'static str {
        match self {
            IconGlyph::Shield => "shield-alt",
            IconGlyph::CrossCircle => "times-circle",
            IconGlyph::Triangle => "exclamation-triangle",
            IconGlyph::InfoCircle => "info-circle",
            IconGlyph::QuestionCircle => "question-circle",
        }
    }
}

/// Colors and glyphs for one alert kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    pub title_bar_bg: Color32,
    pub title_bar_icon: IconGlyph,
    pub title_bar_icon_color: Color32,
    pub body_icon: IconGlyph,
    pub body_icon_color: Color32,
}

const ERROR_STYLE: StyleBundle = StyleBundle {
    title_bar_bg: ERROR_TITLE_BAR,
    title_bar_icon: IconGlyph::Shield,
    title_bar_icon_color: Color32::WHITE,
    body_icon: IconGlyph::CrossCircle,
    body_icon_color: RED_600,
};

/// Resolve the style bundle for an icon kind.
pub fn style_for(kind: IconKind) -> StyleBundle {
    match kind {
        IconKind::Error => ERROR_STYLE,
        IconKind::Warning => StyleBundle {
            title_bar_bg: STANDARD_TITLE_BAR,
            title_bar_icon: IconGlyph::Triangle,
            title_bar_icon_color: YELLOW_900,
            body_icon: IconGlyph::Triangle,
            body_icon_color: YELLOW_500,
        },
        IconKind::Info => StyleBundle {
            title_bar_bg: STANDARD_TITLE_BAR,
            title_bar_icon: IconGlyph::InfoCircle,
            title_bar_icon_color: Color32::WHITE,
            body_icon: IconGlyph::InfoCircle,
            body_icon_color: BLUE_600,
        },
        IconKind::Question => StyleBundle {
            title_bar_bg: STANDARD_TITLE_BAR,
            title_bar_icon: IconGlyph::QuestionCircle,
            title_bar_icon_color: Color32::WHITE,
            body_icon: IconGlyph::QuestionCircle,
            body_icon_color: BLUE_600,
        },
    }
}
