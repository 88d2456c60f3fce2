//! Text styles and global egui style for the page.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::colors::PageTheme;

/// Font for text inside the alert dialog, roughly Segoe UI at 12-13px.
///
/// Kept independent of `Style::text_styles` so the dialog renders the same
/// whatever the page style is.
pub fn alert_font(size: f32) -> FontId {
    FontId::proportional(size)
}

/// Configure text styles
///
/// - **Small**: 11px - footer credits
/// - **Body**: 14px - labels and inputs
/// - **Button**: 14px
/// - **Heading**: 26px - page title
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(14.0, Proportional)),
        (TextStyle::Heading, FontId::new(26.0, Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, Monospace)),
    ]
    .into()
}

/// Apply the page style for the given mode.
///
/// Called at startup and whenever the dark marker on the page flips.
pub fn apply_app_style(ctx: &egui::Context, dark_mode: bool) {
    let theme = PageTheme::for_mode(dark_mode);
    ctx.set_theme(if dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    let mut style = (*ctx.style()).clone();

    style.visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.interact_size.y = 32.0;

    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.card;
    style.visuals.extreme_bg_color = theme.input_bg;
    style.visuals.override_text_color = Some(theme.text_primary);

    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = egui::CornerRadius::same(8);
    }
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.border);
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(2.0, theme.accent);
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(14, 165, 233, 90);
    style.visuals.selection.stroke = egui::Stroke::new(2.0, theme.accent);

    ctx.set_style(style);
}
