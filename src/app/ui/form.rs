//! The alert form: title, message, icon picker and the generate button

use eframe::egui::{self, Color32, RichText};

use crate::icon::IconKind;
use crate::state::DialogContent;
use crate::ui::theme::PageTheme;

pub const GENERATE_LABEL: &str = "Générer l'Erreur";

/// What the user asked for on this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormOutput {
    pub generate: bool,
}

/// Render the form fields into `ui`, editing `content` in place.
pub fn render_form(ui: &mut egui::Ui, content: &mut DialogContent, theme: &PageTheme) -> FormOutput {
    let mut output = FormOutput::default();

    field_label(ui, "Titre de l'Erreur :");
    input_frame(ui, theme, "alert_title", |ui, id| {
        ui.add(
            egui::TextEdit::singleline(&mut content.title)
                .id(id)
                .desired_width(f32::INFINITY)
                .frame(false)
                .hint_text("Ex: Erreur critique du système"),
        )
    });
    ui.add_space(14.0);

    field_label(ui, "Message d'Erreur :");
    input_frame(ui, theme, "alert_message", |ui, id| {
        ui.add(
            egui::TextEdit::multiline(&mut content.message)
                .id(id)
                .desired_rows(5)
                .desired_width(f32::INFINITY)
                .frame(false)
                .hint_text(
                    "Ex: L'opération demandée n'a pas pu être complétée en raison d'une défaillance matérielle.",
                ),
        )
    });
    ui.add_space(14.0);

    field_label(ui, "Icône d'Erreur :");
    egui::ComboBox::from_id_salt("alert_icon")
        .selected_text(content.icon.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for kind in IconKind::ALL {
                ui.selectable_value(&mut content.icon, kind, kind.label());
            }
        });
    ui.add_space(20.0);

    let width = ui.available_width();
    output.generate = ui
        .scope(|ui| {
            let widgets = &mut ui.visuals_mut().widgets;
            widgets.inactive.weak_bg_fill = theme.accent;
            widgets.hovered.weak_bg_fill = theme.accent_hover;
            widgets.active.weak_bg_fill = theme.accent_hover;

            ui.add(
                egui::Button::new(
                    RichText::new(format!("✨ {}", GENERATE_LABEL))
                        .size(16.0)
                        .strong()
                        .color(Color32::WHITE),
                )
                .min_size(egui::vec2(width, 44.0)),
            )
            .clicked()
        })
        .inner;

    output
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(13.0).strong());
    ui.add_space(4.0);
}

/// Styled input frame; the border takes the accent color while the field has focus.
fn input_frame(
    ui: &mut egui::Ui,
    theme: &PageTheme,
    id_salt: &str,
    add_contents: impl FnOnce(&mut egui::Ui, egui::Id) -> egui::Response,
) {
    let id = ui.make_persistent_id(id_salt);
    let border = if ui.memory(|mem| mem.has_focus(id)) {
        theme.accent
    } else {
        theme.border
    };

    egui::Frame::new()
        .fill(theme.input_bg)
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| add_contents(ui, id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_form_without_clicks_does_not_generate() {
        let ctx = egui::Context::default();
        let mut content = DialogContent::default();
        let mut output = FormOutput::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                output = render_form(ui, &mut content, &PageTheme::light());
            });
        });
        assert!(!output.generate);
        assert_eq!(content, DialogContent::default());
    }
}
