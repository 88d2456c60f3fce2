//! Page layout: header with theme toggle, the form card, and the credits

use eframe::egui::{self, RichText};

use super::form::render_form;
use crate::app::{AlertForgeApp, APP_TITLE};
use crate::ui::theme::PageTheme;

const CARD_MAX_WIDTH: f32 = 576.0;

impl AlertForgeApp {
    /// Render the page behind the alert.
    pub(in crate::app) fn render_page(&mut self, ctx: &egui::Context) {
        let dark_mode = self.state.dark_mode();
        let theme = PageTheme::for_mode(dark_mode);
        let scroll_enabled = self.state.page().borrow().scroll_enabled();
        let sound_path = self.audio.as_ref().map(|cue| cue.path().display().to_string());

        let mut toggle_clicked = false;
        let mut generate_clicked = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.background).inner_margin(16.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false; 2])
                    .enable_scrolling(scroll_enabled)
                    .show(ui, |ui| {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(CARD_MAX_WIDTH);

                            egui::Frame::new()
                                .fill(theme.card)
                                .corner_radius(12.0)
                                .inner_margin(egui::Margin::same(28))
                                .shadow(ui.style().visuals.window_shadow)
                                .show(ui, |ui| {
                                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                        toggle_clicked = render_header(ui, &theme, dark_mode);
                                        ui.add_space(24.0);
                                        generate_clicked =
                                            render_form(ui, &mut self.state.content, &theme).generate;
                                    });
                                });

                            ui.add_space(28.0);
                            render_credits(ui, &theme, sound_path.as_deref());
                        });
                        ui.add_space(24.0);
                    });
            });

        if toggle_clicked {
            self.toggle_theme();
        }
        if generate_clicked {
            self.generate();
        }
    }
}

/// Title and the sun/moon toggle. Returns whether the toggle was clicked.
fn render_header(ui: &mut egui::Ui, theme: &PageTheme, dark_mode: bool) -> bool {
    let (icon, hint) = if dark_mode {
        ("☀", "Passer en mode clair")
    } else {
        ("🌙", "Passer en mode sombre")
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(APP_TITLE).heading().strong().color(theme.heading));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::Button::new(RichText::new(icon).size(22.0).color(theme.toggle_icon)).frame(false))
                .on_hover_text(hint)
                .clicked()
        })
        .inner
    })
    .inner
}

fn render_credits(ui: &mut egui::Ui, theme: &PageTheme, sound_path: Option<&str>) {
    let muted = |text: &str| RichText::new(text).small().color(theme.text_muted);

    ui.label(muted("Conçu avec 💻 et une touche d'humour."));
    ui.label(muted("Application à des fins de divertissement uniquement."));
    ui.add_space(4.0);
    match sound_path {
        Some(path) => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label(muted("Note: Pour le son d'erreur, placez un fichier son à"));
                ui.label(
                    RichText::new(path)
                        .monospace()
                        .small()
                        .background_color(theme.code_bg),
                );
            });
        }
        None => {
            ui.label(muted("Son désactivé dans la configuration."));
        }
    }
}
