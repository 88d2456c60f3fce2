//! Core AlertForgeApp struct definition and initialization

use eframe::egui;
use tracing::info;

use crate::audio::AudioCue;
use crate::config::AppConfig;
use crate::dialog_manager::DialogManager;
use crate::page::DARK_MARKER;
use crate::state::{DialogContent, FormState};
use crate::ui;

pub const APP_TITLE: &str = "Générateur d'Erreur Style Windows";

pub struct AlertForgeApp {
    // Form inputs, theme flag and the shared page context
    pub state: FormState,

    // Dialogs - the alert is visible exactly when it is open here
    pub dialogs: DialogManager,

    // Alert sound; None when sound is disabled
    pub audio: Option<AudioCue>,

    // The host color-scheme preference is only consulted once
    pub(super) initial_theme_resolved: bool,
    pub(super) applied_dark_mode: Option<bool>,
}

impl AlertForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let system_theme = cc.egui_ctx.system_theme();
        let mut app = Self::with_parts(
            DialogContent::from(&config.defaults),
            system_theme == Some(egui::Theme::Dark),
            AudioCue::from_config(&config.sound),
        );
        // Some platforms only report the preference with the first frame
        app.initial_theme_resolved = system_theme.is_some();
        app.sync_theme(&cc.egui_ctx);
        app
    }

    /// Build the app without a window, from already-resolved parts.
    pub fn with_parts(content: DialogContent, dark_mode: bool, audio: Option<AudioCue>) -> Self {
        Self {
            state: FormState::new(content, dark_mode),
            dialogs: DialogManager::new(),
            audio,
            initial_theme_resolved: true,
            applied_dark_mode: None,
        }
    }

    /// Show the alert and play the alert sound from the start.
    ///
    /// The alert is visible as soon as this returns; the sound plays (or
    /// fails) in the background and never affects the dialog.
    pub fn generate(&mut self) {
        self.dialogs.open_alert(self.state.page());
        info!(
            "Alert shown: {:?} ({} chars, icon {})",
            self.state.content.title,
            self.state.content.message.chars().count(),
            self.state.content.icon.name()
        );

        if let Some(cue) = &self.audio {
            cue.restart();
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialogs.close_alert();
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialogs.is_alert_open()
    }

    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
    }

    /// Adopt the host's dark/light preference if it was not known at startup.
    pub(super) fn resolve_initial_theme(&mut self, ctx: &egui::Context) {
        if self.initial_theme_resolved {
            return;
        }
        self.initial_theme_resolved = true;
        if ctx.system_theme() == Some(egui::Theme::Dark) && !self.state.dark_mode() {
            self.state.toggle_theme();
        }
    }

    /// Restyle egui when the dark marker on the page changed.
    pub(super) fn sync_theme(&mut self, ctx: &egui::Context) {
        let dark = self.state.page().borrow().has_marker(DARK_MARKER);
        if self.applied_dark_mode != Some(dark) {
            ui::theme::apply_app_style(ctx, dark);
            self.applied_dark_mode = Some(dark);
        }
    }
}
