//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::AlertForgeApp;

impl eframe::App for AlertForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);

        // Keep polling until the last playback outcome has been drained
        if self.audio.as_ref().is_some_and(|cue| cue.in_flight()) {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl AlertForgeApp {
    /// Run one frame of the app against `ctx`.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.process_events();

        self.resolve_initial_theme(ctx);
        self.sync_theme(ctx);

        self.render_page(ctx);

        // Dialogs last so they layer over the page
        self.render_dialogs(ctx);
    }
}
