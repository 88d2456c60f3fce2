//! Dialog rendering orchestration

use eframe::egui;
use tracing::debug;

use super::AlertForgeApp;
use crate::ui::dialogs::DialogAction;

impl AlertForgeApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        let actions = self.dialogs.render(ctx, &self.state.content);

        for action in actions {
            self.handle_dialog_action(action);
        }
    }

    fn handle_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::CloseAlert(reason) => {
                debug!("Alert dismissed via {:?}", reason);
                self.close_dialog();
            }
        }
    }
}
