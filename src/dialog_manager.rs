//! Dialog management for centralized dialog state and rendering.
//!
//! The manager is the single owner of whether the alert is visible: the alert
//! is open exactly when `alert_dialog` is `Some`. Closing it drops the
//! `AlertDialog`, which releases the page scroll lock.

use eframe::egui::Context;

use crate::page::SharedPage;
use crate::state::DialogContent;
use crate::ui::dialogs::{AlertDialog, DialogAction};

#[derive(Default)]
pub struct DialogManager {
    pub alert_dialog: Option<AlertDialog>,
}

impl DialogManager {
    /// Create a new DialogManager with all dialogs closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the alert. Does nothing if it is already showing.
    pub fn open_alert(&mut self, page: &SharedPage) {
        if self.alert_dialog.is_none() {
            self.alert_dialog = Some(AlertDialog::new(page));
        }
    }

    pub fn close_alert(&mut self) {
        self.alert_dialog = None;
    }

    pub fn is_alert_open(&self) -> bool {
        self.alert_dialog.is_some()
    }

    /// Render all open dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context, content: &DialogContent) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        if let Some(ref mut dialog) = self.alert_dialog {
            if let Some(action) = dialog.render(ctx, content) {
                actions.push(action);
            }
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContext;

    #[test]
    fn test_dialog_manager_new() {
        let dm = DialogManager::new();
        assert!(!dm.is_alert_open());
    }

    #[test]
    fn test_open_and_close_alert() {
        let page = PageContext::shared();
        let mut dm = DialogManager::new();
        dm.open_alert(&page);
        assert!(dm.is_alert_open());
        assert!(!page.borrow().scroll_enabled());

        dm.close_alert();
        assert!(!dm.is_alert_open());
        assert!(page.borrow().scroll_enabled());
    }

    #[test]
    fn test_open_twice_keeps_single_lock() {
        let page = PageContext::shared();
        let mut dm = DialogManager::new();
        dm.open_alert(&page);
        dm.open_alert(&page);
        dm.close_alert();
        assert!(page.borrow().scroll_enabled());
    }

    #[test]
    fn test_dropping_manager_releases_scroll() {
        let page = PageContext::shared();
        let mut dm = DialogManager::new();
        dm.open_alert(&page);
        drop(dm);
        assert!(page.borrow().scroll_enabled());
    }

    #[test]
    fn test_closed_manager_renders_nothing() {
        let ctx = Context::default();
        let mut dm = DialogManager::new();
        let mut actions = Vec::new();
        let _ = ctx.run(Default::default(), |ctx| {
            actions = dm.render(ctx, &DialogContent::default());
        });
        assert!(actions.is_empty());
    }
}
