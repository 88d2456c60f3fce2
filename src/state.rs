//! Form state, separated from UI logic.
//!
//! `FormState` holds everything the user can edit on the page plus the theme
//! flag. Whether the alert is showing is owned by `DialogManager`, not here.

use crate::config::DefaultContent;
use crate::icon::IconKind;
use crate::page::{PageContext, SharedPage, DARK_MARKER};

/// What the alert dialog shows. Any string is accepted, including empty ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub title: String,
    pub message: String,
    pub icon: IconKind,
}

impl Default for DialogContent {
    fn default() -> Self {
        Self::from(&DefaultContent::default())
    }
}

impl From<&DefaultContent> for DialogContent {
    fn from(defaults: &DefaultContent) -> Self {
        Self {
            title: defaults.title.clone(),
            message: defaults.message.clone(),
            icon: IconKind::from_name(&defaults.icon),
        }
    }
}

pub struct FormState {
    pub content: DialogContent,
    dark_mode: bool,
    page: SharedPage,
}

impl FormState {
    pub fn new(content: DialogContent, dark_mode: bool) -> Self {
        let page = PageContext::shared();
        page.borrow_mut().set_marker(DARK_MARKER, dark_mode);
        Self {
            content,
            dark_mode,
            page,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    /// Flip between light and dark, keeping the root marker in sync.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.page.borrow_mut().set_marker(DARK_MARKER, self.dark_mode);
        tracing::debug!("Theme switched to {}", if self.dark_mode { "dark" } else { "light" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = DialogContent::default();
        assert_eq!(content.title, "Erreur d'application");
        assert_eq!(content.icon, IconKind::Error);
        assert!(content.message.contains('\n'));
    }

    #[test]
    fn test_unknown_configured_icon_becomes_error() {
        let defaults = DefaultContent {
            icon: "fatal".to_string(),
            ..DefaultContent::default()
        };
        assert_eq!(DialogContent::from(&defaults).icon, IconKind::Error);
    }

    #[test]
    fn test_initial_marker_follows_mode() {
        let dark = FormState::new(DialogContent::default(), true);
        assert!(dark.page().borrow().has_marker(DARK_MARKER));
        let light = FormState::new(DialogContent::default(), false);
        assert!(!light.page().borrow().has_marker(DARK_MARKER));
    }

    #[test]
    fn test_double_toggle_restores_markers() {
        for initial in [false, true] {
            let mut state = FormState::new(DialogContent::default(), initial);
            let before: Vec<_> = state.page().borrow().markers().collect();

            state.toggle_theme();
            assert_eq!(state.dark_mode(), !initial);
            assert_eq!(state.page().borrow().has_marker(DARK_MARKER), !initial);

            state.toggle_theme();
            let after: Vec<_> = state.page().borrow().markers().collect();
            assert_eq!(before, after);
            assert_eq!(state.dark_mode(), initial);
        }
    }
}
