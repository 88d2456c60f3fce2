//! Dialog action types - dialogs return actions instead of mutating state directly.
//!
//! The alert dialog never hides itself. It reports how the user dismissed it
//! and the app decides what to do with that.

/// Which control dismissed the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The window-style close button in the title bar.
    TitleBar,
    /// The OK button in the footer.
    OkButton,
    /// A click on the dimmed backdrop outside the dialog box.
    Backdrop,
}

/// Actions that dialogs can return to the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    CloseAlert(CloseReason),
}
