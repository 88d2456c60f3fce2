//! Modal dialogs - self-contained dialog components.
//!
//! Dialogs are stored as `Option<Dialog>` in `DialogManager`:
//! - `None` = dialog is closed
//! - `Some(dialog)` = dialog is open with its state
//!
//! Dialogs return `Option<DialogAction>` from their `render()` method,
//! which the app processes in its update loop.

mod actions;
mod alert;

pub use actions::{CloseReason, DialogAction};
pub use alert::{layout_message, AlertDialog, DialogLayout, CLOSE_BUTTON_LABEL, DIALOG_WIDTH};
