//! Application module structure for AlertForgeApp
//!
//! - `core`: AlertForgeApp struct, initialization, generate / close / theme
//! - `events`: Playback outcomes coming back from the audio thread
//! - `update`: Main update loop
//! - `dialogs`: Dialog rendering orchestration
//! - `ui::panels`: Page layout (header, card, credits)
//! - `ui::form`: The title / message / icon form

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;
pub mod ui;

// Re-export AlertForgeApp for public API
pub use self::core::{AlertForgeApp, APP_TITLE};
