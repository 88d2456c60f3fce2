//! Alert Forge library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod audio;
pub mod config;
pub mod dialog_manager;
pub mod error;
pub mod icon;
pub mod logging;
pub mod page;
pub mod state;
pub mod ui;
