use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

// Default configuration
pub const DEFAULT_SOUND_PATH: &str = "assets/sounds/windows_error.mp3";
pub const DEFAULT_LOG_FILTER: &str = "alert_forge=info,warn";
pub const DEFAULT_TITLE: &str = "Erreur d'application";
pub const DEFAULT_MESSAGE: &str = "Une erreur inattendue s'est produite. Veuillez contacter \
l'administrateur système ou réessayer plus tard.\n\nCode d'erreur: 0x80070005";

/// An external program able to play the sound file, tried in order.
/// The sound path is appended as the last argument.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl PlayerCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub players: Vec<PlayerCommand>,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_SOUND_PATH),
            players: vec![
                PlayerCommand::new("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
                PlayerCommand::new("mpg123", &["-q"]),
                PlayerCommand::new("paplay", &[]),
                PlayerCommand::new("pw-play", &[]),
                PlayerCommand::new("afplay", &[]),
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 760.0,
        }
    }
}

/// Initial contents of the form. `icon` is a machine name (`error`,
/// `warning`, `info`, `question`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DefaultContent {
    pub title: String,
    pub message: String,
    pub icon: String,
}

impl Default for DefaultContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            icon: "error".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub sound: SoundConfig,
    pub log_level: String,
    pub defaults: DefaultContent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            sound: SoundConfig::default(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            defaults: DefaultContent::default(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "alert-forge", "alert-forge")
        .map(|proj| proj.config_dir().join("config.json"))
}

/// Load the user's config. A missing file is not an error; it yields defaults.
/// The file is only ever read.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(AppConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}
