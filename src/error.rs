//! Error types for the fallible edges of the app: sound playback and config loading.

use std::path::PathBuf;
use thiserror::Error;

/// Why an audio cue could not be played.
///
/// None of these are fatal; the app logs them and carries on.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound file not found: {}", path.display())]
    MissingAsset { path: PathBuf },

    #[error("no audio player available (tried: {tried})")]
    NoPlayer { tried: String },

    #[error("audio player `{player}` exited with status {code:?}")]
    PlayerFailed { player: String, code: Option<i32> },

    #[error("audio I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("audio player state lock poisoned")]
    Poisoned,
}

/// Problems reading `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_message_names_path() {
        let err = AudioError::MissingAsset {
            path: PathBuf::from("assets/sounds/windows_error.mp3"),
        };
        assert!(err.to_string().contains("windows_error.mp3"));
    }

    #[test]
    fn test_player_failed_message() {
        let err = AudioError::PlayerFailed {
            player: "paplay".to_string(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "audio player `paplay` exited with status Some(1)");
    }
}
