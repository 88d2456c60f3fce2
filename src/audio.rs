//! Fire-and-forget playback of the alert sound.
//!
//! `AudioCue::restart` never blocks the UI: it stops whatever the cue was
//! playing, then hands the new playback to a short-lived thread. When the
//! playback settles, a [`PlaybackOutcome`] is sent back over a channel that the
//! UI drains once per frame.
//!
//! The default backend, [`SystemPlayer`], delegates to the first external
//! player program it can start (`ffplay`, `mpg123`, `paplay`, ...).

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use crate::config::{PlayerCommand, SoundConfig};
use crate::error::AudioError;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// How a playback that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Finished,
    /// Cut short by a later `restart`.
    Interrupted,
}

#[derive(Debug)]
pub enum PlaybackOutcome {
    Finished,
    Interrupted,
    Failed(AudioError),
}

impl From<Result<Settled, AudioError>> for PlaybackOutcome {
    fn from(result: Result<Settled, AudioError>) -> Self {
        match result {
            Ok(Settled::Finished) => PlaybackOutcome::Finished,
            Ok(Settled::Interrupted) => PlaybackOutcome::Interrupted,
            Err(e) => PlaybackOutcome::Failed(e),
        }
    }
}

/// Something that can play a sound file to completion.
pub trait PlaybackBackend: Send + Sync + 'static {
    /// Stop any playback in progress so the next `play` starts from the beginning.
    fn rewind(&self);

    /// Play `path`, blocking the calling thread until playback settles.
    fn play(&self, path: &Path) -> Result<Settled, AudioError>;
}

/// Plays sounds by spawning an external player process.
pub struct SystemPlayer {
    players: Vec<PlayerCommand>,
    current: Mutex<Option<Child>>,
}

impl SystemPlayer {
    pub fn new(players: Vec<PlayerCommand>) -> Self {
        Self {
            players,
            current: Mutex::new(None),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Child>>, AudioError> {
        self.current.lock().map_err(|_| AudioError::Poisoned)
    }

    fn spawn_first_available(&self, path: &Path) -> Result<(Child, String), AudioError> {
        for player in &self.players {
            let spawned = Command::new(&player.program)
                .args(&player.args)
                .arg(path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(child) => return Ok((child, player.program.clone())),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::trace!("Audio player `{}` not installed", player.program);
                }
                Err(e) => {
                    tracing::trace!("Audio player `{}` could not start: {}", player.program, e);
                }
            }
        }

        Err(AudioError::NoPlayer {
            tried: self
                .players
                .iter()
                .map(|p| p.program.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl PlaybackBackend for SystemPlayer {
    fn rewind(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(mut child) = current.take() {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }

    fn play(&self, path: &Path) -> Result<Settled, AudioError> {
        if !path.is_file() {
            return Err(AudioError::MissingAsset {
                path: path.to_path_buf(),
            });
        }

        let (child, player) = self.spawn_first_available(path)?;
        let pid = child.id();
        tracing::debug!("Playing {} with `{}` (pid {})", path.display(), player, pid);

        if let Some(mut stale) = self.lock()?.replace(child) {
            let _ = stale.kill();
            let _ = stale.wait();
        }

        loop {
            thread::sleep(POLL_INTERVAL);
            let mut current = self.lock()?;
            let Some(child) = current.as_mut().filter(|c| c.id() == pid) else {
                return Ok(Settled::Interrupted);
            };
            if let Some(status) = child.try_wait()? {
                current.take();
                return if status.success() {
                    Ok(Settled::Finished)
                } else {
                    Err(AudioError::PlayerFailed {
                        player,
                        code: status.code(),
                    })
                };
            }
        }
    }
}

/// The alert sound, bound to a fixed file.
pub struct AudioCue {
    path: PathBuf,
    backend: Arc<dyn PlaybackBackend>,
    outcome_tx: Sender<PlaybackOutcome>,
    outcome_rx: Receiver<PlaybackOutcome>,
    // Restarts whose outcome has not been drained yet
    pending: AtomicUsize,
}

impl AudioCue {
    pub fn new(path: impl Into<PathBuf>, backend: Arc<dyn PlaybackBackend>) -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            path: path.into(),
            backend,
            outcome_tx,
            outcome_rx,
            pending: AtomicUsize::new(0),
        }
    }

    /// Build the cue described by the config, or `None` when sound is disabled.
    pub fn from_config(config: &SoundConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let backend = Arc::new(SystemPlayer::new(config.players.clone()));
        Some(Self::new(config.path.clone(), backend))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Play the cue from the start. Returns immediately.
    pub fn restart(&self) {
        self.backend.rewind();
        self.pending.fetch_add(1, Ordering::SeqCst);

        let backend = Arc::clone(&self.backend);
        let path = self.path.clone();
        let tx = self.outcome_tx.clone();
        let spawned = thread::Builder::new()
            .name("audio-cue".to_string())
            .spawn(move || {
                let outcome = PlaybackOutcome::from(backend.play(&path));
                // If send fails the app is shutting down - ignore
                let _ = tx.send(outcome);
            });

        if let Err(e) = spawned {
            let _ = self.outcome_tx.send(PlaybackOutcome::Failed(AudioError::Io(e)));
        }
    }

    /// Outcomes of playbacks that settled since the last call.
    pub fn settled(&self) -> impl Iterator<Item = PlaybackOutcome> + '_ {
        self.outcome_rx.try_iter().inspect(|_| self.mark_drained())
    }

    /// Block until the next outcome arrives or `timeout` passes.
    pub fn wait_settled(&self, timeout: Duration) -> Option<PlaybackOutcome> {
        let outcome = self.outcome_rx.recv_timeout(timeout).ok();
        if outcome.is_some() {
            self.mark_drained();
        }
        outcome
    }

    /// Whether a restart is still waiting for its outcome to be drained.
    pub fn in_flight(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    fn mark_drained(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingBackend {
        rewinds: AtomicUsize,
        result: fn() -> Result<Settled, AudioError>,
    }

    impl PlaybackBackend for RecordingBackend {
        fn rewind(&self) {
            self.rewinds.fetch_add(1, Ordering::SeqCst);
        }

        fn play(&self, _path: &Path) -> Result<Settled, AudioError> {
            (self.result)()
        }
    }

    fn cue_with(result: fn() -> Result<Settled, AudioError>) -> (AudioCue, Arc<RecordingBackend>) {
        let backend = Arc::new(RecordingBackend {
            rewinds: AtomicUsize::new(0),
            result,
        });
        let cue = AudioCue::new("cue.mp3", backend.clone());
        (cue, backend)
    }

    #[test]
    fn test_restart_rewinds_before_playing() {
        let (cue, backend) = cue_with(|| Ok(Settled::Finished));
        cue.restart();
        assert_eq!(backend.rewinds.load(Ordering::SeqCst), 1);
        assert!(matches!(
            cue.wait_settled(Duration::from_secs(5)),
            Some(PlaybackOutcome::Finished)
        ));
    }

    #[test]
    fn test_failure_is_reported_as_outcome() {
        let (cue, _backend) = cue_with(|| Err(AudioError::NoPlayer { tried: "x".into() }));
        cue.restart();
        assert!(matches!(
            cue.wait_settled(Duration::from_secs(5)),
            Some(PlaybackOutcome::Failed(AudioError::NoPlayer { .. }))
        ));
    }

    #[test]
    fn test_in_flight_until_outcome_is_drained() {
        let (cue, _backend) = cue_with(|| Ok(Settled::Finished));
        assert!(!cue.in_flight());

        cue.restart();
        cue.restart();
        assert!(cue.in_flight());

        assert!(cue.wait_settled(Duration::from_secs(5)).is_some());
        assert!(cue.in_flight());
        assert!(cue.wait_settled(Duration::from_secs(5)).is_some());
        assert!(!cue.in_flight());
        assert_eq!(cue.settled().count(), 0);
    }

    #[test]
    fn test_settled_drain_clears_in_flight() {
        let (cue, _backend) = cue_with(|| Err(AudioError::Poisoned));
        cue.restart();
        // Wait for the worker without consuming its outcome
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while cue.outcome_rx.is_empty() && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(cue.in_flight());
        assert_eq!(cue.settled().count(), 1);
        assert!(!cue.in_flight());
    }

    #[test]
    fn test_unstartable_player_falls_through_to_next() {
        // A plain file is not executable, so spawning it fails with something other than NotFound
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let broken = manifest.to_string_lossy().into_owned();
        let player = SystemPlayer::new(vec![
            PlayerCommand::new(&broken, &[]),
            PlayerCommand::new("true", &[]),
        ]);
        assert!(matches!(player.play(&manifest), Ok(Settled::Finished)));
    }

    #[test]
    fn test_missing_asset() {
        let player = SystemPlayer::new(vec![PlayerCommand::new("true", &[])]);
        let result = player.play(Path::new("definitely/not/here.mp3"));
        assert!(matches!(result, Err(AudioError::MissingAsset { .. })));
    }

    #[test]
    fn test_no_player_available() {
        let player = SystemPlayer::new(vec![
            PlayerCommand::new("alert-forge-no-such-player-1", &[]),
            PlayerCommand::new("alert-forge-no-such-player-2", &["-q"]),
        ]);
        let existing = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        match player.play(&existing) {
            Err(AudioError::NoPlayer { tried }) => {
                assert_eq!(tried, "alert-forge-no-such-player-1, alert-forge-no-such-player-2");
            }
            other => panic!("expected NoPlayer, got {other:?}"),
        }
    }

    #[test]
    fn test_disabled_sound_has_no_cue() {
        let config = SoundConfig {
            enabled: false,
            ..SoundConfig::default()
        };
        assert!(AudioCue::from_config(&config).is_none());
    }
}
