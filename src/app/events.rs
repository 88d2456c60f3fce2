//! Playback outcomes from the audio thread

use tracing::{debug, warn};

use super::AlertForgeApp;
use crate::audio::PlaybackOutcome;

impl AlertForgeApp {
    /// Drain settled playbacks. Failures are logged and otherwise ignored.
    pub fn process_events(&mut self) {
        let Some(cue) = &self.audio else {
            return;
        };

        for outcome in cue.settled() {
            match outcome {
                PlaybackOutcome::Finished => debug!("Alert sound finished"),
                PlaybackOutcome::Interrupted => debug!("Alert sound restarted before it finished"),
                PlaybackOutcome::Failed(e) => warn!(
                    "Could not play alert sound: {}. Check that {} exists and that an audio player is installed.",
                    e,
                    cue.path().display()
                ),
            }
        }
    }
}
