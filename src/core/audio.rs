//=========================================================================
// Audio
//=========================================================================
//
// Fire-and-forget sound effects and background music.
//
// The simulation only emits `SoundEvent`s. The `AudioDispatcher` applies
// the user's music/sfx toggles and forwards the requests to an
// `AudioBackend`. Backend failures (missing files, no device) are logged
// at debug level and otherwise ignored: audio never stops the game.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::config::AudioConfig;

//=== SoundEvent ==========================================================

/// One-shot sound requested by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Jump,
    HitEnemy,
    PlayerHurt,
}

impl SoundEvent {
    /// Asset name of the sound.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::HitEnemy => "hit_enemy",
            Self::PlayerHurt => "player_hurt",
        }
    }
}

//=== AudioError ==========================================================

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound '{0}' is not available")]
    MissingSound(String),

    #[error("music track '{0}' is not available")]
    MissingTrack(String),

    #[error("audio device unavailable: {0}")]
    Device(String),
}

//=== AudioBackend ========================================================

/// Sink for sound and music playback, implemented by the host.
///
/// Runs on the logic thread, hence `Send`.
pub trait AudioBackend: Send {
    fn play_sound(&mut self, name: &str) -> Result<(), AudioError>;

    /// Starts `track` looping, replacing any track already playing.
    fn play_music(&mut self, track: &str) -> Result<(), AudioError>;

    fn stop_music(&mut self) -> Result<(), AudioError>;
}

//=== SilentAudio =========================================================

/// Backend that plays nothing. Used when no audio host is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioBackend for SilentAudio {
    fn play_sound(&mut self, name: &str) -> Result<(), AudioError> {
        trace!(target: "core::audio", "(silent) sound {}", name);
        Ok(())
    }

    fn play_music(&mut self, track: &str) -> Result<(), AudioError> {
        trace!(target: "core::audio", "(silent) music {}", track);
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

//=== AudioDispatcher =====================================================

pub struct AudioDispatcher {
    backend: Box<dyn AudioBackend>,
    music_track: String,
    music_enabled: bool,
    sfx_enabled: bool,
    music_started: bool,
}

impl AudioDispatcher {
    pub fn new(backend: Box<dyn AudioBackend>, config: &AudioConfig) -> Self {
        Self {
            backend,
            music_track: config.music_track.clone(),
            music_enabled: config.music_enabled,
            sfx_enabled: config.sfx_enabled,
            music_started: false,
        }
    }

    //--- Music ------------------------------------------------------------

    /// Starts the background track on the first call if music is enabled.
    /// Later calls do nothing.
    pub fn ensure_music_started(&mut self) {
        if self.music_started {
            return;
        }
        self.music_started = true;

        if self.music_enabled {
            info!(target: "core::audio", "Starting background music '{}'", self.music_track);
            self.start_music();
        }
    }

    /// Flips the music toggle, starting or stopping playback. Returns the
    /// new state.
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;

        if self.music_enabled {
            self.start_music();
        } else if let Err(e) = self.backend.stop_music() {
            debug!(target: "core::audio", "Ignoring failure to stop music: {}", e);
        }

        info!(target: "core::audio", "Music {}", on_off(self.music_enabled));
        self.music_enabled
    }

    fn start_music(&mut self) {
        if let Err(e) = self.backend.play_music(&self.music_track) {
            debug!(target: "core::audio", "Ignoring music failure: {}", e);
        }
    }

    //--- Sound Effects ----------------------------------------------------

    /// Flips the sound effect toggle. Returns the new state.
    pub fn toggle_sfx(&mut self) -> bool {
        self.sfx_enabled = !self.sfx_enabled;
        info!(target: "core::audio", "Sounds {}", on_off(self.sfx_enabled));
        self.sfx_enabled
    }

    /// Plays every requested sound in order, unless effects are disabled.
    pub fn play(&mut self, sounds: &[SoundEvent]) {
        if !self.sfx_enabled {
            return;
        }

        for sound in sounds {
            if let Err(e) = self.backend.play_sound(sound.name()) {
                debug!(target: "core::audio", "Ignoring sound failure: {}", e);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn sfx_enabled(&self) -> bool {
        self.sfx_enabled
    }
}

/// `"ON"` / `"OFF"` label for a toggle.
pub fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
