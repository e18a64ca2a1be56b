//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunable constants for the simulation, window, and audio collaborators.
//
// Every field has a default equal to the fixed constant the game ships
// with, so a partial (or absent) TOML file only overrides what it names:
//
// ```toml
// [physics]
// gravity = 2000.0
//
// [audio]
// music_enabled = false
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

//=== Default Constants ===================================================

pub const GRAVITY: f32 = 1800.0;
pub const MOVE_SPEED: f32 = 260.0;
pub const JUMP_SPEED: f32 = 640.0;
pub const MAX_FALL: f32 = 1200.0;
pub const DOUBLE_JUMP_FACTOR: f32 = 0.9;
pub const STOMP_BOUNCE_FACTOR: f32 = 0.6;
pub const STOMP_TOLERANCE: i32 = 20;
pub const INVINCIBILITY_DURATION: f32 = 0.3;
pub const ENEMY_DEATH_DURATION: f32 = 0.25;
pub const JUMP_BUFFER: f32 = 0.15;
pub const FALL_MARGIN: i32 = 100;
pub const STARTING_LIVES: u32 = 3;

pub const WORLD_WIDTH: i32 = 960;
pub const WORLD_HEIGHT: i32 = 540;

//=== ConfigError =========================================================

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

//=== PhysicsConfig =======================================================

/// Physics and combat tuning shared by the player, enemies and the scene.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (px/s²).
    pub gravity: f32,
    /// Horizontal player speed (px/s).
    pub move_speed: f32,
    /// Initial upward speed of a grounded jump (px/s).
    pub jump_speed: f32,
    /// Terminal falling speed (px/s).
    pub max_fall: f32,
    /// Fraction of `jump_speed` used by the mid-air jump.
    pub double_jump_factor: f32,
    /// Fraction of `jump_speed` the player bounces with after a stomp.
    pub stomp_bounce_factor: f32,
    /// Max distance (px) between player bottom and enemy top for a stomp.
    pub stomp_tolerance: i32,
    /// Seconds of damage immunity after a hit or respawn.
    pub invincibility_duration: f32,
    /// Seconds a stomped enemy lingers before removal.
    pub enemy_death_duration: f32,
    /// Seconds a jump request stays pending.
    pub jump_buffer: f32,
    /// Pixels below the world bottom at which a fall costs a life.
    pub fall_margin: i32,
}

impl PhysicsConfig {
    /// Vertical velocity applied after a successful stomp (negative = up).
    pub fn stomp_bounce(&self) -> f32 {
        -self.jump_speed * self.stomp_bounce_factor
    }

    /// Vertical velocity of the mid-air jump (negative = up).
    pub fn double_jump_velocity(&self) -> f32 {
        -self.jump_speed * self.double_jump_factor
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            max_fall: MAX_FALL,
            double_jump_factor: DOUBLE_JUMP_FACTOR,
            stomp_bounce_factor: STOMP_BOUNCE_FACTOR,
            stomp_tolerance: STOMP_TOLERANCE,
            invincibility_duration: INVINCIBILITY_DURATION,
            enemy_death_duration: ENEMY_DEATH_DURATION,
            jump_buffer: JUMP_BUFFER,
            fall_margin: FALL_MARGIN,
        }
    }
}

//=== WindowConfig ========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Jungle Platform".to_string(),
            width: WORLD_WIDTH as u32,
            height: WORLD_HEIGHT as u32,
        }
    }
}

//=== AudioConfig =========================================================

/// Initial audio toggles; both can be flipped from the main menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub music_enabled: bool,
    pub sfx_enabled: bool,
    pub music_track: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sfx_enabled: true,
            music_track: "music".to_string(),
        }
    }
}

//=== GameConfig ==========================================================

/// Top-level configuration handed to [`crate::EngineBuilder::with_config`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_lives: u32,
    pub physics: PhysicsConfig,
    pub window: WindowConfig,
    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            physics: PhysicsConfig::default(),
            window: WindowConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl GameConfig {
    //--- Loading ----------------------------------------------------------

    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`load`](Self::load) but falls back to defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.physics.gravity, 1800.0);
        assert_eq!(config.physics.stomp_tolerance, 20);
        assert_eq!(config.window.width, 960);
        assert_eq!(config.window.height, 540);
        assert!(config.audio.music_enabled);
    }

    #[test]
    fn derived_velocities() {
        let physics = PhysicsConfig::default();
        assert_eq!(physics.stomp_bounce(), -384.0);
        assert_eq!(physics.double_jump_velocity(), -576.0);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = GameConfig::from_toml_str(
            r#"
            starting_lives = 5

            [physics]
            gravity = 2000.0

            [audio]
            music_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.physics.gravity, 2000.0);
        assert_eq!(config.physics.move_speed, MOVE_SPEED);
        assert!(!config.audio.music_enabled);
        assert!(config.audio.sfx_enabled);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\ntitle = \"Test\"").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.window.title, "Test");
    }

    #[test]
    fn load_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_lives = \"many\"").unwrap();

        match GameConfig::load(file.path()) {
            Err(ConfigError::Parse { .. }) => {}
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(config, GameConfig::default());
    }
}
