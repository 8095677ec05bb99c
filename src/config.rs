//! Game configuration.
//!
//! A game is described by one JSON document: a list of rooms, each naming
//! the capabilities it has (code, door, alarm, panel, message) with their
//! tuning. Anything omitted falls back to the defaults in
//! [`constants`](crate::constants); a capability left out entirely is a
//! room without it.
//!
//! Configuration is loaded and validated once, before the game is built;
//! nothing in here is consulted again at tick time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ALARM_DURATION_SECS, DEFAULT_CODE_LENGTH, DOOR_DURATION_SECS, DOOR_SLIDE_WIDTH,
    IDLE_THRESHOLD_SECS,
};
use crate::room::Alphabet;
use crate::types::Color;

/// Errors that can occur while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A game needs at least one room
    #[error("config has no rooms")]
    NoRooms,

    /// Code length of zero can never be entered
    #[error("room {room}: code length must be at least 1")]
    EmptyCode { room: usize },

    /// Codes use distinct symbols, so they cannot outgrow their alphabet
    #[error("room {room}: code length {len} exceeds the {alphabet} alphabet ({size} symbols)")]
    CodeTooLong {
        room: usize,
        len: usize,
        alphabet: &'static str,
        size: usize,
    },

    /// Timing values must be positive
    #[error("room {room}: {field} must be positive, got {value}")]
    NonPositiveTiming {
        room: usize,
        field: &'static str,
        value: f64,
    },
}

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete description of a game: one entry per room, in room-id order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    pub rooms: Vec<RoomSpec>,
}

impl GameConfig {
    /// Parse and validate a configuration from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rooms.is_empty() {
            return Err(ConfigError::NoRooms);
        }

        for (room, spec) in self.rooms.iter().enumerate() {
            if let Some(code) = &spec.code {
                if code.length == 0 {
                    return Err(ConfigError::EmptyCode { room });
                }
                let size = code.alphabet.symbol_count();
                if code.length > size {
                    return Err(ConfigError::CodeTooLong {
                        room,
                        len: code.length,
                        alphabet: code.alphabet.label(),
                        size,
                    });
                }
            }
            if let Some(door) = &spec.door {
                if door.duration <= 0.0 {
                    return Err(ConfigError::NonPositiveTiming {
                        room,
                        field: "door duration",
                        value: door.duration,
                    });
                }
            }
            if let Some(alarm) = &spec.alarm {
                if alarm.duration <= 0.0 {
                    return Err(ConfigError::NonPositiveTiming {
                        room,
                        field: "alarm duration",
                        value: alarm.duration,
                    });
                }
            }
            if let Some(panel) = &spec.panel {
                if panel.idle_threshold <= 0.0 {
                    return Err(ConfigError::NonPositiveTiming {
                        room,
                        field: "panel idle threshold",
                        value: panel.idle_threshold,
                    });
                }
            }
        }
        Ok(())
    }
}

/// One room's capabilities and tuning.
///
/// Every capability is optional; a room with none of them is inert but
/// legal.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Display name for logs and diagnostics
    #[serde(default)]
    pub name: String,
    /// Unlock code, if the room verifies one
    #[serde(default)]
    pub code: Option<CodeSpec>,
    /// Number of clue fixtures; defaults to the code length
    #[serde(default)]
    pub clue_count: Option<usize>,
    /// Sliding door, if the room has one
    #[serde(default)]
    pub door: Option<DoorSpec>,
    /// Alarm, if the room has one
    #[serde(default)]
    pub alarm: Option<AlarmSpec>,
    /// Drawing panel, if the room has one
    #[serde(default)]
    pub panel: Option<PanelSpec>,
    /// Congratulation clip name, played after solving
    #[serde(default)]
    pub message: Option<String>,
}

/// Tuning for a room's unlock code
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CodeSpec {
    /// Symbol set the code draws from
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Number of symbols to enter
    #[serde(default = "default_code_length")]
    pub length: usize,
    /// RNG seed; omit to seed from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CodeSpec {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            length: DEFAULT_CODE_LENGTH,
            seed: None,
        }
    }
}

/// Tuning for a room's sliding door
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DoorSpec {
    /// Seconds per full slide
    #[serde(default = "default_door_duration")]
    pub duration: f64,
    /// Leaf travel when fully open, in door-local units
    #[serde(default = "default_door_width")]
    pub slide_width: f32,
}

impl Default for DoorSpec {
    fn default() -> Self {
        Self {
            duration: DOOR_DURATION_SECS,
            slide_width: DOOR_SLIDE_WIDTH,
        }
    }
}

/// Tuning for a room's alarm
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AlarmSpec {
    /// Seconds the alarm runs before stopping itself
    #[serde(default = "default_alarm_duration")]
    pub duration: f64,
    /// Main light color restored when the alarm ends
    #[serde(default)]
    pub light_color: Color,
}

impl Default for AlarmSpec {
    fn default() -> Self {
        Self {
            duration: ALARM_DURATION_SECS,
            light_color: Color::WHITE,
        }
    }
}

/// Tuning for a room's drawing panel
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Seconds of pointer silence that finish a drawing
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold: f64,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            idle_threshold: IDLE_THRESHOLD_SECS,
        }
    }
}

fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

fn default_door_duration() -> f64 {
    DOOR_DURATION_SECS
}

fn default_door_width() -> f32 {
    DOOR_SLIDE_WIDTH
}

fn default_alarm_duration() -> f64 {
    ALARM_DURATION_SECS
}

fn default_idle_threshold() -> f64 {
    IDLE_THRESHOLD_SECS
}
