//! Alarm state machine.
//!
//! A wrong code entry sets off the room alarm: the klaxon loops while the
//! room's lights pulse red, then everything restores itself after the
//! alarm period.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Sounding  (sound() - klaxon starts, lights pulse red)
//! Sounding -> Idle      (alarm period elapsed - lights and readout restored)
//! Sounding -> Sounding  (sound() while already sounding is ignored)
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::ALARM_FLASH_RATE;
use crate::effects::RoomEffects;
use crate::types::{AudioCue, Color, DigitReadout, RoomId};

/// Whether the room alarm is going off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmState {
    #[default]
    Idle,
    Sounding,
}

impl AlarmState {
    pub fn is_sounding(&self) -> bool {
        matches!(self, AlarmState::Sounding)
    }
}

/// Drives one room's alarm flash and audio loop.
pub struct AlarmController {
    state: AlarmState,
    /// Simulated time the alarm went off
    entered_at: f64,
    /// Seconds the alarm runs before stopping itself
    duration: f64,
    /// Main light color to restore when the alarm ends
    original_light: Color,
}

impl AlarmController {
    pub fn new(duration: f64, original_light: Color) -> Self {
        Self {
            state: AlarmState::Idle,
            entered_at: 0.0,
            duration,
            original_light,
        }
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Set off the alarm. Re-triggering while it is already sounding does
    /// nothing (no restart, no audio stutter).
    pub fn sound(&mut self, now: f64, room: RoomId, effects: &mut dyn RoomEffects) {
        if self.state.is_sounding() {
            return;
        }
        self.state = AlarmState::Sounding;
        self.entered_at = now;
        effects.play_audio(room, AudioCue::Alarm);
        tracing::debug!(%room, "alarm sounding");
    }

    /// Advance the flash, stopping the alarm once its period has elapsed.
    ///
    /// While sounding, every indicator lamp and the main light pulse with
    /// the flash color. On stop, the main light returns to its exact
    /// original color, the lamps go black, and the digit readout resets to
    /// the unknown placeholder.
    pub fn update(
        &mut self,
        now: f64,
        room: RoomId,
        indicator_count: usize,
        effects: &mut dyn RoomEffects,
    ) {
        if !self.state.is_sounding() {
            return;
        }

        let elapsed = now - self.entered_at;
        if elapsed < self.duration {
            let flash = Color::rgb(flash_intensity(elapsed), 0.0, 0.0);
            for index in 0..indicator_count {
                effects.set_indicator(room, index, flash);
            }
            effects.set_main_light(room, flash);
        } else {
            self.state = AlarmState::Idle;
            effects.stop_audio(room, AudioCue::Alarm);
            effects.set_main_light(room, self.original_light);
            for index in 0..indicator_count {
                effects.set_indicator(room, index, Color::BLACK);
            }
            effects.set_digit_readout(room, DigitReadout::Unknown);
            tracing::debug!(%room, "alarm stopped");
        }
    }
}

/// Flash brightness at `elapsed` seconds into the alarm: `cos(t·4π)²`.
/// Starts at full red and pulses four times per second.
pub fn flash_intensity(elapsed: f64) -> f32 {
    (elapsed as f32 * ALARM_FLASH_RATE).cos().powi(2)
}
