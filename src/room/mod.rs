//! Room aggregate.
//!
//! A [`Room`] couples the capabilities a scene room can have (code
//! verifier, sliding door, alarm, drawing panel, congratulation message)
//! behind one facade the orchestrator drives. Every capability is
//! optional and every cross-capability call checks presence first, so a
//! minimal room (say, door only) flows through the same code paths
//! without special cases.

mod alarm;
mod code;
mod door;

pub use alarm::*;
pub use code::*;
pub use door::*;

use crate::classify::{Classification, Classifier};
use crate::config::RoomSpec;
use crate::constants::FRUIT_WHEEL_POSITIONS;
use crate::effects::RoomEffects;
use crate::panel::Panel;
use crate::types::{CanvasPoint, Color, RoomId};

/// One room of the game world.
pub struct Room {
    id: RoomId,
    name: String,
    verifier: Option<CodeVerifier>,
    door: Option<DoorController>,
    alarm: Option<AlarmController>,
    panel: Option<Panel>,
    /// Number of clue fixtures on the walls; publication caps at the
    /// smaller of this and the code length
    clue_count: usize,
    /// Congratulation clip name, if configured
    message: Option<String>,
}

impl Room {
    pub(crate) fn from_spec(id: RoomId, spec: &RoomSpec) -> Self {
        let verifier = spec
            .code
            .map(|code| CodeVerifier::new(code.alphabet, code.length, code.seed));
        let clue_count = spec
            .clue_count
            .unwrap_or_else(|| spec.code.map_or(0, |code| code.length));

        Self {
            id,
            name: spec.name.clone(),
            verifier,
            door: spec.door.map(|d| DoorController::new(d.duration, d.slide_width)),
            alarm: spec.alarm.map(|a| AlarmController::new(a.duration, a.light_color)),
            panel: spec.panel.map(|p| Panel::new(p.idle_threshold)),
            clue_count,
            message: spec.message.clone(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ========================================================================
    // Code entry
    // ========================================================================

    /// Show the current code on the room's clue fixtures.
    ///
    /// Digit rooms display the symbol itself; fruit rooms turn each wheel
    /// to the symbol's texture offset. Rooms with fewer fixtures than code
    /// symbols show only the prefix.
    pub fn publish_clues(&self, effects: &mut dyn RoomEffects) {
        let Some(verifier) = &self.verifier else { return };
        let code = verifier.code();
        let count = self.clue_count.min(code.len());

        match verifier.alphabet() {
            Alphabet::Digits => {
                for index in 0..count {
                    effects.set_clue_digit(self.id, index, code[index]);
                }
            }
            Alphabet::Fruits => {
                for index in 0..count {
                    let offset = (code[index] - 1) as f32 / FRUIT_WHEEL_POSITIONS as f32;
                    effects.set_clue_offset(self.id, index, offset);
                }
            }
        }
    }

    /// Regenerate the room's code and republish its clues.
    pub fn reset_code(&mut self, effects: &mut dyn RoomEffects) {
        let Some(verifier) = &mut self.verifier else { return };
        verifier.reset_code();
        tracing::debug!(room = %self.id, "code regenerated");
        self.publish_clues(effects);
    }

    /// Run one guessed symbol through the verifier and relight the
    /// indicator lamps accordingly.
    ///
    /// Returns `None` when the room has no verifier; such guesses have no
    /// effect at all.
    pub fn apply_guess(
        &mut self,
        digit: u8,
        effects: &mut dyn RoomEffects,
    ) -> Option<GuessOutcome> {
        let id = self.id;
        let verifier = self.verifier.as_mut()?;

        let pre_position = verifier.position();
        let outcome = verifier.on_guess(digit);
        let lamps = verifier.code().len();

        if outcome.correct {
            for index in 0..lamps {
                let color = if index <= pre_position {
                    Color::GREEN
                } else {
                    Color::BLACK
                };
                effects.set_indicator(id, index, color);
            }
        } else {
            for index in 0..lamps {
                effects.set_indicator(id, index, Color::BLACK);
            }
        }

        Some(outcome)
    }

    // ========================================================================
    // Door and alarm
    // ========================================================================

    pub fn toggle_door(&mut self, now: f64, effects: &mut dyn RoomEffects) {
        if let Some(door) = &mut self.door {
            door.toggle(now, self.id, effects);
        }
    }

    pub fn sound_alarm(&mut self, now: f64, effects: &mut dyn RoomEffects) {
        if let Some(alarm) = &mut self.alarm {
            alarm.sound(now, self.id, effects);
        }
    }

    /// Advance the room's animations one tick
    pub fn update(&mut self, now: f64, effects: &mut dyn RoomEffects) {
        let indicators = self.verifier.as_ref().map_or(0, |v| v.code().len());
        if let Some(door) = &mut self.door {
            door.update(now, self.id, effects);
        }
        if let Some(alarm) = &mut self.alarm {
            alarm.update(now, self.id, indicators, effects);
        }
    }

    // ========================================================================
    // Panel input
    // ========================================================================

    pub fn pointer_down(&mut self, now: f64, p: CanvasPoint) {
        if let Some(panel) = &mut self.panel {
            panel.pointer_down(now, p);
        }
    }

    pub fn pointer_drag(&mut self, now: f64, p: CanvasPoint) {
        if let Some(panel) = &mut self.panel {
            panel.pointer_drag(now, p);
        }
    }

    pub(crate) fn poll_panel(
        &mut self,
        now: f64,
        classifier: &mut dyn Classifier,
    ) -> Option<Classification> {
        self.panel.as_mut()?.poll(now, classifier)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn verifier(&self) -> Option<&CodeVerifier> {
        self.verifier.as_ref()
    }

    pub fn alphabet(&self) -> Option<Alphabet> {
        self.verifier.as_ref().map(|v| v.alphabet())
    }

    pub fn door_state(&self) -> Option<DoorState> {
        self.door.as_ref().map(|d| d.state())
    }

    pub fn alarm_state(&self) -> Option<AlarmState> {
        self.alarm.as_ref().map(|a| a.state())
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
