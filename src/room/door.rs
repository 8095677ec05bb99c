//! Sliding door state machine.
//!
//! Doors animate between closed and open over a fixed slide time. The
//! controller owns only the logical state; leaf positions reach the scene
//! as extents through the effects sink.
//!
//! ## State Transitions
//!
//! ```text
//! Closed  -> Opening  (toggle - leaves start sliding apart)
//! Opening -> Open     (slide time elapsed - extent locked at full width)
//! Open    -> Closing  (toggle - leaves start sliding together)
//! Closing -> Closed   (slide time elapsed - extent locked at zero)
//!
//! Opening -> Opening  (toggle mid-slide is ignored)
//! Closing -> Closing  (toggle mid-slide is ignored)
//! ```

use serde::{Deserialize, Serialize};

use crate::effects::RoomEffects;
use crate::types::{AudioCue, RoomId};

/// Where a door is in its open/close cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DoorState {
    /// True while the leaves are mid-slide
    pub fn is_moving(&self) -> bool {
        matches!(self, DoorState::Opening | DoorState::Closing)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DoorState::Closed)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DoorState::Open)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DoorState::Closed => "closed",
            DoorState::Opening => "opening",
            DoorState::Open => "open",
            DoorState::Closing => "closing",
        }
    }
}

/// Drives one room's door through its cycle.
pub struct DoorController {
    state: DoorState,
    /// Simulated time the current transit began
    entered_at: f64,
    /// Seconds per full slide
    duration: f64,
    /// Leaf travel when fully open, in door-local units
    slide_width: f32,
}

impl DoorController {
    pub fn new(duration: f64, slide_width: f32) -> Self {
        Self {
            state: DoorState::Closed,
            entered_at: 0.0,
            duration,
            slide_width,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    /// Start of the current transit; meaningful while `is_moving`
    pub fn entered_at(&self) -> f64 {
        self.entered_at
    }

    /// Reverse the door: closed doors start opening, open doors start
    /// closing. A door mid-slide ignores the toggle entirely.
    pub fn toggle(&mut self, now: f64, room: RoomId, effects: &mut dyn RoomEffects) {
        let next = match self.state {
            DoorState::Closed => DoorState::Opening,
            DoorState::Open => DoorState::Closing,
            DoorState::Opening | DoorState::Closing => return,
        };
        self.state = next;
        self.entered_at = now;
        effects.play_audio(room, AudioCue::DoorSlide);
        tracing::debug!(%room, state = next.label(), "door toggled");
    }

    /// Advance the slide animation.
    ///
    /// Transit extents interpolate linearly; the terminal update pins the
    /// extent to exactly zero (closed) or exactly the slide width (open)
    /// before the state flips, so no position error accumulates across
    /// cycles.
    pub fn update(&mut self, now: f64, room: RoomId, effects: &mut dyn RoomEffects) {
        if !self.state.is_moving() {
            return;
        }

        let t = ((now - self.entered_at) / self.duration) as f32;
        match self.state {
            DoorState::Opening => {
                effects.slide_door_leaves(room, t.min(1.0) * self.slide_width);
                if t > 1.0 {
                    self.state = DoorState::Open;
                    tracing::debug!(%room, "door open");
                }
            }
            DoorState::Closing => {
                effects.slide_door_leaves(room, (1.0 - t).max(0.0) * self.slide_width);
                if t > 1.0 {
                    self.state = DoorState::Closed;
                    tracing::debug!(%room, "door closed");
                }
            }
            DoorState::Closed | DoorState::Open => {}
        }
    }
}
