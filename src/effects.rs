//! Effects sink: the one-way seam between game logic and presentation.
//!
//! Every engine-facing visual and audible change flows through
//! [`RoomEffects`] as a notification. The core never reads anything back;
//! a sink that ignores every call is a valid sink. This keeps the state
//! machines free of render state and makes scenario tests a matter of
//! recording calls.
//!
//! All methods default to no-ops, so a host only implements the fixtures
//! its scene actually has; a room with no clue displays simply never
//! overrides the clue methods.

use crate::types::{AudioCue, Color, DigitReadout, RoomId};

/// Receiver for room presentation updates.
#[allow(unused_variables)]
pub trait RoomEffects {
    /// Color one of the room's code-progress indicator lamps
    fn set_indicator(&mut self, room: RoomId, index: usize, color: Color) {}

    /// Color the room's main overhead light
    fn set_main_light(&mut self, room: RoomId, color: Color) {}

    /// Show a digit on one of the room's clue fixtures
    fn set_clue_digit(&mut self, room: RoomId, index: usize, digit: u8) {}

    /// Turn one of the room's fruit-wheel clues to a texture offset in `[0,1)`
    fn set_clue_offset(&mut self, room: RoomId, index: usize, offset: f32) {}

    /// Move the door leaves to `extent` door-local units from closed.
    ///
    /// The host mirrors the extent onto both leaves (one slides positive,
    /// the other negative).
    fn slide_door_leaves(&mut self, room: RoomId, extent: f32) {}

    /// Update the panel's digit display
    fn set_digit_readout(&mut self, room: RoomId, readout: DigitReadout) {}

    /// Start a cue (looping cues keep playing until stopped)
    fn play_audio(&mut self, room: RoomId, cue: AudioCue) {}

    /// Stop a looping cue
    fn stop_audio(&mut self, room: RoomId, cue: AudioCue) {}
}

/// A sink that discards every notification. Useful for headless runs and
/// as the default in builders.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEffects;

impl RoomEffects for NullEffects {}
