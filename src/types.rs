//! Core types shared across the puzzle game.
//!
//! This module defines the small value types used throughout the crate:
//! room identity, input modes, canvas coordinates, colors, and the
//! notification payloads that flow through the effects sink.

use serde::{Deserialize, Serialize};

// ============================================================================
// Room Identity
// ============================================================================

/// Index of a room within the game, assigned in config order.
///
/// Stable for the lifetime of a `Game`; used to address rooms in input
/// routing, deferred tasks, and effects-sink notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room {}", self.0)
    }
}

// ============================================================================
// Input Modes
// ============================================================================

/// What the player's pointer currently controls.
///
/// The embedding shell flips this when the player approaches or leaves a
/// panel. Pointer input only reaches panels in `Control`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Pointer steers the player; panels ignore it
    #[default]
    Walk,
    /// Pointer draws on the focused panel
    Control,
}

impl InputMode {
    /// Check if panel drawing is active
    pub fn is_control(&self) -> bool {
        matches!(self, InputMode::Control)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Walk => "walk",
            InputMode::Control => "control",
        }
    }
}

// ============================================================================
// Canvas Coordinates
// ============================================================================

/// A continuous point in canvas space, in units of pixels.
///
/// `(0, 0)` is the top-left corner of the canvas; x grows rightward and
/// y grows downward, matching the bitmap's row-major layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a normalized UV coordinate in `[0,1]²` to canvas pixels.
    ///
    /// This is how pointer hits on the panel's surface arrive from the
    /// embedding shell.
    pub fn from_uv(u: f32, v: f32, canvas_width: usize) -> Self {
        Self {
            x: u * canvas_width as f32,
            y: v * canvas_width as f32,
        }
    }

    /// Straight-line distance to another point
    pub fn distance_to(&self, other: CanvasPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(&self, other: CanvasPoint, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

/// An RGB color with channels in `[0,1]`, as pushed to light fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0 };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

// ============================================================================
// Effects Payloads
// ============================================================================

/// What the panel's digit display shows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DigitReadout {
    /// Placeholder shown before any classification (and after an alarm)
    Unknown,
    /// The latest classifier verdict, with its winning probability
    Predicted { digit: u8, confidence: f32 },
}

impl DigitReadout {
    pub fn is_unknown(&self) -> bool {
        matches!(self, DigitReadout::Unknown)
    }
}

/// Named audio notifications emitted by the core.
///
/// The sink resolves each cue to an actual clip; the core never touches
/// audio data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Spoken name of a recognized digit
    Digit(u8),
    /// Door leaves starting to slide
    DoorSlide,
    /// Looping alarm klaxon (played until stopped)
    Alarm,
    /// Per-room congratulation clip after solving
    Message,
}
