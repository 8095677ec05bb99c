//! Game-wide constants.
//!
//! Centralizes magic numbers for the canvas, the brush, and the room
//! timing defaults so tuning lives in one place.

// ============================================================================
// Canvas Geometry
// ============================================================================

/// Width and height of the drawable canvas in pixels (square)
pub const CANVAS_WIDTH: usize = 28;

/// Total pixel count of one canvas bitmap
pub const CANVAS_AREA: usize = CANVAS_WIDTH * CANVAS_WIDTH;

/// Pixel intensity written by the brush (single-channel, 0 = background)
pub const INK: u8 = 255;

/// Brush thickness in pixels for panel strokes
pub const BRUSH_THICKNESS: u8 = 2;

// ============================================================================
// Panel Timing
// ============================================================================

/// Seconds of pointer inactivity before a drawing is sent for classification
pub const IDLE_THRESHOLD_SECS: f64 = 0.5;

// ============================================================================
// Code Entry
// ============================================================================

/// Default number of symbols in a room's unlock code
pub const DEFAULT_CODE_LENGTH: usize = 3;

/// Symbols available to drawn-digit rooms
pub const DIGIT_SYMBOLS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Symbols available to fruit-dial rooms (1-based wheel positions)
pub const FRUIT_SYMBOLS: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// Number of positions on the fruit wheel (clue offsets are k/6)
pub const FRUIT_WHEEL_POSITIONS: u8 = 6;

// ============================================================================
// Door Animation
// ============================================================================

/// Seconds a door spends sliding between closed and open
pub const DOOR_DURATION_SECS: f64 = 0.5;

/// Distance each door leaf travels when fully open (door-local units)
pub const DOOR_SLIDE_WIDTH: f32 = 4.0;

// ============================================================================
// Alarm
// ============================================================================

/// Seconds the alarm flashes and sounds before stopping itself
pub const ALARM_DURATION_SECS: f64 = 2.0;

/// Delay between a wrong guess and the alarm going off
pub const ALARM_DELAY_SECS: f64 = 0.5;

/// Angular rate of the alarm flash; cos(t * FLASH_RATE)^2 pulses four times a second
pub const ALARM_FLASH_RATE: f32 = std::f32::consts::PI * 4.0;

// ============================================================================
// Completion
// ============================================================================

/// Delay between solving a room and its congratulation message
pub const MESSAGE_DELAY_SECS: f64 = 1.0;
