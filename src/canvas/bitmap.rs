//! Immutable canvas snapshots.

use crate::constants::{CANVAS_AREA, CANVAS_WIDTH};

/// A frozen copy of the canvas contents, handed to the classifier.
///
/// Row-major, origin top-left, one byte per pixel: 0 is background,
/// 255 is full ink. Taking a snapshot never disturbs the live canvas.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    pixels: [u8; CANVAS_AREA],
}

impl Bitmap {
    pub(crate) fn from_pixels(pixels: [u8; CANVAS_AREA]) -> Self {
        Self { pixels }
    }

    /// Side length of the square bitmap in pixels
    pub fn width(&self) -> usize {
        CANVAS_WIDTH
    }

    /// The raw row-major pixel bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensity at `(x, y)`; out-of-range coordinates read as background
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        if x >= CANVAS_WIDTH || y >= CANVAS_WIDTH {
            return 0;
        }
        self.pixels[y * CANVAS_WIDTH + x]
    }

    /// Number of pixels carrying any ink
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }

    /// Render as ASCII art, one row per line: `#` for ink, `.` for
    /// background. Used by diagnostics and snapshot tests.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(CANVAS_AREA + CANVAS_WIDTH);
        for y in 0..CANVAS_WIDTH {
            for x in 0..CANVAS_WIDTH {
                out.push(if self.pixel(x, y) != 0 { '#' } else { '.' });
            }
            if y + 1 < CANVAS_WIDTH {
                out.push('\n');
            }
        }
        out
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bitmap({} ink px)\n{}", self.ink_count(), self.to_ascii())
    }
}
