//! The drawable pixel grid and its brush.

use crate::constants::{BRUSH_THICKNESS, CANVAS_AREA, CANVAS_WIDTH, INK};
use crate::types::CanvasPoint;

use super::Bitmap;

/// The live drawing surface of one panel.
///
/// All drawing goes through [`draw_line`](Self::draw_line) and
/// [`draw_point`](Self::draw_point), which clamp coordinates into the
/// drawable region; no input can write outside the grid.
#[derive(Clone)]
pub struct SketchCanvas {
    pixels: [u8; CANVAS_AREA],
}

impl SketchCanvas {
    pub fn new() -> Self {
        Self {
            pixels: [0; CANVAS_AREA],
        }
    }

    /// Rasterize the segment from `from` to `to` with the stroke brush.
    ///
    /// Uniform parametric stepping: the step count scales with segment
    /// length (two steps per pixel of distance, plus one) so fast pointer
    /// sweeps stay gap-free. A zero-length segment still stamps one point.
    pub fn draw_line(&mut self, from: CanvasPoint, to: CanvasPoint) {
        let steps = (from.distance_to(to) * 2.0) as u32 + 1;
        for a in 0..=steps {
            let t = a as f32 / steps as f32;
            self.draw_point(from.lerp(to, t), BRUSH_THICKNESS);
        }
        tracing::trace!(steps, "stroke segment rasterized");
    }

    /// Stamp one brush point at `p`.
    ///
    /// Each coordinate is clamped into `[thickness, width - thickness]`
    /// first, so out-of-range input draws at the edge instead of escaping
    /// the grid. Thickness 1 sets a single pixel; the default thickness 2
    /// sets the 2×2 blot straddling the half-pixel grid around `p`.
    pub fn draw_point(&mut self, p: CanvasPoint, thickness: u8) {
        let lo = thickness as f32;
        let hi = (CANVAS_WIDTH - thickness as usize) as f32;
        let x = p.x.clamp(lo, hi);
        let y = p.y.clamp(lo, hi);

        match thickness {
            1 => self.set_pixel(x as usize, y as usize),
            _ => {
                let x0 = ((x - 0.5).floor() as i32).max(0) as usize;
                let x1 = ((x + 0.5).floor() as i32).min(CANVAS_WIDTH as i32 - 1) as usize;
                let y0 = ((y - 0.5).floor() as i32).max(0) as usize;
                let y1 = ((y + 0.5).floor() as i32).min(CANVAS_WIDTH as i32 - 1) as usize;
                self.set_pixel(x0, y0);
                self.set_pixel(x1, y0);
                self.set_pixel(x0, y1);
                self.set_pixel(x1, y1);
            }
        }
    }

    /// Reset every pixel to background
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Freeze the current contents for classification
    pub fn snapshot(&self) -> Bitmap {
        Bitmap::from_pixels(self.pixels)
    }

    /// Intensity at `(x, y)`; out-of-range coordinates read as background
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        if x >= CANVAS_WIDTH || y >= CANVAS_WIDTH {
            return 0;
        }
        self.pixels[y * CANVAS_WIDTH + x]
    }

    /// True when no pixel carries ink
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == 0)
    }

    fn set_pixel(&mut self, x: usize, y: usize) {
        self.pixels[y * CANVAS_WIDTH + x] = INK;
    }
}

impl Default for SketchCanvas {
    fn default() -> Self {
        Self::new()
    }
}
