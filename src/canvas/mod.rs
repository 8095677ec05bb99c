//! Drawable raster canvas.
//!
//! The panel's drawing surface is a small square grid of single-channel
//! pixels. Strokes arrive as pointer samples; segments between successive
//! samples are rasterized by uniform parametric stepping with a fixed
//! brush.
//!
//! ## Coordinate system
//!
//! Canvas space is measured in pixels with the origin at the top-left,
//! x growing rightward and y growing downward. Bitmaps are row-major in
//! the same orientation, which is also what the classifier consumes.

mod bitmap;
mod raster;

pub use bitmap::*;
pub use raster::*;
