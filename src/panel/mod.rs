//! Drawing panel: stroke capture plus idle-triggered classification.
//!
//! A panel couples a [`SketchCanvas`] with an [`IdleDispatcher`]. Pointer
//! samples arrive through `pointer_down` / `pointer_drag`; when the player
//! pauses past the idle threshold, `poll` snapshots the canvas, asks the
//! classifier for a verdict, clears the canvas for the next attempt, and
//! hands the verdict back to the orchestrator. Exactly one verdict per
//! drawing.

mod idle;

pub use idle::*;

use crate::canvas::SketchCanvas;
use crate::classify::{Classification, Classifier};
use crate::types::CanvasPoint;

/// One room's drawing surface.
pub struct Panel {
    canvas: SketchCanvas,
    idle: IdleDispatcher,
    /// Last pointer sample; strokes rasterize from here to the next sample
    anchor: CanvasPoint,
}

impl Panel {
    pub fn new(idle_threshold: f64) -> Self {
        Self {
            canvas: SketchCanvas::new(),
            idle: IdleDispatcher::new(idle_threshold),
            anchor: CanvasPoint::new(0.0, 0.0),
        }
    }

    /// Begin a stroke at `p`.
    ///
    /// Only anchors the stroke and marks activity; a stationary tap draws
    /// nothing.
    pub fn pointer_down(&mut self, now: f64, p: CanvasPoint) {
        self.anchor = p;
        self.idle.mark_activity(now);
    }

    /// Continue the stroke to `p`, inking the segment from the anchor.
    pub fn pointer_drag(&mut self, now: f64, p: CanvasPoint) {
        self.canvas.draw_line(self.anchor, p);
        self.anchor = p;
        self.idle.mark_activity(now);
    }

    /// Check for an elapsed idle period and dispatch the drawing if so.
    ///
    /// On dispatch the canvas is snapshotted, classified, and cleared, and
    /// the dispatcher disarms until the next pointer activity.
    pub fn poll(&mut self, now: f64, classifier: &mut dyn Classifier) -> Option<Classification> {
        if !self.idle.is_due(now) {
            return None;
        }

        let bitmap = self.canvas.snapshot();
        let verdict = classifier.classify(&bitmap);
        tracing::debug!(
            ink = bitmap.ink_count(),
            digit = verdict.digit,
            confidence = verdict.confidence,
            "drawing dispatched"
        );

        self.canvas.clear();
        self.idle.disarm();
        Some(verdict)
    }

    pub fn canvas(&self) -> &SketchCanvas {
        &self.canvas
    }

    /// True if pointer activity is pending classification
    pub fn is_armed(&self) -> bool {
        self.idle.is_armed()
    }
}
