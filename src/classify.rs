//! Classifier boundary.
//!
//! The game never interprets pixels itself. When a drawing goes idle the
//! panel snapshots its canvas and hands the bitmap to a [`Classifier`],
//! which returns a single [`Classification`] verdict. Real recognizers
//! (an ONNX digit model, a remote service) and test stand-ins all plug in
//! behind the same trait.

use serde::{Deserialize, Serialize};

use crate::canvas::Bitmap;

/// The verdict for one bitmap: the recognized symbol and the winning
/// class probability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Recognized symbol (a digit for drawn-digit rooms)
    pub digit: u8,
    /// Probability of the winning class, in `[0,1]`
    pub confidence: f32,
}

impl Classification {
    pub fn new(digit: u8, confidence: f32) -> Self {
        Self { digit, confidence }
    }

    /// Whether the confidence is a usable probability.
    ///
    /// The orchestrator rejects verdicts failing this before they reach a
    /// verifier; adapters are trusted for format, not for values.
    pub fn confidence_ok(&self) -> bool {
        self.confidence.is_finite() && (0.0..=1.0).contains(&self.confidence)
    }

    /// Confidence as a whole percentage, for logs and readouts
    pub fn percent(&self) -> u32 {
        (self.confidence * 100.0) as u32
    }
}

/// A digit recognizer the game can consult.
///
/// `classify` always produces *a* verdict; there is no error path at this
/// boundary. Adapters own their internal resources (weights, buffers,
/// device handles) and release them on drop. The tick loop issues at most
/// one classification at a time, so adapters need no internal queueing.
pub trait Classifier {
    fn classify(&mut self, bitmap: &Bitmap) -> Classification;
}
