//! Idle detection for drawing dispatch.
//!
//! A drawing is finished when the player stops touching the panel for a
//! threshold. The dispatcher tracks the last pointer activity and arms a
//! single dispatch per drawing; after the dispatch fires it disarms by
//! parking the activity time at `+∞`, so nothing fires again until new
//! input arrives.
//!
//! ## State Transitions
//!
//! ```text
//! Disarmed -> Armed     (any pointer activity)
//! Armed    -> Armed     (more activity - the idle window restarts)
//! Armed    -> Disarmed  (threshold crossed - exactly one dispatch)
//! ```

/// Tracks pointer activity on one panel and decides when the drawing
/// should be sent for classification.
#[derive(Clone, Copy, Debug)]
pub struct IdleDispatcher {
    /// Simulated time of the most recent pointer activity; `+∞` while
    /// disarmed
    last_activity: f64,
    /// Seconds of silence that finish a drawing
    threshold: f64,
}

impl IdleDispatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            last_activity: f64::INFINITY,
            threshold,
        }
    }

    /// Record pointer activity, (re)arming the dispatcher
    pub fn mark_activity(&mut self, now: f64) {
        self.last_activity = now;
    }

    /// True when the idle threshold has been crossed and a dispatch is owed
    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_activity > self.threshold
    }

    /// Park the dispatcher after a dispatch; only new activity re-arms it
    pub fn disarm(&mut self) {
        self.last_activity = f64::INFINITY;
    }

    /// True if pointer activity has been seen since the last dispatch
    pub fn is_armed(&self) -> bool {
        self.last_activity.is_finite()
    }
}
