//! Deferred one-shot scheduler.
//!
//! Wrong guesses and completions queue follow-up work (the alarm, the
//! congratulation message) a beat into the future. Tasks are one-shot and
//! keyed per room and per kind: scheduling a task that matches a pending
//! one replaces it, so same-kind work never queues up for a single room,
//! and pending work for one room is never disturbed by another.

use std::collections::BTreeMap;

use crate::types::RoomId;

/// Identifier of a scheduled task.
///
/// Ids increase monotonically and are never reused within one game, so
/// draining due tasks in id order is draining them in schedule order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

/// Work the orchestrator has deferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Set off the room's alarm and regenerate its code
    SoundAlarm { room: RoomId },
    /// Play the room's congratulation message
    PlayMessage { room: RoomId },
}

impl DeferredAction {
    pub fn room(&self) -> RoomId {
        match self {
            DeferredAction::SoundAlarm { room } | DeferredAction::PlayMessage { room } => *room,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeferredAction::SoundAlarm { .. } => "sound-alarm",
            DeferredAction::PlayMessage { .. } => "play-message",
        }
    }

    /// True when scheduling `self` should displace a pending `other`
    fn replaces(&self, other: &DeferredAction) -> bool {
        let same_kind = matches!(
            (self, other),
            (DeferredAction::SoundAlarm { .. }, DeferredAction::SoundAlarm { .. })
                | (DeferredAction::PlayMessage { .. }, DeferredAction::PlayMessage { .. })
        );
        same_kind && self.room() == other.room()
    }
}

/// A task waiting to fire.
#[derive(Clone, Copy, Debug)]
pub struct ScheduledTask {
    /// Simulated time at which the task is due
    pub fire_at: f64,
    pub action: DeferredAction,
}

/// One-shot task queue for the orchestrator.
pub struct Scheduler {
    next_id: u64,
    tasks: BTreeMap<u64, ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            tasks: BTreeMap::new(),
        }
    }

    /// Queue `action` to fire at simulated time `fire_at`
    pub fn schedule(&mut self, fire_at: f64, action: DeferredAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(id.0, ScheduledTask { fire_at, action });
        tracing::trace!(
            task = id.0,
            kind = action.label(),
            room = %action.room(),
            fire_at,
            "task scheduled"
        );
        id
    }

    /// Queue `action`, displacing any pending task of the same kind for
    /// the same room.
    pub fn schedule_replacing(&mut self, fire_at: f64, action: DeferredAction) -> TaskId {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !action.replaces(&task.action));
        if self.tasks.len() < before {
            tracing::debug!(
                kind = action.label(),
                room = %action.room(),
                "pending task replaced"
            );
        }
        self.schedule(fire_at, action)
    }

    /// Remove and return every task due by `now` (inclusive), in schedule
    /// order.
    pub fn drain_due(&mut self, now: f64) -> Vec<DeferredAction> {
        let due: Vec<u64> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.fire_at <= now)
            .map(|(&id, _)| id)
            .collect();
        due.iter()
            .filter_map(|id| self.tasks.remove(id))
            .map(|task| task.action)
            .collect()
    }

    /// Number of tasks not yet fired
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
