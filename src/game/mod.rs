//! Game orchestrator.
//!
//! [`Game`] owns the simulated clock and everything that hangs off it:
//! the rooms, the classifier adapter, the effects sink, and the deferred
//! task queue. The embedding shell feeds it pointer input between ticks
//! and calls [`tick`](Game::tick) at its own cadence; all game time is
//! simulated, so tests drive the clock explicitly and nothing in here
//! reads a wall clock (the perf monitor aside).
//!
//! ## Tick order
//!
//! ```text
//! 1. Panels poll for idle dispatches (input arrived between ticks)
//! 2. Fresh verdicts are delivered to their rooms
//! 3. Deferred tasks that have come due fire (alarm, message)
//! 4. Door and alarm animations advance
//! ```

mod scheduler;

pub use scheduler::*;

use crate::classify::{Classification, Classifier};
use crate::config::{ConfigResult, GameConfig};
use crate::constants::{ALARM_DELAY_SECS, MESSAGE_DELAY_SECS};
use crate::effects::RoomEffects;
use crate::perf::PerfMonitor;
use crate::{profile_function, profile_scope};
use crate::room::Room;
use crate::types::{AudioCue, CanvasPoint, DigitReadout, InputMode, RoomId};

/// The puzzle game core.
pub struct Game {
    /// Simulated seconds since construction
    clock: f64,
    mode: InputMode,
    rooms: Vec<Room>,
    scheduler: Scheduler,
    classifier: Box<dyn Classifier>,
    effects: Box<dyn RoomEffects>,
    perf: PerfMonitor,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("clock", &self.clock)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Build a game from a configuration plus its two collaborators.
    ///
    /// The configuration is (re)validated here, every room's first code is
    /// generated, and the initial clue fixtures are published through the
    /// sink before this returns.
    pub fn new(
        config: &GameConfig,
        classifier: Box<dyn Classifier>,
        effects: Box<dyn RoomEffects>,
    ) -> ConfigResult<Self> {
        config.validate()?;

        let rooms: Vec<Room> = config
            .rooms
            .iter()
            .enumerate()
            .map(|(index, spec)| Room::from_spec(RoomId(index), spec))
            .collect();

        let mut game = Self {
            clock: 0.0,
            mode: InputMode::default(),
            rooms,
            scheduler: Scheduler::new(),
            classifier,
            effects,
            perf: PerfMonitor::new(),
        };

        let Self { rooms, effects, .. } = &mut game;
        for room in rooms.iter() {
            tracing::debug!(id = %room.id(), name = room.name(), "room initialized");
            room.publish_clues(effects.as_mut());
        }
        tracing::info!(rooms = game.rooms.len(), "game ready");

        Ok(game)
    }

    // ========================================================================
    // Input routing
    // ========================================================================

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    /// Switch between walking and panel control.
    ///
    /// The shell decides when the player approaches or leaves a panel; in
    /// walk mode pointer input never reaches the panels.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        if mode != self.mode {
            tracing::debug!(mode = mode.label(), "input mode changed");
            self.mode = mode;
        }
    }

    /// Begin a stroke on a room's panel. Ignored outside control mode and
    /// for rooms without a panel.
    pub fn pointer_down(&mut self, room: RoomId, p: CanvasPoint) {
        if !self.mode.is_control() {
            return;
        }
        let now = self.clock;
        if let Some(room) = self.rooms.get_mut(room.0) {
            room.pointer_down(now, p);
        }
    }

    /// Continue a stroke on a room's panel.
    pub fn pointer_drag(&mut self, room: RoomId, p: CanvasPoint) {
        if !self.mode.is_control() {
            return;
        }
        let now = self.clock;
        if let Some(room) = self.rooms.get_mut(room.0) {
            room.pointer_drag(now, p);
        }
    }

    /// Maintenance override: swing every closed door open. Doors already
    /// open or mid-slide are left alone.
    pub fn open_all_doors(&mut self) {
        let now = self.clock;
        let Self { rooms, effects, .. } = self;
        for room in rooms.iter_mut() {
            if room.door_state().is_some_and(|state| state.is_closed()) {
                room.toggle_door(now, effects.as_mut());
            }
        }
        tracing::info!("all closed doors opened");
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        profile_scope!("tick");
        self.perf.begin_tick();

        self.clock += dt;
        let now = self.clock;

        // 1. Poll panels for drawings that have gone idle.
        let mut verdicts: Vec<(RoomId, Classification)> = Vec::new();
        {
            let Self { rooms, classifier, .. } = self;
            for room in rooms.iter_mut() {
                if let Some(verdict) = room.poll_panel(now, classifier.as_mut()) {
                    verdicts.push((room.id(), verdict));
                }
            }
        }

        // 2. Deliver fresh verdicts.
        for (room, verdict) in verdicts {
            self.deliver_classification(room, verdict);
        }

        // 3. Fire deferred tasks that have come due.
        for action in self.scheduler.drain_due(now) {
            self.fire(action);
        }

        // 4. Advance door and alarm animations.
        let Self { rooms, effects, .. } = self;
        for room in rooms.iter_mut() {
            room.update(now, effects.as_mut());
        }

        self.perf.end_tick();
    }

    /// Hand one classifier verdict to its room.
    fn deliver_classification(&mut self, id: RoomId, verdict: Classification) {
        profile_function!();
        let now = self.clock;
        let Self {
            rooms,
            scheduler,
            effects,
            ..
        } = self;
        let Some(room) = rooms.get_mut(id.0) else { return };

        // The readout always echoes what the recognizer said.
        effects.set_digit_readout(
            id,
            DigitReadout::Predicted {
                digit: verdict.digit,
                confidence: verdict.confidence,
            },
        );

        let Some(alphabet) = room.alphabet() else {
            tracing::trace!(%id, "verdict dropped: room has no verifier");
            return;
        };
        if !verdict.confidence_ok() || !alphabet.contains(verdict.digit) {
            tracing::warn!(
                %id,
                digit = verdict.digit,
                confidence = verdict.confidence,
                alphabet = alphabet.label(),
                "verdict rejected"
            );
            return;
        }

        effects.play_audio(id, AudioCue::Digit(verdict.digit));
        tracing::info!(
            %id,
            digit = verdict.digit,
            percent = verdict.percent(),
            "digit recognized"
        );

        let Some(outcome) = room.apply_guess(verdict.digit, effects.as_mut()) else {
            return;
        };

        if !outcome.correct {
            scheduler.schedule_replacing(
                now + ALARM_DELAY_SECS,
                DeferredAction::SoundAlarm { room: id },
            );
        }
        if outcome.completed {
            tracing::info!(%id, "code complete");
            // The congratulation only plays when completing actually
            // opens the door.
            if room.door_state().is_some_and(|state| state.is_closed()) {
                scheduler.schedule_replacing(
                    now + MESSAGE_DELAY_SECS,
                    DeferredAction::PlayMessage { room: id },
                );
            }
            room.toggle_door(now, effects.as_mut());
        }
    }

    /// Run one deferred task.
    fn fire(&mut self, action: DeferredAction) {
        let now = self.clock;
        tracing::trace!(kind = action.label(), room = %action.room(), "deferred task fired");

        let Self { rooms, effects, .. } = self;
        let Some(room) = rooms.get_mut(action.room().0) else { return };

        match action {
            DeferredAction::SoundAlarm { .. } => {
                room.sound_alarm(now, effects.as_mut());
                room.reset_code(effects.as_mut());
            }
            DeferredAction::PlayMessage { .. } => {
                if room.message().is_some() {
                    effects.play_audio(room.id(), AudioCue::Message);
                }
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current simulated time in seconds
    pub fn now(&self) -> f64 {
        self.clock
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Deferred tasks not yet fired
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Tick timing statistics
    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }
}
