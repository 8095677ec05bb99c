//! Glyphgate: a digit-drawing puzzle game core.
//!
//! Players draw digits on small raster panels to enter per-room unlock
//! codes. Correct sequences slide doors open; wrong guesses set off
//! alarms and roll fresh codes. The crate is the headless core of that
//! game: a tick-driven simulation with no rendering, audio, or ML of its
//! own. Recognizers plug in behind [`classify::Classifier`] and
//! presentation hangs off [`effects::RoomEffects`].
//!
//! ## Architecture
//!
//! - [`canvas`]: the 28×28 drawable raster surface and its snapshots
//! - [`classify`]: the classifier boundary (trait + verdict type)
//! - [`panel`]: stroke capture and idle-triggered dispatch
//! - [`room`]: per-room state machines (code verifier, door, alarm)
//! - [`game`]: the orchestrator, tick loop, and deferred task scheduler
//! - [`effects`]: the one-way notification seam toward presentation
//! - [`config`]: JSON game description and validation
//! - [`constants`]: canvas geometry and timing defaults
//! - [`perf`]: tick-loop timing instrumentation
//!
//! ## Time
//!
//! All game time is simulated: the host calls [`game::Game::tick`] with
//! a delta in seconds and the core never reads a wall clock, so tests
//! and replays drive the same code the shell does.

pub mod canvas;
pub mod classify;
pub mod config;
pub mod constants;
pub mod effects;
pub mod game;
pub mod panel;
pub mod perf;
pub mod room;
pub mod types;

pub use canvas::*;
pub use classify::*;
pub use config::*;
pub use effects::*;
pub use game::*;
pub use panel::*;
pub use room::*;
pub use types::*;
