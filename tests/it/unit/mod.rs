//! Unit tests for Glyphgate.

mod canvas_tests;
mod panel_tests;
mod snapshot_tests;
