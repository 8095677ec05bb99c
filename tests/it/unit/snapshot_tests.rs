//! Snapshot tests for serialized formats and diagnostic rendering.
//!
//! Inline snapshots keep the expected output next to the assertion;
//! `cargo insta review` refreshes them after an intentional change.

use glyphgate::canvas::SketchCanvas;
use glyphgate::classify::Classification;
use glyphgate::config::{AlarmSpec, DoorSpec, PanelSpec, RoomSpec};
use glyphgate::room::{AlarmState, DoorState};
use glyphgate::types::{CanvasPoint, DigitReadout};

use crate::helpers::digit_code;

#[test]
fn test_blot_ascii_render() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_point(CanvasPoint::new(14.0, 14.0), 2);

    insta::assert_snapshot!(canvas.snapshot().to_ascii(), @r"
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    .............##.............
    .............##.............
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ............................
    ");
}

#[test]
fn test_classification_json_format() {
    let verdict = Classification::new(7, 0.5);

    insta::assert_json_snapshot!(verdict, @r#"
    {
      "digit": 7,
      "confidence": 0.5
    }
    "#);
}

#[test]
fn test_room_spec_json_format() {
    let spec = RoomSpec {
        name: "vault".to_string(),
        code: Some(digit_code(9)),
        door: Some(DoorSpec::default()),
        alarm: Some(AlarmSpec::default()),
        panel: Some(PanelSpec::default()),
        ..RoomSpec::default()
    };

    insta::assert_json_snapshot!(spec, @r#"
    {
      "name": "vault",
      "code": {
        "alphabet": "digits",
        "length": 3,
        "seed": 9
      },
      "clue_count": null,
      "door": {
        "duration": 0.5,
        "slide_width": 4.0
      },
      "alarm": {
        "duration": 2.0,
        "light_color": {
          "r": 1.0,
          "g": 1.0,
          "b": 1.0
        }
      },
      "panel": {
        "idle_threshold": 0.5
      },
      "message": null
    }
    "#);
}

#[test]
fn test_state_names_serialize_lowercase() {
    insta::assert_json_snapshot!(DoorState::Opening, @r#""opening""#);
    insta::assert_json_snapshot!(AlarmState::Sounding, @r#""sounding""#);
}

#[test]
fn test_readout_json_format() {
    insta::assert_json_snapshot!(DigitReadout::Unknown, @r#""Unknown""#);

    insta::assert_json_snapshot!(
        DigitReadout::Predicted { digit: 3, confidence: 0.25 },
        @r#"
    {
      "Predicted": {
        "digit": 3,
        "confidence": 0.25
      }
    }
    "#
    );
}
