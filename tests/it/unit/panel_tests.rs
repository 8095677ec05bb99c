//! Unit tests for panel idle dispatch.

use glyphgate::panel::Panel;
use glyphgate::types::CanvasPoint;

use crate::helpers::ScriptedClassifier;

#[test]
fn test_tap_alone_dispatches_a_blank_drawing() {
    let mut panel = Panel::new(0.5);
    let (mut classifier, script) = ScriptedClassifier::new();
    script.push_digit(0);

    panel.pointer_down(0.0, CanvasPoint::new(10.0, 10.0));
    let verdict = panel.poll(1.0, &mut classifier);

    // A tap with no drag never inks the canvas, but it arms the
    // dispatcher all the same: the classifier sees an empty bitmap.
    assert!(verdict.is_some());
    assert_eq!(script.ink_counts(), vec![0]);
}

#[test]
fn test_dispatch_consumes_the_drawing() {
    let mut panel = Panel::new(0.5);
    let (mut classifier, script) = ScriptedClassifier::new();
    script.push_digit(5);
    script.push_digit(6);

    panel.pointer_down(0.0, CanvasPoint::new(5.0, 5.0));
    panel.pointer_drag(0.1, CanvasPoint::new(20.0, 20.0));
    let first = panel.poll(0.7, &mut classifier).unwrap();
    assert_eq!(first.digit, 5);
    assert!(script.ink_counts()[0] > 0);

    // The canvas was cleared on dispatch, so the next drawing starts
    // from a blank surface.
    panel.pointer_down(1.0, CanvasPoint::new(10.0, 24.0));
    panel.pointer_drag(1.1, CanvasPoint::new(12.0, 24.0));
    let second = panel.poll(1.8, &mut classifier).unwrap();
    assert_eq!(second.digit, 6);

    let inks = script.ink_counts();
    assert!(inks[1] < inks[0], "second drawing must not contain the first");
}

#[test]
fn test_continued_drawing_postpones_dispatch() {
    let mut panel = Panel::new(0.5);
    let (mut classifier, script) = ScriptedClassifier::new();
    script.push_digit(2);

    panel.pointer_down(0.0, CanvasPoint::new(5.0, 5.0));
    panel.pointer_drag(0.4, CanvasPoint::new(10.0, 5.0));
    assert!(panel.poll(0.6, &mut classifier).is_none());

    panel.pointer_drag(0.8, CanvasPoint::new(15.0, 5.0));
    assert!(panel.poll(1.2, &mut classifier).is_none());

    assert!(panel.poll(1.4, &mut classifier).is_some());
    assert_eq!(script.calls(), 1);
}

#[test]
fn test_custom_threshold_is_respected() {
    let mut panel = Panel::new(2.0);
    let (mut classifier, script) = ScriptedClassifier::new();
    script.push_digit(4);

    panel.pointer_down(0.0, CanvasPoint::new(5.0, 5.0));
    panel.pointer_drag(0.1, CanvasPoint::new(20.0, 20.0));

    assert!(panel.poll(1.5, &mut classifier).is_none());
    assert!(panel.poll(2.2, &mut classifier).is_some());
}
