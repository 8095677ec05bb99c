//! Unit tests for the canvas module.

use glyphgate::canvas::SketchCanvas;
use glyphgate::constants::{CANVAS_WIDTH, INK};
use glyphgate::types::CanvasPoint;

#[test]
fn test_line_inks_both_endpoints() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_line(CanvasPoint::new(5.0, 5.0), CanvasPoint::new(22.0, 9.0));

    assert_eq!(canvas.pixel(5, 5), INK);
    assert_eq!(canvas.pixel(22, 9), INK);
}

#[test]
fn test_line_has_no_gaps() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_line(CanvasPoint::new(4.0, 14.0), CanvasPoint::new(24.0, 14.0));

    // The step count scales with distance, so every column between the
    // endpoints is inked on the stroke row.
    for x in 4..=24 {
        assert_eq!(canvas.pixel(x, 14), INK, "gap at column {x}");
    }
}

#[test]
fn test_wild_input_stays_in_bounds() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_line(CanvasPoint::new(-500.0, 13.0), CanvasPoint::new(500.0, 13.0));
    canvas.draw_line(CanvasPoint::new(3.0, -77.0), CanvasPoint::new(3.0, 900.0));

    // Coordinates clamp into the drawable region, so the outermost pixel
    // ring stays clean no matter the input.
    let snapshot = canvas.snapshot();
    assert!(snapshot.ink_count() > 0);
    for i in 0..CANVAS_WIDTH {
        assert_eq!(snapshot.pixel(i, 0), 0, "ink escaped to row 0");
        assert_eq!(snapshot.pixel(0, i), 0, "ink escaped to column 0");
        assert_eq!(snapshot.pixel(i, CANVAS_WIDTH - 1), 0, "ink escaped to last row");
        assert_eq!(snapshot.pixel(CANVAS_WIDTH - 1, i), 0, "ink escaped to last column");
    }
}

#[test]
fn test_snapshot_is_independent_of_later_drawing() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_point(CanvasPoint::new(10.0, 10.0), 2);
    let before = canvas.snapshot();

    canvas.draw_line(CanvasPoint::new(3.0, 20.0), CanvasPoint::new(24.0, 20.0));
    let after = canvas.snapshot();

    assert_eq!(before.ink_count(), 4);
    assert!(after.ink_count() > before.ink_count());
    assert_ne!(before, after);
}

#[test]
fn test_thin_brush_sets_a_single_pixel() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_point(CanvasPoint::new(9.4, 17.8), 1);

    assert_eq!(canvas.snapshot().ink_count(), 1);
    assert_eq!(canvas.pixel(9, 17), INK);
}

#[test]
fn test_repeated_strokes_accumulate() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_line(CanvasPoint::new(5.0, 5.0), CanvasPoint::new(5.0, 22.0));
    let one_stroke = canvas.snapshot().ink_count();

    // Re-inking the same segment changes nothing; a crossing stroke adds.
    canvas.draw_line(CanvasPoint::new(5.0, 5.0), CanvasPoint::new(5.0, 22.0));
    assert_eq!(canvas.snapshot().ink_count(), one_stroke);

    canvas.draw_line(CanvasPoint::new(3.0, 13.0), CanvasPoint::new(24.0, 13.0));
    assert!(canvas.snapshot().ink_count() > one_stroke);
}

#[test]
fn test_ascii_render_shape() {
    let canvas = SketchCanvas::new();
    let art = canvas.snapshot().to_ascii();

    let lines: Vec<&str> = art.lines().collect();
    assert_eq!(lines.len(), CANVAS_WIDTH);
    assert!(lines.iter().all(|line| line.len() == CANVAS_WIDTH));
    assert!(art.chars().all(|c| c == '.' || c == '\n'));
}

#[test]
fn test_out_of_range_reads_are_background() {
    let mut canvas = SketchCanvas::new();
    canvas.draw_point(CanvasPoint::new(26.0, 26.0), 2);

    assert_eq!(canvas.pixel(CANVAS_WIDTH, 0), 0);
    assert_eq!(canvas.snapshot().pixel(99, 99), 0);
}

#[test]
fn test_uv_coordinates_map_to_pixels() {
    let mut canvas = SketchCanvas::new();

    // Pointer hits arrive from the shell as panel-surface UV.
    let center = CanvasPoint::from_uv(0.5, 0.5, CANVAS_WIDTH);
    canvas.draw_point(center, 2);
    assert_eq!(canvas.pixel(14, 14), INK);

    let snapshot = canvas.snapshot();
    assert_eq!(snapshot.width(), CANVAS_WIDTH);
    assert_eq!(snapshot.pixels().len(), CANVAS_WIDTH * CANVAS_WIDTH);
    assert_eq!(snapshot.pixels().iter().filter(|&&p| p == INK).count(), 4);
}
