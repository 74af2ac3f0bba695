use egui::pos2;

use photodim::{
    Calibration, CanvasInteraction, GestureOutcome, LineLook, MeasurementId, Measurements, Tool,
};

/// Drive a full Line-tool gesture and return the outcome.
fn draw_line(
    interaction: &mut CanvasInteraction,
    measurements: &mut Measurements,
    cal: &mut Calibration,
    tool: Tool,
    start: (f32, f32),
    end: (f32, f32),
) -> GestureOutcome {
    interaction.pointer_down(pos2(start.0, start.1), tool, measurements);
    interaction.pointer_moved(pos2(end.0, end.1), measurements, cal);
    interaction.pointer_up(tool, LineLook::default(), measurements, cal)
}

fn added_id(outcome: GestureOutcome) -> MeasurementId {
    match outcome {
        GestureOutcome::LineAdded(id) => id,
        other => panic!("expected LineAdded, got {:?}", other),
    }
}

#[test]
fn short_drags_are_discarded_as_clicks() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    let outcome = draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (10.0, 10.0),
        (13.0, 10.0),
    );
    assert_eq!(outcome, GestureOutcome::None);
    assert!(measurements.is_empty());
    assert!(interaction.is_idle());
}

#[test]
fn select_tool_ignores_pointer_down() {
    let mut interaction = CanvasInteraction::default();
    let measurements = Measurements::default();
    interaction.pointer_down(pos2(10.0, 10.0), Tool::Select, &measurements);
    assert!(interaction.is_idle());
    assert!(interaction.draft().is_none());
}

#[test]
fn line_gesture_commits_with_calibrated_length() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    // Default calibration 100 px = 10 cm: a 50 px line is 5 cm.
    let outcome = draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (0.0, 0.0),
        (50.0, 0.0),
    );
    let id = added_id(outcome);
    let m = measurements.get(id).unwrap();
    assert_eq!(m.length_cm, 5.0);
    assert_eq!(m.label, "Measurement 1");
    assert!(interaction.is_idle());
}

#[test]
fn drafting_tracks_the_pointer() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let cal = Calibration::default();

    interaction.pointer_down(pos2(5.0, 5.0), Tool::Line, &measurements);
    let draft = interaction.draft().unwrap();
    assert_eq!(draft.start, draft.end);

    interaction.pointer_moved(pos2(40.0, 30.0), &mut measurements, &cal);
    let draft = interaction.draft().unwrap();
    assert_eq!(draft.start, pos2(5.0, 5.0));
    assert_eq!(draft.end, pos2(40.0, 30.0));
}

#[test]
fn calibrate_gesture_replaces_pixel_side_only() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    let outcome = draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Calibrate,
        (0.0, 0.0),
        (200.0, 0.0),
    );
    assert_eq!(outcome, GestureOutcome::Calibrated);
    assert!(measurements.is_empty());
    assert_eq!(cal.reference_pixels(), 200.0);
    assert_eq!(cal.reference_cm(), 10.0);

    // Declare the reference as 20 cm: a 100 px line now measures 10 cm.
    cal.set_reference_cm(20.0);
    let outcome = draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (0.0, 0.0),
        (100.0, 0.0),
    );
    let id = added_id(outcome);
    assert_eq!(measurements.get(id).unwrap().length_cm, 10.0);
}

#[test]
fn endpoint_drag_moves_one_point_and_recomputes_length() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    let id = added_id(draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (0.0, 0.0),
        (30.0, 40.0),
    ));

    // Grab the end handle exactly and drag it out.
    interaction.pointer_down(pos2(30.0, 40.0), Tool::Move, &measurements);
    assert!(interaction.drag().is_some());
    interaction.pointer_moved(pos2(60.0, 80.0), &mut measurements, &cal);
    let outcome = interaction.pointer_up(Tool::Move, LineLook::default(), &mut measurements, &mut cal);
    assert_eq!(outcome, GestureOutcome::None);

    let m = measurements.get(id).unwrap();
    assert_eq!(m.start, pos2(0.0, 0.0));
    assert_eq!(m.end, pos2(60.0, 80.0));
    assert_eq!(m.length_cm, 10.0);
}

#[test]
fn center_drag_translates_rigidly() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    let id = added_id(draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (0.0, 0.0),
        (30.0, 40.0),
    ));

    // Grab near the midpoint (15, 20), 5 px off-center: the offset must be
    // preserved so the segment does not snap onto the pointer.
    interaction.pointer_down(pos2(10.0, 20.0), Tool::Move, &measurements);
    interaction.pointer_moved(pos2(110.0, 120.0), &mut measurements, &cal);
    interaction.pointer_up(Tool::Move, LineLook::default(), &mut measurements, &mut cal);

    let m = measurements.get(id).unwrap();
    assert_eq!(m.start, pos2(100.0, 100.0));
    assert_eq!(m.end, pos2(130.0, 140.0));
    // Length and orientation are exactly preserved.
    assert_eq!(m.pixel_length(), 50.0);
    assert_eq!(m.length_cm, 5.0);
}

#[test]
fn tiny_move_drags_still_commit() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    let id = added_id(draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (0.0, 0.0),
        (50.0, 0.0),
    ));

    // A 1 px endpoint nudge is below the draft threshold but drags have none.
    interaction.pointer_down(pos2(50.0, 0.0), Tool::Move, &measurements);
    interaction.pointer_moved(pos2(51.0, 0.0), &mut measurements, &cal);
    interaction.pointer_up(Tool::Move, LineLook::default(), &mut measurements, &mut cal);

    let m = measurements.get(id).unwrap();
    assert_eq!(m.end, pos2(51.0, 0.0));
    assert_eq!(m.length_cm, 5.1);
}

#[test]
fn hit_testing_prefers_earlier_lines_and_endpoints() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    // Two lines sharing the region around (50, 0).
    let first = added_id(draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (0.0, 0.0),
        (50.0, 0.0),
    ));
    added_id(draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (50.0, 5.0),
        (120.0, 5.0),
    ));

    // Both the first line's end handle and the second line's start handle are
    // in range; collection order wins.
    interaction.pointer_down(pos2(52.0, 2.0), Tool::Move, &measurements);
    let session = interaction.drag().unwrap();
    assert_eq!(session.target, first);
    interaction.pointer_up(Tool::Move, LineLook::default(), &mut measurements, &mut cal);
}

#[test]
fn deleting_the_target_mid_drag_drops_the_session() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    let id = added_id(draw_line(
        &mut interaction,
        &mut measurements,
        &mut cal,
        Tool::Line,
        (0.0, 0.0),
        (50.0, 0.0),
    ));

    interaction.pointer_down(pos2(0.0, 0.0), Tool::Move, &measurements);
    measurements.remove(id);
    interaction.pointer_moved(pos2(10.0, 10.0), &mut measurements, &cal);
    assert!(interaction.is_idle());
}

#[test]
fn default_labels_count_up_across_gestures() {
    let mut interaction = CanvasInteraction::default();
    let mut measurements = Measurements::default();
    let mut cal = Calibration::default();

    for i in 0..3 {
        let y = i as f32 * 20.0;
        draw_line(
            &mut interaction,
            &mut measurements,
            &mut cal,
            Tool::Line,
            (0.0, y),
            (60.0, y),
        );
    }
    let labels: Vec<_> = measurements.iter().map(|m| m.label.as_str().to_owned()).collect();
    assert_eq!(labels, ["Measurement 1", "Measurement 2", "Measurement 3"]);
}
