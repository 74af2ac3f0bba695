use egui::pos2;

use photodim::{
    Calibration, LineLook, LineStyle, MeasurementLine, MeasurementUpdate, Measurements, UnitMode,
};

fn line(measurements: &Measurements, start: (f32, f32), end: (f32, f32)) -> MeasurementLine {
    let cal = Calibration::default();
    let start = pos2(start.0, start.1);
    let end = pos2(end.0, end.1);
    let length_cm = cal.to_cm(photodim::data::geometry::distance(start, end));
    MeasurementLine::new(
        start,
        end,
        length_cm,
        LineLook::default(),
        measurements.next_default_label(),
    )
}

#[test]
fn labels_are_sequential_at_creation_and_frozen_on_delete() {
    let mut measurements = Measurements::default();
    for _ in 0..3 {
        let l = line(&measurements, (0.0, 0.0), (50.0, 0.0));
        measurements.add(l);
    }
    let labels: Vec<_> = measurements.iter().map(|m| m.label.clone()).collect();
    assert_eq!(labels, ["Measurement 1", "Measurement 2", "Measurement 3"]);

    let second = measurements.iter().nth(1).unwrap().id;
    measurements.remove(second);
    let labels: Vec<_> = measurements.iter().map(|m| m.label.clone()).collect();
    // No renumbering: the survivors keep their original labels.
    assert_eq!(labels, ["Measurement 1", "Measurement 3"]);
}

#[test]
fn adding_lines_never_mutates_existing_entries() {
    let mut measurements = Measurements::default();
    let first = measurements.add(line(&measurements, (0.0, 0.0), (50.0, 0.0)));
    let before = measurements.get(first).unwrap().clone();
    measurements.add(line(&measurements, (10.0, 10.0), (90.0, 10.0)));
    assert_eq!(measurements.get(first).unwrap(), &before);
}

#[test]
fn calibration_changes_do_not_rescale_committed_lines() {
    let mut cal = Calibration::default();
    let mut measurements = Measurements::default();
    let id = measurements.add(line(&measurements, (0.0, 0.0), (50.0, 0.0)));
    assert_eq!(measurements.get(id).unwrap().length_cm, 5.0);

    cal.set_reference(200.0, 20.0);
    assert_eq!(measurements.get(id).unwrap().length_cm, 5.0);
}

#[test]
fn length_edit_decouples_until_next_geometry_write() {
    let cal = Calibration::default();
    let mut measurements = Measurements::default();
    let id = measurements.add(line(&measurements, (0.0, 0.0), (50.0, 0.0)));

    measurements.apply(id, MeasurementUpdate::LengthCm(7.0), &cal);
    let m = measurements.get(id).unwrap();
    assert_eq!(m.length_cm, 7.0);
    // Endpoints keep their original 50 px separation.
    assert_eq!(m.pixel_length(), 50.0);

    // A geometry write recomputes the length from pixels again.
    measurements.apply(
        id,
        MeasurementUpdate::Geometry {
            start: pos2(0.0, 0.0),
            end: pos2(80.0, 0.0),
        },
        &cal,
    );
    assert_eq!(measurements.get(id).unwrap().length_cm, 8.0);
}

#[test]
fn inch_edit_writes_through_the_conversion() {
    let cal = Calibration::default();
    let mut measurements = Measurements::default();
    let id = measurements.add(line(&measurements, (0.0, 0.0), (50.0, 0.0)));

    measurements.apply(id, MeasurementUpdate::LengthInches(1.0), &cal);
    let cm = measurements.get(id).unwrap().length_cm;
    assert!((cm - 2.54).abs() < 1e-2, "1 in should be ~2.54 cm, got {cm}");
}

#[test]
fn style_updates_leave_geometry_and_length_alone() {
    let cal = Calibration::default();
    let mut measurements = Measurements::default();
    let id = measurements.add(line(&measurements, (0.0, 0.0), (50.0, 0.0)));

    measurements.apply(id, MeasurementUpdate::Style(LineStyle::Dashed), &cal);
    measurements.apply(id, MeasurementUpdate::Thickness(4.0), &cal);
    measurements.apply(id, MeasurementUpdate::Label("width".to_string()), &cal);
    let m = measurements.get(id).unwrap();
    assert_eq!(m.look.style, LineStyle::Dashed);
    assert_eq!(m.look.thickness, 4.0);
    assert_eq!(m.label, "width");
    assert_eq!(m.length_cm, 5.0);
    assert_eq!(m.pixel_length(), 50.0);
}

#[test]
fn invalid_numeric_writes_keep_previous_values() {
    let cal = Calibration::default();
    let mut measurements = Measurements::default();
    let id = measurements.add(line(&measurements, (0.0, 0.0), (50.0, 0.0)));

    measurements.apply(id, MeasurementUpdate::LengthCm(f32::NAN), &cal);
    measurements.apply(id, MeasurementUpdate::LengthCm(-1.0), &cal);
    measurements.apply(id, MeasurementUpdate::Thickness(0.0), &cal);
    let m = measurements.get(id).unwrap();
    assert_eq!(m.length_cm, 5.0);
    assert_eq!(m.look.thickness, LineLook::default().thickness);
}

#[test]
fn updates_to_unknown_ids_are_noops() {
    let cal = Calibration::default();
    let mut measurements = Measurements::default();
    let id = measurements.add(line(&measurements, (0.0, 0.0), (50.0, 0.0)));
    measurements.remove(id);
    assert!(measurements.is_empty());
    // Neither of these may panic or resurrect the entry.
    measurements.apply(id, MeasurementUpdate::LengthCm(1.0), &cal);
    measurements.remove(id);
    assert!(measurements.is_empty());
}

#[test]
fn clear_empties_the_collection() {
    let mut measurements = Measurements::default();
    for _ in 0..4 {
        let l = line(&measurements, (0.0, 0.0), (25.0, 0.0));
        measurements.add(l);
    }
    measurements.clear();
    assert!(measurements.is_empty());
    assert_eq!(measurements.next_default_label(), "Measurement 1");
}

#[test]
fn unit_mode_cycles_and_formats() {
    assert_eq!(UnitMode::Both.cycled(), UnitMode::Cm);
    assert_eq!(UnitMode::Cm.cycled(), UnitMode::Inch);
    assert_eq!(UnitMode::Inch.cycled(), UnitMode::Both);

    assert_eq!(UnitMode::Cm.format_length(5.0), "5 cm");
    assert_eq!(UnitMode::Inch.format_length(7.0), "2.76 in");
    assert_eq!(UnitMode::Both.format_length(5.0), "5 cm / 1.97 in");
}
