use photodim::Calibration;

#[test]
fn default_reference_is_100px_10cm() {
    let cal = Calibration::default();
    assert_eq!(cal.reference_pixels(), 100.0);
    assert_eq!(cal.reference_cm(), 10.0);
}

#[test]
fn to_cm_is_linear_with_zero_at_zero() {
    let mut cal = Calibration::default();
    cal.set_reference(200.0, 20.0);
    assert_eq!(cal.to_cm(0.0), 0.0);
    assert_eq!(cal.to_cm(100.0), 10.0);
    // Linear in the pixel distance.
    let a = cal.to_cm(35.0);
    let b = cal.to_cm(70.0);
    assert!((b - 2.0 * a).abs() < 1e-5);
}

#[test]
fn set_reference_cm_keeps_pixel_side() {
    let mut cal = Calibration::default();
    cal.set_reference_cm(25.0);
    assert_eq!(cal.reference_pixels(), 100.0);
    assert_eq!(cal.reference_cm(), 25.0);
}

#[test]
fn set_reference_pixels_keeps_cm_side() {
    let mut cal = Calibration::default();
    cal.set_reference_pixels(250.0);
    assert_eq!(cal.reference_pixels(), 250.0);
    assert_eq!(cal.reference_cm(), 10.0);
}

#[test]
fn degenerate_writes_are_rejected() {
    let mut cal = Calibration::default();
    cal.set_reference(0.0, 5.0);
    cal.set_reference(-3.0, 5.0);
    cal.set_reference(f32::NAN, 5.0);
    cal.set_reference_cm(0.0);
    cal.set_reference_cm(f32::INFINITY);
    cal.set_reference_pixels(-1.0);
    assert_eq!(cal, Calibration::default());
}
