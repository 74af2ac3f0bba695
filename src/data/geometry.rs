//! Geometry and unit helpers shared by the data model and the canvas.

use egui::Pos2;

/// Centimeters per inch, expressed as the inch-per-cm factor the UI uses.
///
/// `inch_to_cm` divides by the same constant so the round trip
/// `inch_to_cm(cm_to_inch(x))` is the identity within float tolerance.
pub const INCH_PER_CM: f32 = 0.393701;

/// Euclidean distance between two canvas points, in pixels.
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

pub fn cm_to_inch(cm: f32) -> f32 {
    cm * INCH_PER_CM
}

pub fn inch_to_cm(inch: f32) -> f32 {
    inch / INCH_PER_CM
}

/// Format a length for display: two decimals, with only a trailing exact
/// `.00` stripped. `5.0` renders as `"5"`, `5.5` as `"5.50"`, `5.126` as
/// `"5.13"`. Note `.X0` endings are kept; only `.00` is removed.
pub fn format_value(value: f32) -> String {
    let s = format!("{:.2}", value);
    match s.strip_suffix(".00") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

/// Angle of the segment `start -> end` in radians, rotated into `(-90°, 90°]`
/// so text drawn along the segment never renders upside-down.
pub fn label_angle(start: Pos2, end: Pos2) -> f32 {
    use std::f32::consts::{FRAC_PI_2, PI};
    let raw = (end.y - start.y).atan2(end.x - start.x);
    if raw > FRAC_PI_2 {
        raw - PI
    } else if raw <= -FRAC_PI_2 {
        raw + PI
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(pos2(0.0, 0.0), pos2(3.0, 4.0)), 5.0);
        assert_eq!(distance(pos2(-1.0, -1.0), pos2(-1.0, -1.0)), 0.0);
    }

    #[test]
    fn label_angle_stays_in_readable_range() {
        use std::f32::consts::FRAC_PI_2;
        // A line drawn right-to-left would yield an angle near ±180°; the
        // label must flip back into the readable half-plane.
        let a = label_angle(pos2(100.0, 0.0), pos2(0.0, 0.0));
        assert!(a.abs() < 1e-6);
        // Straight up (screen coords, y grows downward) sits on the open
        // boundary and flips to +90°.
        let b = label_angle(pos2(0.0, 100.0), pos2(0.0, 0.0));
        assert!((b - FRAC_PI_2).abs() < 1e-6);
        for &(sx, sy, ex, ey) in &[(0.0, 0.0, 10.0, 25.0), (5.0, 9.0, -3.0, 2.0)] {
            let a = label_angle(pos2(sx, sy), pos2(ex, ey));
            assert!(a > -FRAC_PI_2 - 1e-6 && a <= FRAC_PI_2 + 1e-6);
        }
    }
}
