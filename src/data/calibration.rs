//! Pixel-to-centimeter calibration.
//!
//! A single reference ratio maps canvas pixels to real-world centimeters.
//! The conversion factor is always derived from the two stored sides, never
//! cached, so the ratio cannot drift.

/// The user-drawn reference: `reference_pixels` canvas pixels correspond to
/// `reference_cm` real-world centimeters.
///
/// Invariant: `reference_pixels > 0`. Both setters ignore writes that would
/// violate it (degenerate calibration gestures are already discarded by the
/// interaction layer before they reach this type).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    reference_pixels: f32,
    reference_cm: f32,
}

impl Default for Calibration {
    fn default() -> Self {
        // 100 px = 10 cm until the user calibrates.
        Self {
            reference_pixels: 100.0,
            reference_cm: 10.0,
        }
    }
}

impl Calibration {
    /// Replace both sides of the reference atomically.
    ///
    /// Non-finite or non-positive values leave the calibration unchanged.
    pub fn set_reference(&mut self, pixels: f32, cm: f32) {
        if pixels.is_finite() && pixels > 0.0 && cm.is_finite() && cm > 0.0 {
            self.reference_pixels = pixels;
            self.reference_cm = cm;
        }
    }

    /// Replace only the real-world side, keeping the pixel side fixed.
    /// Used when the user types into the reference-cm field.
    pub fn set_reference_cm(&mut self, cm: f32) {
        if cm.is_finite() && cm > 0.0 {
            self.reference_cm = cm;
        }
    }

    /// Replace only the pixel side, keeping the declared cm value.
    /// Used when the user completes a calibration-drawing gesture.
    pub fn set_reference_pixels(&mut self, pixels: f32) {
        if pixels.is_finite() && pixels > 0.0 {
            self.reference_pixels = pixels;
        }
    }

    pub fn reference_pixels(&self) -> f32 {
        self.reference_pixels
    }

    pub fn reference_cm(&self) -> f32 {
        self.reference_cm
    }

    /// Convert a pixel distance to centimeters: `d * cm / px`.
    pub fn to_cm(&self, pixel_distance: f32) -> f32 {
        pixel_distance * self.reference_cm / self.reference_pixels
    }
}
