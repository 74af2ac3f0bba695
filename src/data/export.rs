//! Saving an annotated snapshot of the canvas as a PNG file.
//!
//! Export goes through the egui viewport screenshot: the app requests a
//! capture, receives the whole-viewport [`egui::ColorImage`] as an input
//! event, and this module crops it down to the canvas rect and writes it
//! out. The renderer stays single-sourced; whatever was on screen is what
//! gets saved.

use std::path::Path;

use egui::{ColorImage, Rect};
use image::{Rgba, RgbaImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Default export filename, timestamped like `measurements_1723000000000.png`.
pub fn default_export_name() -> String {
    format!(
        "measurements_{}.png",
        chrono::Local::now().timestamp_millis()
    )
}

/// Crop a viewport capture down to `canvas_rect` (given in logical points;
/// the capture is in physical pixels, hence `pixels_per_point`).
pub fn crop_to_canvas(capture: &ColorImage, canvas_rect: Rect, pixels_per_point: f32) -> RgbaImage {
    let [w, h] = capture.size;
    let x0 = ((canvas_rect.min.x * pixels_per_point).floor().max(0.0) as usize).min(w);
    let y0 = ((canvas_rect.min.y * pixels_per_point).floor().max(0.0) as usize).min(h);
    let x1 = ((canvas_rect.max.x * pixels_per_point).ceil().max(0.0) as usize).min(w);
    let y1 = ((canvas_rect.max.y * pixels_per_point).ceil().max(0.0) as usize).min(h);
    let (cw, ch) = (x1.saturating_sub(x0), y1.saturating_sub(y0));
    let mut out = RgbaImage::new(cw as u32, ch as u32);
    for y in 0..ch {
        for x in 0..cw {
            let p = capture.pixels[(y0 + y) * w + (x0 + x)];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    out
}

pub fn save_png<P: AsRef<Path>>(snapshot: &RgbaImage, path: P) -> Result<(), ExportError> {
    snapshot.save(path.as_ref())?;
    Ok(())
}
