//! Loading a product photo and fitting it to the canvas.

use std::path::{Path, PathBuf};

use egui::{ColorImage, TextureHandle, Vec2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an image file into an [`egui::ColorImage`] ready for texture upload.
///
/// Any raster format the `image` crate understands is accepted; no further
/// validation is performed.
pub fn load_color_image(path: &Path) -> Result<ColorImage, PhotoError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

/// Scale `native` to fit inside `avail` preserving aspect ratio, never
/// upscaling beyond the photo's native resolution.
pub fn fit_size(native: Vec2, avail: Vec2) -> Vec2 {
    let ratio = (avail.x / native.x).min(avail.y / native.y).min(1.0);
    native * ratio
}

/// The currently loaded photo.
///
/// `display_size` is decided once, on the first frame the canvas lays the
/// photo out, and then kept stable so measurement coordinates stay anchored
/// to the displayed pixels even when the window is resized afterwards.
pub struct Photo {
    pub path: PathBuf,
    pub texture: TextureHandle,
    pub native_size: Vec2,
    pub display_size: Option<Vec2>,
}

impl Photo {
    pub fn new(path: PathBuf, texture: TextureHandle, native_size: Vec2) -> Self {
        Self {
            path,
            texture,
            native_size,
            display_size: None,
        }
    }

    /// The stable display size, computing and freezing it on first use.
    pub fn display_size_for(&mut self, avail: Vec2) -> Vec2 {
        *self
            .display_size
            .get_or_insert_with(|| fit_size(self.native_size, avail))
    }
}
