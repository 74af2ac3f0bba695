pub mod calibration;
pub mod data;
pub mod export;
pub mod geometry;
pub mod hotkeys;
pub mod interaction;
pub mod measurement;
pub mod photo;

#[cfg(feature = "analyze")]
pub mod analysis;
