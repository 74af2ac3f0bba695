//! PhotoDim crate root: re-exports and module wiring.
//!
//! PhotoDim is an egui/eframe tool for dimensioning product photos: load an
//! image, draw a calibration reference, then annotate measurement lines
//! whose lengths read out in centimeters and inches.
//!
//! The crate is organised into cohesive modules:
//! - `data`: calibration, measurement collection, interaction state machine,
//!   photo loading, export, hotkeys
//! - `panels`: canvas renderer and the sidebar/toolbar UI units
//! - `config`: top-level configuration
//! - `app`: the eframe application shell and `run_photodim` entry point

pub mod app;
pub mod config;
pub mod data;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_photodim, PhotoDimApp};
pub use config::{FeatureFlags, PhotoDimConfig, CALIBRATION_COLOR, PALETTE};
pub use data::calibration::Calibration;
pub use data::interaction::{CanvasInteraction, DragSession, DraftLine, GestureOutcome, GrabPart, Tool};
pub use data::measurement::{
    LineLook, LineStyle, MeasurementId, MeasurementLine, MeasurementUpdate, Measurements, UnitMode,
};
