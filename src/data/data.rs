//! SessionData: a borrowed view over the app state handed to panels.

use super::calibration::Calibration;
use super::measurement::{LineLook, MeasurementId, Measurements, UnitMode};
use super::interaction::Tool;

/// Requests set by panel UI during a frame and consumed by the app
/// afterwards. Cross-panel side effects go through here instead of panels
/// reaching into each other.
#[derive(Debug, Default)]
pub struct SessionRequests {
    /// Scroll the measurement list so this entry is visible (set once after
    /// a line is added, consumed by the list panel when it renders the row).
    pub scroll_to: Option<MeasurementId>,
    /// Capture the canvas and save it as a PNG.
    pub export_canvas: bool,
    /// Open the file picker and load a new photo.
    pub open_photo: bool,
    /// Start an AI suggestion request for the loaded photo.
    pub analyze_photo: bool,
}

/// A view struct combining the session state panels need.
pub struct SessionData<'a> {
    pub measurements: &'a mut Measurements,
    pub calibration: &'a mut Calibration,
    pub unit_mode: &'a mut UnitMode,
    pub active_tool: &'a mut Tool,
    pub active_look: &'a mut LineLook,
    pub has_photo: bool,
    /// Whether an AI suggestion request is currently running.
    pub analysis_in_flight: bool,
    /// The most recent AI suggestion (or failure advisory), verbatim.
    pub analysis_text: Option<&'a str>,
    pub requests: &'a mut SessionRequests,
}

impl SessionData<'_> {
    pub fn cycle_units(&mut self) {
        *self.unit_mode = self.unit_mode.cycled();
    }

    pub fn clear_measurements(&mut self) {
        self.measurements.clear();
    }
}
