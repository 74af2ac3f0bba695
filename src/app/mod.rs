//! Main application module for PhotoDim.
//!
//! Split into focused sub-modules:
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame hotkeys, request processing, and panel layout |
//! | [`run`]    | Top-level [`run_photodim()`] entry point |

mod run;
mod update;

pub use run::run_photodim;

#[cfg(feature = "analyze")]
use std::sync::mpsc::Receiver;

use crate::config::{FeatureFlags, PhotoDimConfig};
use crate::data::calibration::Calibration;
use crate::data::data::SessionRequests;
use crate::data::hotkeys::Hotkeys;
use crate::data::interaction::Tool;
use crate::data::measurement::{LineLook, Measurements, UnitMode};
use crate::data::photo::Photo;
use crate::panels::{CalibrationPanel, CanvasPanel, MeasurementsPanel, Panel};

#[cfg(feature = "analyze")]
use crate::data::analysis::Analyzer;
#[cfg(feature = "analyze")]
use crate::panels::AnalysisPanel;

/// The PhotoDim application: owns the whole session state explicitly.
///
/// Panels never hold state of their own beyond visibility; everything they
/// edit is borrowed from here each frame through
/// [`SessionData`](crate::data::data::SessionData).
pub struct PhotoDimApp {
    // ── Session state ────────────────────────────────────────────────────────
    pub photo: Option<Photo>,
    pub measurements: Measurements,
    pub calibration: Calibration,
    pub unit_mode: UnitMode,
    pub active_tool: Tool,
    /// Look applied to newly drawn lines.
    pub active_look: LineLook,

    // ── Panels ───────────────────────────────────────────────────────────────
    pub canvas: CanvasPanel,
    pub side_panels: Vec<Box<dyn Panel>>,

    // ── Configuration ────────────────────────────────────────────────────────
    pub(crate) features: FeatureFlags,
    pub(crate) reset_calibration_on_new_photo: bool,
    pub(crate) hotkeys: Hotkeys,

    // ── Cross-panel requests and async state ─────────────────────────────────
    pub(crate) requests: SessionRequests,
    /// Set after an export screenshot was requested; cleared once the
    /// capture event arrives.
    pub(crate) awaiting_screenshot: bool,
    #[cfg(feature = "analyze")]
    pub(crate) analyzer: Analyzer,
    #[cfg(feature = "analyze")]
    pub(crate) analysis_rx: Option<Receiver<String>>,
    #[cfg(feature = "analyze")]
    pub(crate) analysis_text: Option<String>,
}

impl PhotoDimApp {
    pub fn new(cfg: &PhotoDimConfig) -> Self {
        let mut side_panels: Vec<Box<dyn Panel>> = vec![
            Box::new(CalibrationPanel::default()),
            Box::new(MeasurementsPanel::default()),
        ];
        #[cfg(feature = "analyze")]
        if cfg.features.analysis {
            side_panels.push(Box::new(AnalysisPanel::default()));
        }
        Self {
            photo: None,
            measurements: Measurements::default(),
            calibration: Calibration::default(),
            unit_mode: cfg.default_unit_mode,
            active_tool: Tool::default(),
            active_look: LineLook::default(),
            canvas: CanvasPanel::default(),
            side_panels,
            features: cfg.features.clone(),
            reset_calibration_on_new_photo: cfg.reset_calibration_on_new_photo,
            hotkeys: cfg.resolved_hotkeys(),
            requests: SessionRequests::default(),
            awaiting_screenshot: false,
            #[cfg(feature = "analyze")]
            analyzer: Analyzer::default(),
            #[cfg(feature = "analyze")]
            analysis_rx: None,
            #[cfg(feature = "analyze")]
            analysis_text: None,
        }
    }

    /// Whether an AI suggestion request is currently running.
    pub(crate) fn analysis_in_flight(&self) -> bool {
        #[cfg(feature = "analyze")]
        {
            self.analyzer.is_in_flight()
        }
        #[cfg(not(feature = "analyze"))]
        {
            false
        }
    }

    /// The most recent suggestion text, if any.
    pub(crate) fn analysis_text(&self) -> Option<&str> {
        #[cfg(feature = "analyze")]
        {
            self.analysis_text.as_deref()
        }
        #[cfg(not(feature = "analyze"))]
        {
            None
        }
    }
}
