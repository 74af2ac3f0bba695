//! Configuration types for the PhotoDim UI.

use egui::Color32;

use crate::data::hotkeys::Hotkeys;
use crate::data::measurement::UnitMode;

// ─────────────────────────────────────────────────────────────────────────────
// Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Preset line colors offered in the toolbar: indigo, rose, emerald, amber,
/// purple. The first entry is the default for new lines.
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(0x63, 0x66, 0xf1),
    Color32::from_rgb(0xf4, 0x3f, 0x5e),
    Color32::from_rgb(0x10, 0xb9, 0x81),
    Color32::from_rgb(0xf5, 0x9e, 0x0b),
    Color32::from_rgb(0xa8, 0x55, 0xf7),
];

/// Color of the draft line while the Calibrate tool is active.
pub const CALIBRATION_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused UI for embedded use.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the bottom toolbar (tools, colors, units, export, clear).
    pub toolbar: bool,
    /// Show the right sidebar (calibration, measurement list, analysis).
    pub sidebar: bool,
    /// Enable the AI suggestion section.
    pub analysis: bool,
    /// Enable canvas PNG export.
    pub export: bool,
    /// Enable keyboard shortcuts.
    pub hotkeys: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            toolbar: true,
            sidebar: true,
            analysis: true,
            export: true,
            hotkeys: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PhotoDimConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the PhotoDim window.
#[derive(Clone)]
pub struct PhotoDimConfig {
    /// Native window title.
    pub title: String,
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,
    /// Unit mode the session starts in.
    pub default_unit_mode: UnitMode,
    /// When `true`, loading a new photo resets the calibration to its
    /// default instead of carrying the previous reference over.
    pub reset_calibration_on_new_photo: bool,
    /// Hotkeys override. `None` loads `~/.photodim/hotkeys.yaml`, falling
    /// back to the defaults.
    pub hotkeys: Option<Hotkeys>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for PhotoDimConfig {
    fn default() -> Self {
        Self {
            title: "PhotoDim".to_string(),
            features: FeatureFlags::default(),
            default_unit_mode: UnitMode::default(),
            reset_calibration_on_new_photo: false,
            hotkeys: None,
            native_options: None,
        }
    }
}

impl PhotoDimConfig {
    /// Resolve the hotkeys: explicit override, then the config file, then
    /// the built-in defaults.
    pub fn resolved_hotkeys(&self) -> Hotkeys {
        self.hotkeys
            .or_else(|| Hotkeys::load_from_default_path().ok())
            .unwrap_or_default()
    }
}
