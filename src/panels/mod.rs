pub mod calibration_ui;
pub mod canvas_ui;
pub mod measurements_ui;
pub mod panel_trait;
pub mod toolbar_ui;

#[cfg(feature = "analyze")]
pub mod analysis_ui;

pub use calibration_ui::CalibrationPanel;
pub use canvas_ui::CanvasPanel;
pub use measurements_ui::MeasurementsPanel;
pub use panel_trait::{Panel, PanelState};

#[cfg(feature = "analyze")]
pub use analysis_ui::AnalysisPanel;
