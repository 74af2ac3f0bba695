//! Reference-scale calibration section of the sidebar.

use eframe::egui;

use super::panel_trait::{Panel, PanelState};
use crate::data::data::SessionData;
use crate::data::geometry;

#[derive(Default)]
pub struct CalibrationPanel {
    state: PanelState,
}

impl Panel for CalibrationPanel {
    fn title(&self) -> &'static str {
        "Calibration"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut egui::Ui, data: &mut SessionData<'_>) {
        ui.horizontal(|ui| {
            ui.label("Reference length");
            let mut cm = data.calibration.reference_cm();
            let response = ui.add(
                egui::DragValue::new(&mut cm)
                    .range(0.1..=10_000.0)
                    .speed(0.1)
                    .suffix(" cm"),
            );
            if response.changed() {
                data.calibration.set_reference_cm(cm);
            }
        });
        ui.small(format!(
            "Current reference: {:.1} px = {} cm",
            data.calibration.reference_pixels(),
            geometry::format_value(data.calibration.reference_cm())
        ));
        ui.small("Draw a line with the Calibrate tool to set the pixel side.");
    }
}
