//! AI suggestion section: one button, one advisory text.

use eframe::egui;

use super::panel_trait::{Panel, PanelState};
use crate::data::data::SessionData;

#[derive(Default)]
pub struct AnalysisPanel {
    state: PanelState,
}

impl Panel for AnalysisPanel {
    fn title(&self) -> &'static str {
        "AI suggestions"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut egui::Ui, data: &mut SessionData<'_>) {
        let busy = data.analysis_in_flight;
        let caption = format!(
            "{} Suggest measurement points",
            egui_phosphor::regular::SPARKLE
        );
        let button = egui::Button::new(caption);
        if ui.add_enabled(data.has_photo && !busy, button).clicked() {
            data.requests.analyze_photo = true;
        }
        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Analyzing...");
            });
        }
        if let Some(text) = data.analysis_text {
            ui.separator();
            ui.label(text);
        }
    }
}
