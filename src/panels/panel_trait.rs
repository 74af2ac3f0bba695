use egui::Ui;

use crate::data::data::SessionData;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// A sidebar section: calibration, measurement list, AI suggestions.
pub trait Panel {
    fn title(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn render_panel(&mut self, _ui: &mut Ui, _data: &mut SessionData<'_>) {}
}
