//! Bottom toolbar: tool selection, color swatches, unit cycle, and actions.

use eframe::egui;
use egui::{Color32, Sense, Stroke, Ui};
use egui_phosphor::regular::{
    ARROWS_HORIZONTAL, ARROWS_OUT_CARDINAL, CAMERA, CURSOR, DOWNLOAD_SIMPLE, RULER, STACK, TRASH,
};

use crate::config::{FeatureFlags, PALETTE};
use crate::data::data::SessionData;
use crate::data::interaction::Tool;

pub fn show(ui: &mut Ui, data: &mut SessionData<'_>, features: &FeatureFlags) {
    ui.horizontal(|ui| {
        tool_button(ui, data, Tool::Select, CURSOR, "Select");
        tool_button(ui, data, Tool::Line, RULER, "Line");
        tool_button(ui, data, Tool::Calibrate, ARROWS_HORIZONTAL, "Calibrate");
        tool_button(ui, data, Tool::Move, ARROWS_OUT_CARDINAL, "Move");

        ui.separator();
        for &color in PALETTE.iter() {
            swatch(ui, data, color);
        }

        ui.separator();
        let caption = format!("{} {}", STACK, data.unit_mode.caption());
        if ui
            .button(caption)
            .on_hover_text("Cycle display units")
            .clicked()
        {
            data.cycle_units();
        }

        ui.separator();
        if features.export {
            let button = egui::Button::new(DOWNLOAD_SIMPLE);
            if ui
                .add_enabled(data.has_photo, button)
                .on_hover_text("Export canvas as PNG")
                .clicked()
            {
                data.requests.export_canvas = true;
            }
        }
        if ui
            .button(TRASH)
            .on_hover_text("Clear all measurements")
            .clicked()
        {
            data.clear_measurements();
        }

        ui.separator();
        if ui.button(CAMERA).on_hover_text("Replace photo").clicked() {
            data.requests.open_photo = true;
        }
    });
}

fn tool_button(ui: &mut Ui, data: &mut SessionData<'_>, tool: Tool, icon: &str, label: &str) {
    let selected = *data.active_tool == tool;
    if ui
        .selectable_label(selected, format!("{} {}", icon, label))
        .clicked()
    {
        *data.active_tool = tool;
    }
}

fn swatch(ui: &mut Ui, data: &mut SessionData<'_>, color: Color32) {
    let selected = data.active_look.color == color;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), Sense::click());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 7.0, color);
    if selected {
        painter.circle_stroke(
            rect.center(),
            8.5,
            Stroke::new(1.5, ui.visuals().strong_text_color()),
        );
    }
    if response.clicked() {
        data.active_look.color = color;
    }
}
