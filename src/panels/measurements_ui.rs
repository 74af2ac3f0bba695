//! The measurement list: per-line label, length, and appearance editors.

use eframe::egui;
use egui::{Align, Color32};

use super::panel_trait::{Panel, PanelState};
use crate::data::data::SessionData;
use crate::data::geometry;
use crate::data::measurement::{LineStyle, MeasurementId, MeasurementUpdate};

#[derive(Default)]
pub struct MeasurementsPanel {
    state: PanelState,
}

/// Owned snapshot of one list row, so widgets can edit local copies while
/// updates go through the collection's tagged-update API.
struct Row {
    id: MeasurementId,
    label: String,
    length_cm: f32,
    color: Color32,
    style: LineStyle,
    thickness: f32,
}

impl Panel for MeasurementsPanel {
    fn title(&self) -> &'static str {
        "Measurements"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut egui::Ui, data: &mut SessionData<'_>) {
        ui.small(format!("{} recorded", data.measurements.len()));

        if data.measurements.is_empty() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.weak("No measurements yet");
                ui.weak("Draw with the Line tool to start");
            });
            return;
        }

        let rows: Vec<Row> = data
            .measurements
            .iter()
            .map(|m| Row {
                id: m.id,
                label: m.label.clone(),
                length_cm: m.length_cm,
                color: m.look.color,
                style: m.look.style,
                thickness: m.look.thickness,
            })
            .collect();

        let mut remove_this: Option<MeasurementId> = None;
        for row in rows {
            ui.separator();
            let row_response = ui
                .scope(|ui| {
                    // Name and delete.
                    ui.horizontal(|ui| {
                        let mut label = row.label.clone();
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut label)
                                .hint_text("Add a name (e.g. width)")
                                .desired_width(150.0),
                        );
                        if response.changed() {
                            data.measurements.apply(
                                row.id,
                                MeasurementUpdate::Label(label),
                                data.calibration,
                            );
                        }
                        if ui
                            .button(egui_phosphor::regular::TRASH)
                            .on_hover_text("Delete measurement")
                            .clicked()
                        {
                            remove_this = Some(row.id);
                        }
                    });

                    // Lengths: editing either side writes the stored length
                    // directly; the endpoints stay where they are.
                    ui.horizontal(|ui| {
                        let mut cm = row.length_cm;
                        if ui
                            .add(
                                egui::DragValue::new(&mut cm)
                                    .range(0.0..=100_000.0)
                                    .speed(0.1)
                                    .suffix(" cm"),
                            )
                            .changed()
                        {
                            data.measurements.apply(
                                row.id,
                                MeasurementUpdate::LengthCm(cm),
                                data.calibration,
                            );
                        }
                        let mut inches = geometry::cm_to_inch(row.length_cm);
                        if ui
                            .add(
                                egui::DragValue::new(&mut inches)
                                    .range(0.0..=100_000.0)
                                    .speed(0.05)
                                    .suffix(" in"),
                            )
                            .changed()
                        {
                            data.measurements.apply(
                                row.id,
                                MeasurementUpdate::LengthInches(inches),
                                data.calibration,
                            );
                        }
                    });

                    // Appearance.
                    ui.horizontal(|ui| {
                        let mut color = row.color;
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            data.measurements.apply(
                                row.id,
                                MeasurementUpdate::Color(color),
                                data.calibration,
                            );
                        }
                        egui::ComboBox::from_id_salt(("measurement-style", row.id))
                            .selected_text(match row.style {
                                LineStyle::Solid => "Solid",
                                LineStyle::Dashed => "Dashed",
                            })
                            .show_ui(ui, |ui| {
                                if ui
                                    .selectable_label(row.style == LineStyle::Solid, "Solid")
                                    .clicked()
                                {
                                    data.measurements.apply(
                                        row.id,
                                        MeasurementUpdate::Style(LineStyle::Solid),
                                        data.calibration,
                                    );
                                }
                                if ui
                                    .selectable_label(row.style == LineStyle::Dashed, "Dashed")
                                    .clicked()
                                {
                                    data.measurements.apply(
                                        row.id,
                                        MeasurementUpdate::Style(LineStyle::Dashed),
                                        data.calibration,
                                    );
                                }
                            });
                        let mut thickness = row.thickness;
                        if ui
                            .add(
                                egui::DragValue::new(&mut thickness)
                                    .range(0.5..=10.0)
                                    .speed(0.1),
                            )
                            .on_hover_text("Line thickness")
                            .changed()
                        {
                            data.measurements.apply(
                                row.id,
                                MeasurementUpdate::Thickness(thickness),
                                data.calibration,
                            );
                        }
                    });
                })
                .response;

            // One-shot scroll to the entry that was just drawn.
            if data.requests.scroll_to == Some(row.id) {
                data.requests.scroll_to = None;
                row_response.scroll_to_me(Some(Align::BOTTOM));
            }
        }

        if let Some(id) = remove_this {
            data.measurements.remove(id);
        }
    }
}
