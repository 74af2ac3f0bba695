//! The central canvas: photo, committed measurement lines, and the
//! in-progress draft.
//!
//! This module encapsulates the canvas rendering and related interactions:
//! - drawing the photo, committed lines with end caps and rotated labels
//! - showing the dashed draft line while a gesture is underway
//! - translating egui pointer responses into state-machine calls

use eframe::egui;
use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::config::CALIBRATION_COLOR;
use crate::data::data::SessionData;
use crate::data::geometry::{self, distance};
use crate::data::interaction::{hit_test, CanvasInteraction, GestureOutcome, Tool};
use crate::data::measurement::{LineLook, LineStyle, UnitMode};
use crate::data::photo::Photo;

/// Half-length of the perpendicular end caps, in pixels.
const CAP_HALF_LEN: f32 = 8.0;
/// Dash pattern of draft and dashed-style lines.
const DASH_LEN: f32 = 6.0;
const GAP_LEN: f32 = 4.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const LABEL_PADDING: Vec2 = Vec2::new(6.0, 3.0);

/// The canvas panel: owns the interaction state machine and remembers the
/// rect it drew into so exports can crop the viewport capture to it.
#[derive(Default)]
pub struct CanvasPanel {
    pub interaction: CanvasInteraction,
    last_canvas_rect: Option<Rect>,
}

impl CanvasPanel {
    /// Canvas rect of the last frame, in logical points.
    pub fn last_canvas_rect(&self) -> Option<Rect> {
        self.last_canvas_rect
    }

    pub fn show(&mut self, ui: &mut Ui, photo: &mut Option<Photo>, data: &mut SessionData<'_>) {
        let Some(photo) = photo else {
            self.last_canvas_rect = None;
            self.render_welcome(ui, data);
            return;
        };

        // Decide the canvas size against the panel viewport, not the
        // unbounded scroll content.
        let avail = ui.available_size();
        let display = photo.display_size_for(avail);
        egui::ScrollArea::both().show(ui, |ui| {
            // Center the canvas when the viewport is larger than the photo.
            let pad = ((avail - display) * 0.5).max(Vec2::ZERO);
            ui.add_space(pad.y);
            ui.horizontal(|ui| {
                ui.add_space(pad.x);
                // Drag sense only: gestures must begin on the press itself,
                // without egui's click/drag disambiguation delay.
                let (rect, response) = ui.allocate_exact_size(display, Sense::drag());
                self.last_canvas_rect = Some(rect);
                self.handle_pointer(&response, rect, data);
                self.update_cursor(&response, rect, data);

                let painter = ui.painter_at(rect);
                painter.image(
                    photo.texture.id(),
                    rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );

                for line in data.measurements.iter() {
                    let text = label_text(&line.label, line.length_cm, *data.unit_mode);
                    draw_measurement(
                        &painter,
                        rect.min,
                        line.start,
                        line.end,
                        line.look,
                        matches!(line.look.style, LineStyle::Dashed),
                        &text,
                    );
                }

                // Draft preview: always dashed, calibration drafts in the
                // dedicated calibration color.
                if let Some(draft) = self.interaction.draft() {
                    let color = if *data.active_tool == Tool::Calibrate {
                        CALIBRATION_COLOR
                    } else {
                        data.active_look.color
                    };
                    let look = LineLook {
                        color,
                        style: LineStyle::Dashed,
                        thickness: data.active_look.thickness,
                    };
                    let length_cm = data.calibration.to_cm(distance(draft.start, draft.end));
                    let text = label_text("", length_cm, *data.unit_mode);
                    draw_measurement(&painter, rect.min, draft.start, draft.end, look, true, &text);
                }
            });
        });
    }

    fn handle_pointer(&mut self, response: &egui::Response, rect: Rect, data: &mut SessionData<'_>) {
        let to_local = |p: Pos2| p - rect.min.to_vec2();
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.interaction
                    .pointer_down(to_local(pos), *data.active_tool, data.measurements);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.interaction
                    .pointer_moved(to_local(pos), data.measurements, data.calibration);
            }
        }
        if response.drag_stopped() {
            let outcome = self.interaction.pointer_up(
                *data.active_tool,
                *data.active_look,
                data.measurements,
                data.calibration,
            );
            if let GestureOutcome::LineAdded(id) = outcome {
                data.requests.scroll_to = Some(id);
            }
        }
    }

    fn update_cursor(&self, response: &egui::Response, rect: Rect, data: &SessionData<'_>) {
        if !response.hovered() {
            return;
        }
        let cursor = match *data.active_tool {
            Tool::Line | Tool::Calibrate => CursorIcon::Crosshair,
            Tool::Move => {
                if self.interaction.drag().is_some() {
                    CursorIcon::Grabbing
                } else {
                    let over_handle = response
                        .hover_pos()
                        .map(|p| p - rect.min.to_vec2())
                        .and_then(|p| hit_test(p, data.measurements))
                        .is_some();
                    if over_handle {
                        CursorIcon::Grab
                    } else {
                        CursorIcon::Default
                    }
                }
            }
            Tool::Select => CursorIcon::Default,
        };
        response.ctx.set_cursor_icon(cursor);
    }

    fn render_welcome(&self, ui: &mut Ui, data: &mut SessionData<'_>) {
        ui.add_space(ui.available_height() * 0.3);
        ui.vertical_centered(|ui| {
            ui.heading("Welcome to PhotoDim");
            ui.label("Load a product photo to annotate dimensions and convert units.");
            ui.add_space(12.0);
            let caption = format!("{} Load photo", egui_phosphor::regular::IMAGE);
            if ui.button(caption).clicked() {
                data.requests.open_photo = true;
            }
        });
    }
}

/// Midpoint label text: `"label: value"`, or just the value for drafts.
fn label_text(label: &str, length_cm: f32, unit_mode: UnitMode) -> String {
    let value = unit_mode.format_length(length_cm);
    if label.is_empty() {
        value
    } else {
        format!("{}: {}", label, value)
    }
}

/// Draw one segment with end caps and its rotated midpoint label.
///
/// `start`/`end` are canvas-local; `origin` is the canvas top-left on
/// screen. End caps stay solid regardless of the line style.
fn draw_measurement(
    painter: &egui::Painter,
    origin: Pos2,
    start: Pos2,
    end: Pos2,
    look: LineLook,
    dashed: bool,
    text: &str,
) {
    let start = origin + start.to_vec2();
    let end = origin + end.to_vec2();
    let stroke = Stroke::new(look.thickness, look.color);

    if dashed {
        painter.extend(Shape::dashed_line(&[start, end], stroke, DASH_LEN, GAP_LEN));
    } else {
        painter.line_segment([start, end], stroke);
    }

    let dir = end - start;
    if dir != Vec2::ZERO {
        let n = dir.normalized().rot90() * CAP_HALF_LEN;
        painter.line_segment([start + n, start - n], stroke);
        painter.line_segment([end + n, end - n], stroke);
    }

    // Label along the segment, flipped into the readable half-plane, on a
    // translucent plate so it stays legible over the photo.
    let angle = geometry::label_angle(start, end);
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(LABEL_FONT_SIZE),
        look.color,
    );
    let size = galley.size();
    let mid = start + (end - start) * 0.5;
    let rot = Rot2::from_angle(angle);
    let pos = mid - rot * (size * 0.5);
    let corners = vec![
        pos + rot * Vec2::new(-LABEL_PADDING.x, -LABEL_PADDING.y),
        pos + rot * Vec2::new(size.x + LABEL_PADDING.x, -LABEL_PADDING.y),
        pos + rot * Vec2::new(size.x + LABEL_PADDING.x, size.y + LABEL_PADDING.y),
        pos + rot * Vec2::new(-LABEL_PADDING.x, size.y + LABEL_PADDING.y),
    ];
    painter.add(Shape::convex_polygon(
        corners,
        Color32::from_rgba_unmultiplied(255, 255, 255, 242),
        Stroke::NONE,
    ));
    painter.add(TextShape::new(pos, galley, look.color).with_angle(angle));
}
