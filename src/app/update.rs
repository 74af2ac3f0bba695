//! Per-frame update: hotkeys, analysis polling, request processing, and
//! panel layout.

use eframe::egui;

use crate::data::data::SessionData;
use crate::data::export;
use crate::data::hotkeys::HotkeyAction;
use crate::data::interaction::{CanvasInteraction, Tool};
use crate::data::photo::{self, Photo};
use crate::panels::toolbar_ui;

use super::PhotoDimApp;

impl eframe::App for PhotoDimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_analysis(ctx);
        self.handle_hotkeys(ctx);

        let features = self.features.clone();
        let analysis_in_flight = self.analysis_in_flight();
        let analysis_text = self.analysis_text().map(str::to_string);
        let has_photo = self.photo.is_some();

        // Bottom toolbar, only once a photo is loaded.
        if features.toolbar && has_photo {
            egui::TopBottomPanel::bottom("photodim_toolbar").show(ctx, |ui| {
                ui.add_space(4.0);
                let mut data = SessionData {
                    measurements: &mut self.measurements,
                    calibration: &mut self.calibration,
                    unit_mode: &mut self.unit_mode,
                    active_tool: &mut self.active_tool,
                    active_look: &mut self.active_look,
                    has_photo,
                    analysis_in_flight,
                    analysis_text: analysis_text.as_deref(),
                    requests: &mut self.requests,
                };
                toolbar_ui::show(ui, &mut data, &features);
                ui.add_space(4.0);
            });
        }

        // Right sidebar with the section panels.
        if features.sidebar {
            egui::SidePanel::right("photodim_sidebar")
                .default_width(300.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let mut data = SessionData {
                            measurements: &mut self.measurements,
                            calibration: &mut self.calibration,
                            unit_mode: &mut self.unit_mode,
                            active_tool: &mut self.active_tool,
                            active_look: &mut self.active_look,
                            has_photo,
                            analysis_in_flight,
                            analysis_text: analysis_text.as_deref(),
                            requests: &mut self.requests,
                        };
                        for panel in self.side_panels.iter_mut() {
                            if !panel.state().visible {
                                continue;
                            }
                            egui::CollapsingHeader::new(panel.title())
                                .default_open(true)
                                .show(ui, |ui| panel.render_panel(ui, &mut data));
                        }
                    });
                });
        }

        // Central canvas.
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut data = SessionData {
                measurements: &mut self.measurements,
                calibration: &mut self.calibration,
                unit_mode: &mut self.unit_mode,
                active_tool: &mut self.active_tool,
                active_look: &mut self.active_look,
                has_photo,
                analysis_in_flight,
                analysis_text: analysis_text.as_deref(),
                requests: &mut self.requests,
            };
            self.canvas.show(ui, &mut self.photo, &mut data);
        });

        self.process_requests(ctx);
        self.handle_screenshot_result(ctx);
    }
}

impl PhotoDimApp {
    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if !self.features.hotkeys || ctx.wants_keyboard_input() {
            return;
        }
        let Some(action) = ctx.input(|i| self.hotkeys.action(i)) else {
            return;
        };
        match action {
            HotkeyAction::SelectTool => self.active_tool = Tool::Select,
            HotkeyAction::LineTool => self.active_tool = Tool::Line,
            HotkeyAction::CalibrateTool => self.active_tool = Tool::Calibrate,
            HotkeyAction::MoveTool => self.active_tool = Tool::Move,
            HotkeyAction::CycleUnits => self.unit_mode = self.unit_mode.cycled(),
            HotkeyAction::OpenPhoto => self.requests.open_photo = true,
            HotkeyAction::ExportPng => {
                if self.features.export && self.photo.is_some() {
                    self.requests.export_canvas = true;
                }
            }
            HotkeyAction::ClearAll => self.measurements.clear(),
            HotkeyAction::AnalyzePhoto => {
                if self.features.analysis && self.photo.is_some() {
                    self.requests.analyze_photo = true;
                }
            }
        }
    }

    /// Consume requests the panels raised this frame.
    fn process_requests(&mut self, ctx: &egui::Context) {
        if self.requests.open_photo {
            self.requests.open_photo = false;
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "gif"])
                .pick_file()
            {
                match photo::load_color_image(&path) {
                    Ok(color_image) => {
                        let native =
                            egui::vec2(color_image.size[0] as f32, color_image.size[1] as f32);
                        let texture = ctx.load_texture(
                            "product-photo",
                            color_image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.photo = Some(Photo::new(path, texture, native));
                        // New photo: measurements and suggestions belong to the
                        // previous image; the calibration carries over unless
                        // configured otherwise.
                        self.measurements.clear();
                        self.canvas.interaction = CanvasInteraction::default();
                        #[cfg(feature = "analyze")]
                        {
                            self.analysis_text = None;
                        }
                        if self.reset_calibration_on_new_photo {
                            self.calibration = Default::default();
                        }
                    }
                    Err(err) => tracing::error!("failed to load photo: {err}"),
                }
            }
        }

        if self.requests.export_canvas {
            self.requests.export_canvas = false;
            if self.canvas.last_canvas_rect().is_some() {
                self.awaiting_screenshot = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            }
        }

        if self.requests.analyze_photo {
            self.requests.analyze_photo = false;
            #[cfg(feature = "analyze")]
            if let Some(photo) = &self.photo {
                if let Some(rx) = self.analyzer.request(photo.path.clone()) {
                    self.analysis_rx = Some(rx);
                }
            }
        }
    }

    /// Pick up the viewport capture after an export request, crop it to the
    /// canvas and save it where the user chooses.
    fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        if !self.awaiting_screenshot {
            return;
        }
        let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) else {
            return;
        };
        self.awaiting_screenshot = false;
        let Some(canvas_rect) = self.canvas.last_canvas_rect() else {
            return;
        };
        let snapshot = export::crop_to_canvas(&image_arc, canvas_rect, ctx.pixels_per_point());
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(export::default_export_name())
            .add_filter("PNG", &["png"])
            .save_file()
        {
            if let Err(err) = export::save_png(&snapshot, &path) {
                tracing::error!("failed to export canvas: {err}");
            } else {
                tracing::info!("exported canvas to {:?}", path);
            }
        }
    }

    #[cfg(feature = "analyze")]
    fn poll_analysis(&mut self, ctx: &egui::Context) {
        use std::sync::mpsc::TryRecvError;
        if let Some(rx) = &self.analysis_rx {
            match rx.try_recv() {
                Ok(text) => {
                    self.analysis_text = Some(text);
                    self.analysis_rx = None;
                }
                Err(TryRecvError::Empty) => {
                    // Keep frames coming while the worker runs so the result
                    // shows up without user input.
                    ctx.request_repaint_after(std::time::Duration::from_millis(200));
                }
                Err(TryRecvError::Disconnected) => self.analysis_rx = None,
            }
        }
    }

    #[cfg(not(feature = "analyze"))]
    fn poll_analysis(&mut self, _ctx: &egui::Context) {}
}
