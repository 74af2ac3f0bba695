//! Top-level entry point for running PhotoDim as a native window.

use eframe::egui;

use super::PhotoDimApp;
use crate::config::PhotoDimConfig;

/// Launch the PhotoDim application in a native window.
///
/// Constructs a [`PhotoDimApp`] from the configuration, opens a native
/// window, and enters the eframe event loop. The call blocks until the
/// window is closed.
pub fn run_photodim(mut cfg: PhotoDimConfig) -> eframe::Result<()> {
    let app = PhotoDimApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a comfortable default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1280.0, 860.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
