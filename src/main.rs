// Entry point stays minimal: window config and app launch only.
// All per-frame logic lives in the app module (src/app.rs).

use eframe::egui;

mod app;
mod effect;
mod grid;
mod logger;
mod sampler;
mod types;
mod ui_constants;

fn main() -> eframe::Result<()> {
    logger::init();

    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Dotfield",
        native_options,
        Box::new(|_cc| Box::new(app::DotfieldApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
