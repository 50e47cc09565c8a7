// Left-side controls panel: the four effect sliders plus image handling.
// State is passed in by mutable reference and updated in-place; clicks are
// reported back as actions for the app to execute.

use eframe::egui::{self, RichText};
use std::path::PathBuf;

use crate::types::EffectConfig;
use crate::ui_constants::{CONTROLS_PANEL_WIDTH, PANEL_BG};

#[derive(Default)]
pub struct ControlActions {
    pub load_file: Option<PathBuf>,
    pub clear_image: bool,
    pub open_logs: bool,
}

pub fn draw_controls_panel(
    ctx: &egui::Context,
    config: &mut EffectConfig,
    image_name: Option<&str>,
    decode_in_flight: bool,
) -> ControlActions {
    let mut actions = ControlActions::default();

    egui::SidePanel::left("controls_panel")
        .frame(egui::Frame::none().fill(PANEL_BG).inner_margin(10.0))
        .exact_width(CONTROLS_PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new("Dot effect").strong());
            ui.separator();

            ui.add(
                egui::Slider::new(&mut config.size_ratio, 0.0..=1.0)
                    .step_by(0.01)
                    .text("Dot size"),
            );
            ui.add(
                egui::Slider::new(&mut config.max_scale, 1.0..=5.0)
                    .step_by(0.01)
                    .text("Max scale"),
            );
            ui.add(egui::Slider::new(&mut config.dot_count, 1..=200).text("Density"));
            ui.add(
                egui::Slider::new(&mut config.gap, 1.0..=30.0)
                    .step_by(1.0)
                    .text("Gap"),
            );

            ui.separator();
            ui.label(RichText::new("Image").strong());

            let load_clicked = ui
                .add_enabled(!decode_in_flight, egui::Button::new("Load image…"))
                .clicked();
            if load_clicked {
                // Unfiltered on purpose: picking a non-image file clears the
                // current one, same as the original file input.
                actions.load_file = rfd::FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .add_filter("all files", &["*"])
                    .pick_file();
            }
            if decode_in_flight {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Decoding…");
                });
            }
            match image_name {
                Some(name) => {
                    ui.label(name);
                    if ui.button("Clear image").clicked() {
                        actions.clear_image = true;
                    }
                }
                None => {
                    ui.label(RichText::new("No image: dots follow the pointer").weak());
                }
            }

            ui.separator();
            if ui.button("Logs").clicked() {
                actions.open_logs = true;
            }
        });

    actions
}
