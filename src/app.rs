// Application state and the per-frame drive. Widget drawing, the canvas
// painter and the decode worker live in submodules (src/app/).

use eframe::{egui, App};
use std::sync::mpsc;

use crate::effect::EffectState;
use crate::types::EffectConfig;

mod canvas;
mod controls;
mod decode;
mod logs_ui;

pub use decode::ImageMsg;

pub struct DotfieldApp {
    effect: EffectState,
    /// Live slider values; `effect` keeps its own last-applied snapshot.
    controls: EffectConfig,
    /// Canvas size seen last frame; a change forces a rebuild so the grid
    /// stays centered.
    canvas_size: egui::Vec2,
    image_name: Option<String>,
    decode_in_flight: bool,
    show_logs: bool,
    image_tx: mpsc::Sender<ImageMsg>,
    image_rx: mpsc::Receiver<ImageMsg>,
}

impl Default for DotfieldApp {
    fn default() -> Self {
        let (image_tx, image_rx) = mpsc::channel();
        Self {
            effect: EffectState::new(),
            controls: EffectConfig::default(),
            canvas_size: egui::Vec2::ZERO,
            image_name: None,
            decode_in_flight: false,
            show_logs: false,
            image_tx,
            image_rx,
        }
    }
}

impl App for DotfieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the logs window fresh.
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        // Drain decoded-image results delivered from worker threads. The
        // image reference only ever changes here, on the frame loop.
        while let Ok(msg) = self.image_rx.try_recv() {
            self.decode_in_flight = false;
            match msg {
                ImageMsg::Decoded { name, map } => {
                    log::info!("image loaded: {} ({}x{})", name, map.width(), map.height());
                    self.image_name = Some(name);
                    self.effect.set_image(map);
                }
                ImageMsg::Failed { name, error } => {
                    // Not an image (or unreadable): fall back to
                    // proximity-only mode, no dialog.
                    log::warn!("could not load {name}: {error}");
                    self.image_name = None;
                    self.effect.clear_image();
                }
            }
            ctx.request_repaint();
        }

        let actions = controls::draw_controls_panel(
            ctx,
            &mut self.controls,
            self.image_name.as_deref(),
            self.decode_in_flight,
        );
        if let Some(path) = actions.load_file {
            self.decode_in_flight = true;
            decode::spawn_decode(path, self.image_tx.clone(), ctx.clone());
        }
        if actions.clear_image {
            self.image_name = None;
            self.effect.clear_image();
        }
        if actions.open_logs {
            self.show_logs = true;
        }

        self.draw_canvas(ctx);

        logs_ui::draw_logs_window(ctx, &mut self.show_logs);
    }
}
