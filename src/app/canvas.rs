// Central canvas: rebuild checks, the pointer pass and circle drawing.

use eframe::egui;

use crate::ui_constants::{CANVAS_BG, DOT_COLOR};

impl super::DotfieldApp {
    pub(super) fn draw_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CANVAS_BG))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                // A resize replaces the drawing area; rebuild so the grid
                // stays centered.
                if rect.size() != self.canvas_size {
                    self.canvas_size = rect.size();
                    self.effect.force_rebuild();
                }

                self.effect
                    .apply(self.controls, rect.width(), rect.height());

                // Pointer in canvas-local coordinates; until the pointer is
                // first seen it reads as the top-left corner, like the
                // original effect's host.
                let pointer = ctx
                    .pointer_latest_pos()
                    .map(|p| p - rect.min.to_vec2())
                    .unwrap_or(egui::Pos2::ZERO);
                self.effect.update_pointer(pointer.x, pointer.y);

                // Dot size is a diameter; white image cells collapse to
                // zero and are skipped.
                for dot in &self.effect.grid().dots {
                    if dot.size <= 0.0 {
                        continue;
                    }
                    let center = rect.min + egui::vec2(dot.x, dot.y);
                    painter.circle_filled(center, dot.size / 2.0, DOT_COLOR);
                }
            });
    }
}
