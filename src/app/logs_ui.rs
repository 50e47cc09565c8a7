// Logs window with colored levels, clear/copy and autoscroll.

use eframe::egui;
use log::Level;

pub fn draw_logs_window(ctx: &egui::Context, open: &mut bool) {
    if !*open {
        return;
    }

    egui::Window::new("Logs")
        .open(open)
        .default_size([640.0, 400.0])
        .resizable(true)
        .show(ctx, |ui| {
            let autoscroll_id = egui::Id::new("logs_autoscroll");
            let mut autoscroll = ui.data_mut(|d| *d.get_temp_mut_or(autoscroll_id, true));

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    crate::logger::clear();
                }
                if ui.button("Copy").clicked() {
                    let text = crate::logger::all_lines().join("\n");
                    ui.output_mut(|o| o.copied_text = text);
                }
                ui.checkbox(&mut autoscroll, "Autoscroll");
                ui.separator();
                ui.label(format!("{} lines", crate::logger::len()));
            });
            ui.data_mut(|d| d.insert_temp(autoscroll_id, autoscroll));
            ui.separator();

            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if autoscroll {
                scroll = scroll.stick_to_bottom(true);
            }

            // Virtualized rows; visible lines batched into one layout job.
            let total = crate::logger::len();
            let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
            scroll.show_rows(ui, row_height, total, |ui, row_range| {
                let mut job = egui::text::LayoutJob::default();
                crate::logger::for_each_range(row_range.start, row_range.end, |e| {
                    let fmt = egui::TextFormat {
                        color: color_for_level(e.level),
                        font_id: egui::FontId::monospace(12.0),
                        ..Default::default()
                    };
                    job.append(&format!("[{:>5}] {}: {}\n", e.level, e.target, e.msg), 0.0, fmt);
                });
                ui.label(job);
            });
        });
}

fn color_for_level(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(220, 80, 80),
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => egui::Color32::from_rgb(200, 200, 200),
        Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        Level::Trace => egui::Color32::from_rgb(160, 160, 160),
    }
}
