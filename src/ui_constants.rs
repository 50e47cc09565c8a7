// Shared UI constants: palette and panel layout.

use eframe::egui::Color32;

/// Dot fill color (the original effect's "ted red").
pub const DOT_COLOR: Color32 = Color32::from_rgb(230, 27, 46);

pub const CANVAS_BG: Color32 = Color32::from_rgb(16, 16, 16);
pub const PANEL_BG: Color32 = Color32::from_rgb(30, 30, 30);

pub const CONTROLS_PANEL_WIDTH: f32 = 240.0;
