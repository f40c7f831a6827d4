// src/ui.rs
use egui;

pub struct OverlayInfo {
    pub iterations: u32,
    pub max_iterations: u32,
    pub vertex_count: usize,
}

pub fn build_ui(ctx: &egui::Context, info: &OverlayInfo) {
    egui::Window::new("Koch Snowflake")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Iterations: {} / {}", info.iterations, info.max_iterations));
                ui.label(format!("Vertices: {}", info.vertex_count));
                ui.separator();
                ui.label("Keyboard Controls:");
                ui.label("   +/-: More/fewer iterations");
                ui.label("   Escape: Quit");
            });
        });
}
