use eframe::egui;

use crate::logger::AppLogger;

pub fn show_log_panel(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.heading("Log");
        if ui.small_button("Clear").clicked() {
            logger.clear();
        }
    });
    egui::ScrollArea::vertical()
        .max_height(160.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in logger.get_entries() {
                let color = match entry.level {
                    log::Level::Error => ui.visuals().error_fg_color,
                    log::Level::Warn => ui.visuals().warn_fg_color,
                    _ => ui.visuals().text_color(),
                };
                ui.label(
                    egui::RichText::new(entry.format_line())
                        .monospace()
                        .color(color),
                );
            }
        });
}
