use eframe::egui;

/// Full-width button with a fixed height, disabled when `enabled` is false.
/// Returns whether it was clicked.
pub fn wide_button(ui: &mut egui::Ui, enabled: bool, text: impl Into<egui::WidgetText>) -> bool {
    let size = egui::vec2(ui.available_width(), 32.0);
    ui.add_enabled(enabled, egui::Button::new(text).min_size(size))
        .clicked()
}

/// Two buttons sharing one row equally. Returns which one was clicked.
pub fn button_pair(
    ui: &mut egui::Ui,
    enabled: bool,
    left: &str,
    right: &str,
) -> (bool, bool) {
    let mut clicked = (false, false);
    ui.columns(2, |columns| {
        clicked.0 = wide_button(&mut columns[0], enabled, left);
        clicked.1 = wide_button(&mut columns[1], enabled, right);
    });
    clicked
}

/// Labeled switch for the dark mode flag. Returns true when flipped.
pub fn dark_mode_switch(ui: &mut egui::Ui, is_dark: bool) -> bool {
    let mut checked = is_dark;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.checkbox(&mut checked, "Dark Mode");
    });
    checked != is_dark
}
