use eframe::egui;
use vocab_trainer::{Direction, SourceKind, TrainerSession};

use crate::ui_components::{button_pair, wide_button};

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerAction {
    Upload,
    CancelLoad,
    Draw(Direction),
    Reveal,
    MarkMissed,
    Export,
}

pub fn show_trainer(ui: &mut egui::Ui, session: &TrainerSession) -> Option<TrainerAction> {
    let mut action = None;

    if session.source_kind() == SourceKind::Upload {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!session.is_loading(), egui::Button::new("📂 Upload word list..."))
                .clicked()
            {
                action = Some(TrainerAction::Upload);
            }
            if session.is_loading() && ui.button("Cancel").clicked() {
                action = Some(TrainerAction::CancelLoad);
            }
            if !session.words().is_empty() {
                ui.label(format!("{} words", session.words().len()));
            }
        });
        ui.add_space(8.0);
    }

    show_word_box(ui, session);
    ui.add_space(16.0);

    let ready = !session.is_loading();
    let (english, bangla) = button_pair(ui, ready, "Show English Word", "Show Bangla Word");
    if english {
        action = Some(TrainerAction::Draw(Direction::Forward));
    }
    if bangla {
        action = Some(TrainerAction::Draw(Direction::Reverse));
    }

    ui.add_space(16.0);
    if wide_button(ui, ready && session.current().is_some(), "👁 Show Translation") {
        action = Some(TrainerAction::Reveal);
    }

    ui.add_space(8.0);
    if wide_button(
        ui,
        ready,
        egui::RichText::new("Mark as Missed").color(ui.visuals().error_fg_color),
    ) {
        action = Some(TrainerAction::MarkMissed);
    }

    if !session.missed().is_empty() {
        ui.add_space(16.0);
        let label = format!("💾 Download Missed Words ({})", session.missed().len());
        if wide_button(ui, true, label) {
            action = Some(TrainerAction::Export);
        }
    }

    action
}

fn show_word_box(ui: &mut egui::Ui, session: &TrainerSession) {
    egui::Frame::group(ui.style())
        .corner_radius(10.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), 100.0));
            ui.vertical_centered(|ui| {
                if session.is_loading() {
                    ui.add_space(24.0);
                    ui.spinner();
                    return;
                }

                match session.current() {
                    Some(selection) => {
                        ui.label(
                            egui::RichText::new(&selection.shown)
                                .size(28.0)
                                .strong()
                                .color(ui.visuals().hyperlink_color),
                        );
                        if let Some(translation) = session.revealed_translation() {
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new(translation).size(22.0));
                        }
                    }
                    None => {
                        ui.add_space(24.0);
                        ui.label(
                            egui::RichText::new("Click a button to show a word")
                                .size(20.0)
                                .weak(),
                        );
                    }
                }
            });
        });
}
