use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use vocab_async_runtime::{LoadTracker, TrainerCommand, TrainerUpdate};
use vocab_trainer::config::TrainerConfig;
use vocab_trainer::{
    FetchSource, LoadFailure, PreferenceStore, SourceKind, SpreadsheetSource, ThemePreference,
    TrainerError, TrainerSession, UploadSource,
};

use crate::logger::AppLogger;
use crate::ui_components::dark_mode_switch;
use crate::views::{TrainerAction, show_log_panel, show_trainer};

/// Where the word list comes from, fixed at startup.
#[derive(Debug, Clone)]
pub enum SourceMode {
    Fixed(PathBuf),
    Upload,
}

impl SourceMode {
    fn kind(&self) -> SourceKind {
        match self {
            SourceMode::Fixed(_) => SourceKind::Fixed,
            SourceMode::Upload => SourceKind::Upload,
        }
    }
}

pub struct LaunchOptions {
    pub source: SourceMode,
    pub config: TrainerConfig,
    pub font_path: Option<PathBuf>,
}

pub struct TrainerApp {
    session: TrainerSession,
    config: TrainerConfig,
    status: String,
    notice: Option<String>,
    show_log: bool,

    preferences: PreferenceStore,
    theme: ThemePreference,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<TrainerCommand>,
    update_rx: mpsc::UnboundedReceiver<TrainerUpdate>,
    loads: LoadTracker,

    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl TrainerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        launch: LaunchOptions,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(vocab_async_runtime::worker_task(command_rx, update_tx));

        let mut preferences = PreferenceStore::open_or_default(&launch.config.settings_path);
        let theme = preferences.ensure_theme().unwrap_or_else(|e| {
            log::warn!("Could not save default theme: {e}");
            preferences.theme()
        });
        apply_theme(&cc.egui_ctx, theme);

        if let Some(path) = &launch.font_path {
            setup_fonts(&cc.egui_ctx, path);
        }

        let session = match launch.source.kind() {
            SourceKind::Fixed => TrainerSession::new(SourceKind::Fixed),
            // Nothing to load until the user picks a file
            SourceKind::Upload => TrainerSession::with_words(SourceKind::Upload, Default::default()),
        };

        let mut app = Self {
            session,
            config: launch.config,
            status: String::new(),
            notice: None,
            show_log: false,
            preferences,
            theme,
            command_tx,
            update_rx,
            loads: LoadTracker::new(),
            logger,
            _tokio_handle: tokio_handle,
        };

        if let SourceMode::Fixed(path) = launch.source {
            app.start_load(Box::new(FetchSource::new(path)));
        }

        app
    }

    fn start_load(&mut self, source: Box<dyn SpreadsheetSource>) {
        let id = self.loads.begin();
        self.session.begin_load();
        if self.session.source_kind() == SourceKind::Upload {
            self.status = format!("Loading {}...", source.describe());
        }
        let _ = self.command_tx.send(TrainerCommand::Load { id, source });
    }

    fn handle_update(&mut self, update: TrainerUpdate) {
        match update {
            TrainerUpdate::WordsLoaded { id, words } => {
                if self.loads.settle(id) {
                    self.status = format!("Loaded {} words", words.len());
                    self.session.replace_words(words);
                }
            }
            TrainerUpdate::LoadFailed { id, kind, message } => {
                if self.loads.settle(id) {
                    if self.session.source_kind().notifies_on_empty() {
                        self.status = format!("Error: {message}");
                    }
                    self.session.fail_load(LoadFailure { kind, message });
                }
            }
            TrainerUpdate::LoadCancelled { id } => {
                log::debug!("Load {:?} cancelled", id);
            }
            TrainerUpdate::ExportComplete { path, count } => {
                self.status = format!("Saved {} missed words → {}", count, path.display());
            }
            TrainerUpdate::Error { message } => {
                log::error!("{message}");
                self.status = format!("Error: {message}");
            }
        }
    }

    fn handle_action(&mut self, action: TrainerAction) {
        match action {
            TrainerAction::Upload => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Excel workbook", &["xlsx"])
                    .pick_file()
                {
                    log::info!("Uploading word list: {}", path.display());
                    self.start_load(Box::new(UploadSource::from_picked_file(path)));
                }
            }
            TrainerAction::CancelLoad => {
                let _ = self.command_tx.send(TrainerCommand::CancelLoad);
                self.loads.clear();
                self.session.cancel_load();
                self.status = "Upload cancelled".to_string();
            }
            TrainerAction::Draw(direction) => {
                if self.session.source_kind().notifies_on_empty() {
                    if let Err(TrainerError::EmptyList) = self.session.try_draw(direction) {
                        self.notice = Some("Please upload a valid Excel file first.".to_string());
                    }
                } else {
                    self.session.draw(direction);
                }
            }
            TrainerAction::Reveal => self.session.reveal(),
            TrainerAction::MarkMissed => {
                self.session.mark_missed();
            }
            TrainerAction::Export => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Excel workbook", &["xlsx"])
                    .set_file_name(&self.config.missed_file_name)
                    .save_file()
                {
                    log::info!("Saving missed words to: {}", path.display());
                    let _ = self.command_tx.send(TrainerCommand::ExportMissed {
                        entries: self.session.missed().to_vec(),
                        output_path: path,
                    });
                }
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.preferences.toggle_theme() {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("Could not save theme preference: {e}");
                self.theme.flipped()
            }
        };
        apply_theme(ctx, self.theme);
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                ui.add_space(8.0);
                dismissed = ui.button("OK").clicked();
            });
        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.handle_update(update);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("English to Bangla Trainer");
                if dark_mode_switch(ui, self.theme.is_dark()) {
                    self.toggle_theme(ctx);
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.toggle_value(&mut self.show_log, "Log");
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
            if self.show_log {
                ui.separator();
                show_log_panel(ui, &self.logger);
            }
        });

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            action = show_trainer(ui, &self.session);
        });

        if let Some(action) = action {
            self.handle_action(action);
        }

        self.show_notice(ctx);

        // Keep polling while the worker has something in flight
        if self.session.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn apply_theme(ctx: &egui::Context, theme: ThemePreference) {
    ctx.set_theme(if theme.is_dark() {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
}

/// Registers a user-supplied font as a fallback after the defaults, which
/// have no Bengali glyphs.
fn setup_fonts(ctx: &egui::Context, path: &std::path::Path) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Could not read font {}: {e}", path.display());
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "bangla".to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("bangla".to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("Loaded font {}", path.display());
}
