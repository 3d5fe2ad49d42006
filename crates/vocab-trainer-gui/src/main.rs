#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use vocab_trainer::config::TrainerConfig;

mod app;
mod logger;
mod ui_components;
mod views;

use app::{LaunchOptions, SourceMode};
use logger::AppLogger;

#[derive(Parser)]
#[command(name = "vocab-trainer-gui", about = "English to Bangla trainer", version)]
struct Args {
    /// Word list to load at startup
    #[arg(long, conflicts_with = "upload")]
    word_list: Option<PathBuf>,

    /// Start empty and let the user pick a word list
    #[arg(long)]
    upload: bool,

    /// Preferences file (defaults to the per-user data directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// TrueType font with Bengali glyphs
    #[arg(long)]
    font: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logger = AppLogger::new(200);
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger.clone().init(level)?;

    let config = TrainerConfig::default()
        .with_word_list(args.word_list)
        .with_settings_path(args.settings);
    let launch = LaunchOptions {
        source: if args.upload {
            SourceMode::Upload
        } else {
            SourceMode::Fixed(config.word_list_path.clone())
        },
        config,
        font_path: args.font,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_title("English to Bangla Trainer"),
        ..Default::default()
    };

    eframe::run_native(
        "English to Bangla Trainer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::TrainerApp::new(
                cc,
                tokio_handle,
                launch,
                logger,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
