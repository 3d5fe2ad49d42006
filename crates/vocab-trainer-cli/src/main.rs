use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vocab_trainer::config::{MISSED_FILE_NAME, TrainerConfig};
use vocab_trainer::{
    FetchSource, LoadFailure, PreferenceStore, SpreadsheetSource, TrainerSession, UploadSource,
};

mod quiz;

#[derive(Parser)]
#[command(name = "vtrain", about = "English/Bangla vocabulary trainer", version)]
struct Cli {
    /// Preferences file (defaults to the per-user data directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quiz yourself on random words
    Quiz {
        /// Word list read from a fixed location (columns: English, Bangla)
        #[arg(short, long, conflicts_with = "file")]
        word_list: Option<PathBuf>,

        /// Word list supplied by you (.xlsx or .csv)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Where to write missed words
        #[arg(short, long, default_value = MISSED_FILE_NAME)]
        output: PathBuf,
    },

    /// Merge new words into a word list, removing merged rows from the
    /// additions file
    Merge {
        /// Word list to merge into
        #[arg(short, long)]
        base: PathBuf,

        /// File holding the words to add
        #[arg(short, long)]
        additions: PathBuf,
    },

    /// Show or toggle the display theme
    Theme {
        #[arg(default_value = "show", value_enum)]
        action: ThemeAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = TrainerConfig::default().with_settings_path(cli.settings);

    match cli.command {
        Commands::Quiz {
            word_list,
            file,
            output,
        } => {
            let source: Box<dyn SpreadsheetSource> = match file {
                Some(path) => Box::new(UploadSource::from_picked_file(path)),
                None => {
                    let config = config.with_word_list(word_list);
                    Box::new(FetchSource::new(config.word_list_path))
                }
            };

            let mut session = TrainerSession::new(source.kind());
            match vocab_trainer::load_word_list(source).await {
                Ok(words) => session.replace_words(words),
                Err(e) => session.fail_load(LoadFailure {
                    kind: e.load_kind(),
                    message: e.to_string(),
                }),
            }

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            quiz::run(&mut session, stdin.lock(), &mut stdout, &output).await?;
        }

        Commands::Merge { base, additions } => {
            let outcome = vocab_trainer::merge_files(&base, &additions).await?;
            println!(
                "Added {} words to {}, {} left in {}",
                outcome.added,
                base.display(),
                outcome.remaining_count(),
                additions.display()
            );
        }

        Commands::Theme { action } => {
            let mut store = PreferenceStore::open(&config.settings_path)?;
            let theme = match action {
                ThemeAction::Show => store.theme(),
                ThemeAction::Toggle => store.toggle_theme()?,
            };
            println!("Theme: {}", theme.as_str());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_output_defaults_to_missed_file_name() {
        let cli = Cli::try_parse_from(["vtrain", "quiz"]).unwrap();
        match cli.command {
            Commands::Quiz { output, .. } => {
                assert_eq!(output, PathBuf::from(TrainerConfig::default().missed_file_name));
            }
            _ => panic!("expected quiz command"),
        }
    }

    #[test]
    fn test_quiz_rejects_both_sources() {
        let result = Cli::try_parse_from(["vtrain", "quiz", "-w", "a.xlsx", "-f", "b.xlsx"]);
        assert!(result.is_err());
    }
}
