use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use vocab_trainer::{Direction, LoadState, TrainerError, TrainerSession};

const HELP: &str = "\
Commands:
  e  show an English word
  b  show a Bangla word
  t  show the translation
  m  mark the current word as missed
  d  download missed words
  h  this help
  q  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Draw(Direction),
    Reveal,
    MarkMissed,
    Export,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Option<Action> {
    match line.trim().to_ascii_lowercase().as_str() {
        "e" | "english" => Some(Action::Draw(Direction::Forward)),
        "b" | "bangla" => Some(Action::Draw(Direction::Reverse)),
        "t" | "translate" => Some(Action::Reveal),
        "m" | "miss" => Some(Action::MarkMissed),
        "d" | "download" => Some(Action::Export),
        "h" | "help" | "?" => Some(Action::Help),
        "q" | "quit" | "exit" => Some(Action::Quit),
        _ => None,
    }
}

fn render(session: &TrainerSession, out: &mut impl Write) -> std::io::Result<()> {
    match session.current() {
        Some(selection) => {
            writeln!(out, "> {}", selection.shown)?;
            if let Some(translation) = session.revealed_translation() {
                writeln!(out, "  {translation}")?;
            }
        }
        None => writeln!(out, "> Choose e or b to show a word")?,
    }
    Ok(())
}

/// Runs the interactive loop until `q` or end of input.
pub async fn run<R: BufRead, W: Write>(
    session: &mut TrainerSession,
    input: R,
    out: &mut W,
    export_path: &Path,
) -> Result<()> {
    match session.load_state() {
        LoadState::Ready => writeln!(out, "Loaded {} words.", session.words().len())?,
        LoadState::Failed(failure) if session.source_kind().notifies_on_empty() => {
            writeln!(out, "Could not load file: {}", failure.message)?
        }
        _ => {}
    }
    writeln!(out, "{HELP}")?;
    render(session, out)?;

    for line in input.lines() {
        let line = line?;
        let Some(action) = parse_action(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "Unknown command {:?}, h for help", line.trim())?;
            }
            continue;
        };

        match action {
            Action::Draw(direction) => {
                if session.source_kind().notifies_on_empty() {
                    if let Err(TrainerError::EmptyList) = session.try_draw(direction) {
                        writeln!(out, "Please upload a valid word list first.")?;
                    }
                } else {
                    session.draw(direction);
                }
            }
            Action::Reveal => session.reveal(),
            Action::MarkMissed => {
                session.mark_missed();
            }
            Action::Export => {
                if session.missed().is_empty() {
                    writeln!(out, "No missed words yet.")?;
                } else {
                    vocab_trainer::export_missed(session.missed(), export_path).await?;
                    writeln!(
                        out,
                        "Saved {} missed words → {}",
                        session.missed().len(),
                        export_path.display()
                    )?;
                }
                continue;
            }
            Action::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Action::Quit => break,
        }

        render(session, out)?;
    }

    if !session.missed().is_empty() {
        writeln!(
            out,
            "{} missed words this session; use d before quitting to keep them.",
            session.missed().len()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vocab_trainer::{
        LoadErrorKind, LoadFailure, SheetFormat, SourceKind, WordList, WordPair, decode_rows,
    };

    fn single_word() -> WordList {
        [WordPair::new("cat", "বিড়াল").unwrap()].into_iter().collect()
    }

    async fn run_script(session: &mut TrainerSession, script: &str, export: &Path) -> String {
        let mut out = Vec::new();
        run(session, Cursor::new(script.to_string()), &mut out, export)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_actions() {
        assert_eq!(parse_action(" E "), Some(Action::Draw(Direction::Forward)));
        assert_eq!(parse_action("bangla"), Some(Action::Draw(Direction::Reverse)));
        assert_eq!(parse_action("t"), Some(Action::Reveal));
        assert_eq!(parse_action("nonsense"), None);
    }

    #[tokio::test]
    async fn draw_reveal_and_miss() {
        let dir = tempfile::TempDir::new().unwrap();
        let export = dir.path().join("missed.xlsx");
        let mut session = TrainerSession::with_words(SourceKind::Fixed, single_word());

        let output = run_script(&mut session, "e\nt\nm\nd\nq\n", &export).await;

        assert!(output.contains("> cat"));
        assert!(output.contains("  বিড়াল"));
        assert!(output.contains("Saved 1 missed words"));
        assert_eq!(session.missed().len(), 1);
        assert!(session.current().is_none());

        let rows = decode_rows(SheetFormat::Xlsx, &std::fs::read(&export).unwrap()).unwrap();
        assert_eq!(rows[1], ["cat", "বিড়াল"]);
    }

    #[tokio::test]
    async fn reverse_draw_shows_bangla() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut session = TrainerSession::with_words(SourceKind::Fixed, single_word());

        let output = run_script(&mut session, "b\nt\n", &dir.path().join("m.xlsx")).await;
        assert!(output.contains("> বিড়াল"));
        assert!(output.contains("  cat"));
    }

    #[tokio::test]
    async fn upload_notice_on_empty_list() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut session = TrainerSession::new(SourceKind::Upload);
        session.fail_load(LoadFailure {
            kind: LoadErrorKind::Parse,
            message: "bad bytes".into(),
        });

        let output = run_script(&mut session, "e\n", &dir.path().join("m.xlsx")).await;
        assert!(output.contains("Could not load file: bad bytes"));
        assert!(output.contains("Please upload a valid word list first."));
    }

    #[tokio::test]
    async fn fixed_source_stays_silent_when_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut session = TrainerSession::new(SourceKind::Fixed);
        session.fail_load(LoadFailure {
            kind: LoadErrorKind::Fetch,
            message: "missing".into(),
        });

        let output = run_script(&mut session, "e\nm\nd\n", &dir.path().join("m.xlsx")).await;
        assert!(!output.contains("missing"));
        assert!(!output.contains("upload"));
        assert!(output.contains("No missed words yet."));
    }
}
