//! Terminal bowling scorekeeper (default binary).
//!
//! Type rolls (`x`, `/`, `-`, or a pin count; several at once separated by
//! commas) and press Enter. Ctrl-N starts a new game, Esc or Ctrl-C quits.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_bowling::engine::{EntryError, Scorekeeper, SessionConfig};
use tui_bowling::input::{handle_key_event, should_quit, split_entry, EditAction, LineBuffer};
use tui_bowling::logging;
use tui_bowling::term::{FrameBuffer, Prompt, ScorecardView, Status, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        logging::init_file(path)?;
    }

    let mut keeper = Scorekeeper::from_config(&config)?;
    info!(demo = config.demo, "session started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut keeper, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    keeper: &mut Scorekeeper,
    config: &SessionConfig,
) -> Result<()> {
    let view = ScorecardView::default();
    let mut line = LineBuffer::new();
    let mut status: Option<Status> = None;
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = keeper.snapshot();
        let prompt = Prompt {
            entry: line.as_str(),
            status: status.as_ref(),
        };
        view.render_into(&snap, Some(&prompt), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Block until the next event; nothing changes between keys.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                let Some(action) = handle_key_event(key) else {
                    continue;
                };

                match action {
                    EditAction::NewGame => {
                        status = Some(new_game(keeper, config));
                        line.clear();
                    }
                    action => {
                        if let Some(entry) = line.apply(action) {
                            status = submit(keeper, &mut line, &entry);
                        }
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn new_game(keeper: &mut Scorekeeper, config: &SessionConfig) -> Status {
    if !config.demo {
        keeper.start_new_game();
        return Status::Info("New game".to_string());
    }

    match keeper.seed_demo() {
        Ok(()) => Status::Info("New game (demo rolls seeded)".to_string()),
        Err(err) => Status::Error(format!("Demo seeding failed: {err}")),
    }
}

/// Roll a submitted entry. On rejection the line is refilled with the
/// rejected token and everything after it.
fn submit(keeper: &mut Scorekeeper, line: &mut LineBuffer, entry: &str) -> Option<Status> {
    if entry.trim().is_empty() {
        return None;
    }

    match keeper.roll_entry(entry) {
        Ok(_) if keeper.game().is_over() => Some(Status::Info(format!(
            "Game over. Final score {}. Ctrl-N for a new game.",
            keeper.game().total_score()
        ))),
        Ok(_) => None,
        Err(err) => {
            restore_pending(line, entry, &err);
            Some(Status::Error(err.to_string()))
        }
    }
}

fn restore_pending(line: &mut LineBuffer, entry: &str, err: &EntryError) {
    line.clear();
    for (i, token) in split_entry(entry).skip(err.applied).enumerate() {
        if i > 0 && !line.insert(',') {
            break;
        }
        if !token.chars().all(|ch| line.insert(ch)) {
            break;
        }
    }
}
