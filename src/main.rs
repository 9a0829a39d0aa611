//! Terminal match-3 runner (default binary).
//!
//! Turn-based: the loop blocks on the next terminal event, so nothing is
//! redrawn until the player types, resizes, or quits.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_match3::core::{Session, SessionConfig};
use tui_match3::input::{format_label, handle_key_event, MovePrompt, PromptEvent, PromptKey, PromptStage};
use tui_match3::logging;
use tui_match3::status::move_summary;
use tui_match3::term::{FrameBuffer, GameView, HudView, StatusKind, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = SessionConfig::from_env();
    // Fail before touching the terminal so the error stays readable.
    let session = Session::from_config(&config).context("start session")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Message line under the prompt
struct Status {
    text: String,
    kind: StatusKind,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &SessionConfig, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut prompt = MovePrompt::new();
    let mut status: Option<Status> = Some(Status::info("Type a cell like B3, then Enter. Ctrl+C quits."));
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let selected = match prompt.stage() {
            PromptStage::Second(first) => Some(first),
            PromptStage::First => None,
        };
        let hud = HudView {
            question: prompt.question(),
            typed: prompt.text(),
            selected,
            status: status.as_ref().map(|s| (s.text.as_str(), s.kind)),
        };
        view.render_into(&session.snapshot(), &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        let Some(action) = handle_key_event(key) else {
            continue;
        };

        match action {
            PromptKey::Quit => {
                info!(score = session.score(), moves = session.moves(), "quit");
                return Ok(());
            }
            PromptKey::Restart => {
                info!(score = session.score(), moves = session.moves(), "restart");
                session = Session::from_config(config).context("restart session")?;
                prompt.reset();
                status = Some(Status::info("New board."));
                continue;
            }
            _ => {}
        }

        match prompt.handle(action) {
            PromptEvent::Pending => {
                if action == PromptKey::Submit {
                    status = None;
                }
            }
            PromptEvent::Invalid { message, reason } => {
                debug!(%reason, "label rejected");
                status = Some(Status::error(message));
            }
            PromptEvent::Move(a, b) => match session.attempt_move(a, b) {
                Ok(report) => {
                    status = Some(Status::info(move_summary(a, b, &report)));
                }
                Err(err) => {
                    debug!(%err, from = %format_label(a), to = %format_label(b), "move rejected");
                    status = Some(Status::error(err.to_string()));
                }
            },
        }
    }
}
