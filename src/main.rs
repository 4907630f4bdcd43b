mod app;
mod config;
mod logging;
mod quiz;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::prompt;
use crate::app::state::{AppState, FocusPanel};
use crate::logging::ResultLogger;
use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::seq::SliceRandom;
use ratatui::prelude::*;
use std::io::{self, Write};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    logging::init_diagnostics()?;

    // Load config
    let cfg = config::load_config()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());
    let mut result_logger = ResultLogger::new(&cfg.logging);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    state.system_message("Welcome to QuizDeck!".to_string());
    state.system_message(
        "Ask your assistant for a question set, paste the reply, press F5.".to_string(),
    );
    state.system_message("Press F2 to view and copy the prompt suffix.".to_string());

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Drain new messages for logging
        let new_msgs: Vec<_> = state.new_messages.drain(..).collect();
        for msg in &new_msgs {
            result_logger.log_message(msg);
        }

        // Process actions
        for action in actions {
            match action {
                Action::LoadQuiz { raw } => match quiz::parse(&raw) {
                    Ok(questions) if questions.is_empty() => {
                        state.load_questions(Vec::new());
                        state.error_message(
                            "Could not find any questions. Please check the format!".to_string(),
                        );
                        state.set_status(
                            "Could not find any questions. Please check the format!".to_string(),
                        );
                    }
                    Ok(mut questions) => {
                        if state.config.behavior.shuffle_options {
                            let mut rng = rand::rng();
                            for question in &mut questions {
                                question.options.shuffle(&mut rng);
                            }
                        }
                        let count = questions.len();
                        state.load_questions(questions);
                        state.success_message(format!("Loaded {} questions.", count));
                        state.set_status(format!("Loaded {} questions", count));
                        state.focus = FocusPanel::Questions;
                    }
                    Err(err) => {
                        tracing::warn!("question set rejected: {err}");
                        state.error_message(format!(
                            "Invalid JSON format. Please check the structure. ({})",
                            err
                        ));
                        state.set_status(
                            "Invalid JSON format. Please check the structure.".to_string(),
                        );
                    }
                },
                Action::GradeQuiz => {
                    state.session.grade();
                    let score = state.session.score();
                    let total = state.session.len();
                    state.success_message(format!("Graded: {}/{} correct.", score, total));
                    state.set_status(format!("Score {}/{}", score, total));
                    result_logger.log_report(&state.session);
                }
                Action::CopyPrompt => {
                    state.pending_clipboard =
                        Some(prompt::osc52_sequence(prompt::PROMPT_SUFFIX));
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Push the prompt suffix to the clipboard via OSC 52
        if let Some(seq) = state.pending_clipboard.take() {
            let mut stdout = io::stdout();
            if stdout
                .write_all(seq.as_bytes())
                .and_then(|_| stdout.flush())
                .is_ok()
            {
                state.set_status("Copied!".to_string());
            } else {
                state.set_status("Failed to copy!".to_string());
            }
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
