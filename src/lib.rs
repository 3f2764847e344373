//! # capital-quiz
//!
//! A terminal quiz that names a region and asks for its capital.
//!
//! The quiz logic lives in [`Session`], a pure state machine that can be
//! driven without a terminal. [`Quiz`] wraps it in a ratatui front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use capital_quiz::{Quiz, QuizConfig, QuizError, SelectionPolicy, us_states};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = QuizConfig::for_policy(SelectionPolicy::UntilExhausted);
//!     Quiz::new(us_states(), config).run().await
//! }
//! ```

mod app;
mod config;
mod data;
mod fireworks;
pub mod logging;
mod models;
mod schedule;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub use app::{App, FactsView, FeedbackLine, Tone};
pub use config::{ENDLESS_ADVANCE_DELAY, QuizConfig, SelectionPolicy};
pub use data::{LoadError, load_facts_from_json, parse_facts_json, us_states};
pub use models::{
    Advance, FactTable, Feedback, NOT_AVAILABLE, Outcome, RegionFacts, RegionId, Screen,
    SecondaryFacts, SessionEvent, TableError,
};
pub use schedule::{AppMessage, Effect, Scheduler};
pub use session::{Session, normalize};

/// How long the UI waits for a key before checking timers again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load facts: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to set up logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(table: FactTable, config: QuizConfig) -> Self {
        let session = Session::new(Arc::new(table), config);
        Self {
            app: App::new(session),
        }
    }

    /// Load the region table from a JSON facts file instead of the built-in one.
    ///
    /// ```rust,no_run
    /// use capital_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("provinces.json", QuizConfig::default()).expect("Failed to load facts");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let table = load_facts_from_json(path)?;
        Ok(Self::new(table, config))
    }

    /// Take over the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    let (scheduler, mut rx) = Scheduler::channel();

    loop {
        while let Ok(msg) = rx.try_recv() {
            scheduler.dispatch(app.on_message(msg));
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key, &scheduler) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyEvent, scheduler: &Scheduler) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }

    let effect = match app.screen {
        Screen::Welcome => match key.code {
            KeyCode::Enter => app.start_quiz(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => Effect::None,
        },
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Finished => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => Effect::None,
        },
    };

    scheduler.dispatch(effect);
    false
}

fn handle_quiz_input(app: &mut App, key: KeyEvent) -> Effect {
    // Any key dismisses the facts popup.
    if app.is_showing_facts() {
        app.close_facts();
        return Effect::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('f') if ctrl => {
            app.toggle_facts();
            Effect::None
        }
        KeyCode::Tab => app.skip(),
        KeyCode::Enter => app.submit_answer(),
        KeyCode::Backspace => {
            app.input_pop();
            Effect::None
        }
        KeyCode::Char(c) if !ctrl => {
            app.input_push(c);
            Effect::None
        }
        _ => Effect::None,
    }
}
