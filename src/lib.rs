//! # python-quiz
//!
//! A terminal multiple-choice quiz: one question at a time, instant
//! correct/incorrect feedback, and a scored result screen at the end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use python_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Run the built-in Python question bank
//!     Quiz::builtin().run()?;
//!
//!     // Or load questions from a JSON file
//!     Quiz::from_json("questions.json")?.run()?;
//!
//!     Ok(())
//! }
//! ```

mod controller;
mod data;
mod error;
mod models;
mod screen;
mod surface;
pub mod terminal;
mod timer;
mod ui;

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

pub use controller::{
    AnswerOutcome, DEFAULT_FEEDBACK_DELAY, Phase, QuizController, QuizState, TITLE,
};
pub use data::{LoadError, builtin_bank, builtin_questions, load_questions_from_json};
pub use error::{NoSelectionError, QuizError};
pub use models::{BankError, NUM_OPTIONS, Question, QuestionBank, QuizResult, Remark, percentage};
pub use screen::{OptionSlot, TerminalSurface};
pub use surface::{OptionStyle, Step, Surface, View};
pub use timer::{OneShotTimer, TimerHandle};

const TICK: Duration = Duration::from_millis(50);

/// A quiz that can be run in the terminal.
pub struct Quiz {
    bank: QuestionBank,
    feedback_delay: Duration,
}

impl Quiz {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }

    /// The six built-in Python questions.
    pub fn builtin() -> Self {
        Self::new(builtin_bank())
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use python_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let bank = load_questions_from_json(path)?;
        Ok(Self::new(bank))
    }

    /// How long answer feedback stays on screen before moving on.
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Build a controller wired to a fresh terminal surface.
    pub fn controller(&self) -> QuizController<TerminalSurface> {
        QuizController::new(self.bank.clone(), TerminalSurface::new())
            .with_feedback_delay(self.feedback_delay)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(self) -> Result<(), QuizError> {
        let mut controller = self.controller();
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut controller);
        terminal::restore()?;
        result
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    controller: &mut QuizController<TerminalSurface>,
) -> Result<(), QuizError> {
    while !controller.is_terminated() {
        terminal.draw(|frame| ui::render(frame, controller.surface()))?;

        let timeout = poll_timeout(controller.surface().next_deadline(), Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        controller.exit();
                    } else {
                        handle_input(controller, key.code);
                    }
                }
            }
        }

        if let Some(step) = controller.surface_mut().take_due(Instant::now()) {
            controller.on_timer(step);
        }
    }

    Ok(())
}

/// Wait until the pending timer is due, but never longer than one tick.
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline
        .map(|deadline| deadline.saturating_duration_since(now))
        .map_or(TICK, |remaining| remaining.min(TICK))
}

fn handle_input(controller: &mut QuizController<TerminalSurface>, key: KeyCode) {
    if controller.surface().warning().is_some() {
        handle_warning_input(controller, key);
        return;
    }

    match controller.surface().view() {
        View::Quiz => handle_quiz_input(controller, key),
        View::Result(_) => handle_result_input(controller, key),
    }
}

fn handle_warning_input(controller: &mut QuizController<TerminalSurface>, key: KeyCode) {
    if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        controller.surface_mut().dismiss_warning();
    }
}

fn handle_quiz_input(controller: &mut QuizController<TerminalSurface>, key: KeyCode) {
    let surface = controller.surface_mut();
    match key {
        KeyCode::Up | KeyCode::Char('k') => surface.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => surface.cursor_down(),
        KeyCode::Char(' ') => surface.select_at_cursor(),
        KeyCode::Char(c @ '1'..='4') => surface.select(c as usize - '1' as usize),
        KeyCode::Char(c @ 'a'..='d') => surface.select(c as usize - 'a' as usize),
        KeyCode::Enter => {
            // An empty selection is already surfaced as a warning.
            controller.submit().ok();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => controller.exit(),
        _ => {}
    }
}

fn handle_result_input(controller: &mut QuizController<TerminalSurface>, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => controller.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => controller.exit(),
        _ => {}
    }
}
