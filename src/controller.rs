//! Quiz flow: question → feedback → next question or result.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::NoSelectionError;
use crate::models::{Question, QuestionBank, QuizResult};
use crate::surface::{OptionStyle, Step, Surface, View};
use crate::timer::TimerHandle;

pub const TITLE: &str = "Python Quiz Challenge";

/// Pause between answer feedback and the next transition.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1200);

/// Mutable progress through one run of the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    pub score: usize,
    pub selected_option: Option<String>,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Options are enabled and waiting for a submit.
    Answering,
    /// Options are locked until `pending` fires.
    Feedback { pending: TimerHandle },
    Result(QuizResult),
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

pub struct QuizController<S> {
    bank: QuestionBank,
    state: QuizState,
    phase: Phase,
    feedback_delay: Duration,
    surface: S,
}

impl<S: Surface> QuizController<S> {
    /// Build the controller and show the first question on `surface`.
    pub fn new(bank: QuestionBank, surface: S) -> Self {
        let mut controller = Self {
            bank,
            state: QuizState::new(),
            phase: Phase::Answering,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            surface,
        };
        controller.surface.set_title(TITLE);
        controller.rebuild_quiz_view();
        controller
    }

    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn current_question(&self) -> &Question {
        &self.bank[self.state.current_index]
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    pub fn load_question(&mut self, index: usize) {
        let Some(question) = self.bank.get(index) else {
            warn!(index, total = self.bank.len(), "question index out of range");
            return;
        };

        self.state.current_index = index;
        self.state.selected_option = None;
        self.surface
            .display(&format!("Q{}. {}", index + 1, question.prompt));
        self.surface.set_options(&question.options);
        debug!(index, "loaded question");
    }

    /// Submit whatever the surface currently has selected.
    pub fn submit(&mut self) -> Result<Option<AnswerOutcome>, NoSelectionError> {
        let selected = self.surface.selection();
        self.submit_answer(selected.as_deref())
    }

    /// Score `selected` against the current question and schedule the next step.
    ///
    /// Returns `Ok(None)` when answers are not being accepted, e.g. during the
    /// feedback pause.
    pub fn submit_answer(
        &mut self,
        selected: Option<&str>,
    ) -> Result<Option<AnswerOutcome>, NoSelectionError> {
        if self.phase != Phase::Answering {
            return Ok(None);
        }

        let Some(selected) = selected.filter(|s| !s.is_empty()) else {
            warn!(index = self.state.current_index, "submit without a selection");
            self.surface.show_warning(&NoSelectionError.to_string());
            return Err(NoSelectionError);
        };

        let question = &self.bank[self.state.current_index];
        self.state.selected_option = Some(selected.to_string());

        self.surface.disable_options();
        self.surface
            .style_option(&question.correct_answer, OptionStyle::Correct);

        let outcome = if question.is_correct(selected) {
            self.state.score += 1;
            AnswerOutcome::Correct
        } else {
            self.surface.style_option(selected, OptionStyle::Incorrect);
            AnswerOutcome::Incorrect
        };
        self.surface.display_score(self.state.score, self.bank.len());

        let step = if self.state.current_index == self.bank.last_index() {
            Step::ShowResult
        } else {
            Step::NextQuestion
        };
        let pending = self.surface.schedule_after(self.feedback_delay, step);
        self.phase = Phase::Feedback { pending };

        info!(
            index = self.state.current_index,
            ?outcome,
            score = self.state.score,
            "answer submitted"
        );
        Ok(Some(outcome))
    }

    /// Run a step scheduled by [`submit_answer`](Self::submit_answer).
    ///
    /// Returns false if the controller was not waiting on a timer.
    pub fn on_timer(&mut self, step: Step) -> bool {
        if !matches!(self.phase, Phase::Feedback { .. }) {
            debug!(?step, phase = ?self.phase, "ignoring stale timer");
            return false;
        }

        let next = self.state.current_index + 1;
        match step {
            Step::NextQuestion if next < self.bank.len() => {
                self.phase = Phase::Answering;
                self.load_question(next);
            }
            Step::NextQuestion | Step::ShowResult => {
                self.show_result();
            }
        }
        true
    }

    pub fn show_result(&mut self) -> QuizResult {
        let result = QuizResult::new(self.state.score, self.bank.len());
        self.phase = Phase::Result(result);
        self.surface.clear_and_rebuild(View::Result(result));
        info!(
            score = result.score,
            total = result.total,
            percentage = result.percentage,
            "quiz completed"
        );
        result
    }

    pub fn restart(&mut self) {
        self.cancel_pending();
        self.state = QuizState::new();
        self.phase = Phase::Answering;
        self.rebuild_quiz_view();
        info!("quiz restarted");
    }

    pub fn exit(&mut self) {
        self.cancel_pending();
        self.phase = Phase::Terminated;
    }

    fn cancel_pending(&mut self) {
        if let Phase::Feedback { pending } = self.phase {
            self.surface.cancel_timer(pending);
        }
    }

    fn rebuild_quiz_view(&mut self) {
        self.surface.clear_and_rebuild(View::Quiz);
        self.surface.display_score(self.state.score, self.bank.len());
        self.load_question(0);
    }
}
