//! The presentation contract the controller drives.

use std::time::Duration;

use crate::models::QuizResult;
use crate::timer::TimerHandle;

/// Coloring applied to an option once an answer has been submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionStyle {
    #[default]
    Normal,
    Correct,
    Incorrect,
}

/// Transition requested by a fired timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    NextQuestion,
    ShowResult,
}

/// Layout the surface is rebuilt into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Quiz,
    Result(QuizResult),
}

pub trait Surface {
    fn set_title(&mut self, title: &str);

    /// Show the question label.
    fn display(&mut self, text: &str);

    fn display_score(&mut self, score: usize, total: usize);

    /// Replace the options, enabling them with normal styling and no selection.
    fn set_options(&mut self, options: &[String]);

    fn selection(&self) -> Option<String>;

    fn disable_options(&mut self);

    fn style_option(&mut self, option: &str, style: OptionStyle);

    /// Deliver `step` back to the controller after `delay`.
    fn schedule_after(&mut self, delay: Duration, step: Step) -> TimerHandle;

    fn cancel_timer(&mut self, handle: TimerHandle);

    fn show_warning(&mut self, message: &str);

    fn clear_and_rebuild(&mut self, view: View);
}
