//! Terminal view model behind the [`Surface`] contract.
//!
//! The controller writes into it, key handlers move the cursor and selection,
//! and `ui::render` draws whatever it holds.

use std::time::{Duration, Instant};

use crate::models::NUM_OPTIONS;
use crate::surface::{OptionStyle, Step, Surface, View};
use crate::timer::{OneShotTimer, TimerHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSlot {
    pub text: String,
    pub style: OptionStyle,
}

#[derive(Debug)]
pub struct TerminalSurface {
    title: String,
    question: String,
    score: usize,
    total: usize,
    options: Vec<OptionSlot>,
    options_enabled: bool,
    cursor: usize,
    selected: Option<usize>,
    warning: Option<String>,
    view: View,
    timer: OneShotTimer<Step>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            question: String::new(),
            score: 0,
            total: 0,
            options: Vec::with_capacity(NUM_OPTIONS),
            options_enabled: false,
            cursor: 0,
            selected: None,
            warning: None,
            view: View::Quiz,
            timer: OneShotTimer::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn score(&self) -> (usize, usize) {
        (self.score, self.total)
    }

    pub fn options(&self) -> &[OptionSlot] {
        &self.options
    }

    pub fn options_enabled(&self) -> bool {
        self.options_enabled
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn cursor_down(&mut self) {
        if self.options_enabled && !self.options.is_empty() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if self.options_enabled && !self.options.is_empty() {
            let len = self.options.len();
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn select_at_cursor(&mut self) {
        self.select(self.cursor);
    }

    /// Choose option `index`; ignored while options are locked.
    pub fn select(&mut self, index: usize) {
        if self.options_enabled && index < self.options.len() {
            self.cursor = index;
            self.selected = Some(index);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    pub fn take_due(&mut self, now: Instant) -> Option<Step> {
        self.timer.take_due(now)
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn display(&mut self, text: &str) {
        self.question = text.to_string();
    }

    fn display_score(&mut self, score: usize, total: usize) {
        self.score = score;
        self.total = total;
    }

    fn set_options(&mut self, options: &[String]) {
        self.options = options
            .iter()
            .map(|text| OptionSlot {
                text: text.clone(),
                style: OptionStyle::Normal,
            })
            .collect();
        self.options_enabled = true;
        self.cursor = 0;
        self.selected = None;
    }

    fn selection(&self) -> Option<String> {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|slot| slot.text.clone())
    }

    fn disable_options(&mut self) {
        self.options_enabled = false;
    }

    fn style_option(&mut self, option: &str, style: OptionStyle) {
        if let Some(slot) = self.options.iter_mut().find(|slot| slot.text == option) {
            slot.style = style;
        }
    }

    fn schedule_after(&mut self, delay: Duration, step: Step) -> TimerHandle {
        self.timer.schedule_after(delay, step)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timer.cancel(handle);
    }

    fn show_warning(&mut self, message: &str) {
        self.warning = Some(message.to_string());
    }

    fn clear_and_rebuild(&mut self, view: View) {
        self.question.clear();
        self.options.clear();
        self.options_enabled = false;
        self.cursor = 0;
        self.selected = None;
        self.warning = None;
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_with_options() -> TerminalSurface {
        let mut surface = TerminalSurface::new();
        let options: Vec<String> = ["6", "8", "9", "5"].iter().map(|s| s.to_string()).collect();
        surface.set_options(&options);
        surface
    }

    #[test]
    fn test_cursor_wraps() {
        let mut surface = surface_with_options();
        surface.cursor_up();
        assert_eq!(surface.cursor(), 3);
        surface.cursor_down();
        assert_eq!(surface.cursor(), 0);
    }

    #[test]
    fn test_cursor_does_not_select() {
        let mut surface = surface_with_options();
        surface.cursor_down();
        assert_eq!(surface.selection(), None);
        surface.select_at_cursor();
        assert_eq!(surface.selection().as_deref(), Some("8"));
    }

    #[test]
    fn test_selection_locked_when_disabled() {
        let mut surface = surface_with_options();
        surface.select(2);
        surface.disable_options();
        surface.select(0);
        surface.cursor_down();
        assert_eq!(surface.selection().as_deref(), Some("9"));
        assert_eq!(surface.cursor(), 2);
    }

    #[test]
    fn test_set_options_resets_styles_and_selection() {
        let mut surface = surface_with_options();
        surface.select(1);
        surface.disable_options();
        surface.style_option("8", OptionStyle::Correct);
        assert_eq!(surface.options()[1].style, OptionStyle::Correct);

        let options: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        surface.set_options(&options);
        assert!(surface.options_enabled());
        assert_eq!(surface.selection(), None);
        assert!(surface.options().iter().all(|o| o.style == OptionStyle::Normal));
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut surface = surface_with_options();
        surface.select(NUM_OPTIONS);
        assert_eq!(surface.selected_index(), None);
    }

    #[test]
    fn test_rebuild_clears_warning() {
        let mut surface = surface_with_options();
        surface.show_warning("careful");
        assert_eq!(surface.warning(), Some("careful"));
        surface.clear_and_rebuild(View::Quiz);
        assert_eq!(surface.warning(), None);
        assert!(surface.options().is_empty());
    }
}
