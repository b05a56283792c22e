mod quiz;
mod result;
mod warning;

use ratatui::{prelude::*, widgets::Block};

use crate::screen::TerminalSurface;
use crate::surface::View;

pub fn render(frame: &mut Frame, surface: &TerminalSurface) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match surface.view() {
        View::Quiz => quiz::render(frame, area, surface),
        View::Result(result) => result::render(frame, area, &result),
    }

    if let Some(message) = surface.warning() {
        warning::render(frame, area, message);
    }
}

/// Center a `width` x `height` box inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

#[cfg(test)]
pub(crate) fn render_to_string(surface: &TerminalSurface, width: u16, height: u16) -> String {
    use ratatui::{Terminal, backend::TestBackend};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(frame, surface)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
