use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::screen::{OptionSlot, TerminalSurface};
use crate::surface::OptionStyle;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], surface);
    render_question_text(frame, chunks[1], surface.question());
    render_options(frame, chunks[2], surface);
    render_controls(frame, chunks[3], surface.options_enabled());
}

fn render_header(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let (score, total) = surface.score();
    let score_text = format!("Score: {}/{}", score, total);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Color::Blue);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, score_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(score_text.len() as u16),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(surface.title()).fg(Color::Cyan).bold(),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(score_text)
            .alignment(Alignment::Right)
            .fg(Color::White)
            .bold(),
        score_area,
    );
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold()
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(widget, area);
}

fn option_style(slot: &OptionSlot, is_cursor: bool, enabled: bool) -> Style {
    match slot.style {
        OptionStyle::Correct => Style::default().fg(Color::White).bg(Color::Green).bold(),
        OptionStyle::Incorrect => Style::default().fg(Color::White).bg(Color::Red).bold(),
        OptionStyle::Normal if !enabled => Style::default().fg(Color::DarkGray),
        OptionStyle::Normal if is_cursor => Style::default().fg(Color::Cyan).bold(),
        OptionStyle::Normal => Style::default().fg(Color::Blue),
    }
}

fn render_options(frame: &mut Frame, area: Rect, surface: &TerminalSurface) {
    let enabled = surface.options_enabled();
    let mut lines: Vec<Line> = Vec::with_capacity(surface.options().len() * 2);

    for (index, slot) in surface.options().iter().enumerate() {
        let is_cursor = enabled && index == surface.cursor();
        let style = option_style(slot, is_cursor, enabled);
        let cursor = if is_cursor { ">" } else { " " };
        let radio = if surface.selected_index() == Some(index) {
            "(•)"
        } else {
            "( )"
        };

        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", cursor)),
            Span::styled(
                format!(" {} {}. {} ", radio, OPTION_LABELS[index], slot.text),
                style,
            ),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, enabled: bool) {
    let hint = if enabled {
        "j/k navigate  ·  space select  ·  enter next  ·  q quit"
    } else {
        "checking answer...  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
