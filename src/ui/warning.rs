use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use super::centered;

pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered(area, 48, 7);

    let content = vec![
        Line::from(message.fg(Color::White)),
        Line::from(""),
        Line::from("enter to continue".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Yellow)
                .title(" Warning ")
                .title_style(Style::default().fg(Color::Yellow).bold())
                .padding(Padding::uniform(1)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
