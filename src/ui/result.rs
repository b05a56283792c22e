use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{QuizResult, Remark};

use super::centered;

pub fn render(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let remark_color = get_remark_color(result.remark);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Completed!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("You scored {} out of {}", result.score, result.total),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            format!("Percentage: {}%", format_percentage(result.percentage)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            result.remark.message(),
            Style::default().fg(remark_color).italic(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Green).bold()),
            Span::styled(" play again  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Red).bold()),
            Span::styled(" exit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, centered(area, 50, 11));
}

fn get_remark_color(remark: Remark) -> Color {
    match remark {
        Remark::Excellent => Color::Green,
        Remark::Good => Color::Yellow,
        Remark::KeepPracticing => Color::Red,
    }
}

/// Whole percentages keep one decimal (`50.0`), others print as rounded.
fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{:.1}", percentage)
    } else {
        format!("{}", percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::TerminalSurface;
    use crate::surface::{Surface, View};
    use crate::ui::render_to_string;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50.0");
        assert_eq!(format_percentage(100.0), "100.0");
        assert_eq!(format_percentage(83.33), "83.33");
        assert_eq!(format_percentage(16.67), "16.67");
    }

    #[test]
    fn test_renders_summary() {
        let mut surface = TerminalSurface::new();
        surface.clear_and_rebuild(View::Result(QuizResult::new(3, 6)));
        let text = render_to_string(&surface, 80, 24);

        assert!(text.contains("Quiz Completed!"));
        assert!(text.contains("You scored 3 out of 6"));
        assert!(text.contains("Percentage: 50.0%"));
        assert!(text.contains("Good job! Keep improving!"));
        assert!(text.contains("play again"));
    }
}
