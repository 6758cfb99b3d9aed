use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the map screen: a heading and the running score, centered
pub fn render_map_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let top_pad = area.height.saturating_sub(3) / 2;

    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        "Map",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Score: {}", app.board.score()),
        Style::default().fg(app.theme.yellow).bg(bg),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Category;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn map_shows_score() {
        let mut app = empty_app();
        let id = app.board.on_add_task(Category::HighLevel, "Marathon").unwrap();
        app.board.on_complete_task(Category::HighLevel, id);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_map_view(frame, &app, area);
        });
        assert!(output.contains("Map"));
        assert!(output.contains("Score: 10"));
    }
}
