use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::tab::Tab;
use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

use super::helpers::spans_width;

/// Render the status row (bottom of screen): message or hints on the left,
/// score on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let score = format!("Score: {} ", app.board.score());
    let score_span = Span::styled(
        score,
        Style::default()
            .fg(app.theme.yellow)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
    let left_budget = width.saturating_sub(spans_width(std::slice::from_ref(&score_span)) + 1);

    let mut spans: Vec<Span> = Vec::new();
    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", truncate_to_width(message, left_budget.saturating_sub(1))),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    } else if app.config.ui.show_key_hints {
        let hint = key_hint(app);
        spans.push(Span::styled(
            format!(" {}", truncate_to_width(hint, left_budget.saturating_sub(1))),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let used = spans_width(&spans) + spans_width(std::slice::from_ref(&score_span));
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    spans.push(score_span);

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hint(app: &App) -> &'static str {
    match app.mode {
        Mode::Input => "Enter add  Esc cancel",
        Mode::Picker => "j/k select  Enter delete  Esc close",
        Mode::Navigate => match app.tab() {
            Tab::Daily => "Space done  a add  d delete  ? help",
            Tab::Quests => "Space done  a special  A high level  x delete  ? help",
            Tab::Counter => "+/- count  a add  d delete  ? help",
            Tab::Map | Tab::Personalize => "1-5 tabs  ? help  q quit",
        },
    }
}
