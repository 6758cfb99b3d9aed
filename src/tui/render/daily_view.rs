use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Category;
use crate::tui::app::App;

use super::helpers::{card_block, empty_line, list_row, scroll_offset};

/// Render the daily quests card: tasks not yet completed this cycle
pub fn render_daily_view(frame: &mut Frame, app: &App, area: Rect) {
    let daily = app.board.daily();
    let reward = app.board.rewards().daily;
    let title = format!(" Daily Quests  +{} ", reward);
    let block = card_block(app, title, app.theme.card_color(Category::Daily));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let total = daily.all().len();
    let done = daily.entries().filter(|e| e.completed_today).count();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!(" {} of {} done today", done, total),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )),
        Line::from(""),
    ];

    let rows: Vec<_> = daily.pending_today().collect();
    if rows.is_empty() {
        let text = if total == 0 {
            "No daily quests yet. Press a to add one."
        } else {
            "All done for today."
        };
        lines.push(empty_line(app, text));
    } else {
        let height = (inner.height as usize).saturating_sub(lines.len());
        let offset = scroll_offset(app.daily_cursor, height);
        for (i, task) in rows.iter().enumerate().skip(offset).take(height) {
            lines.push(list_row(app, "\u{25CB}", &task.name, i == app.daily_cursor, width));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
