use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::task::Category;
use crate::tui::app::App;

use super::helpers::{card_block, empty_line, list_row, scroll_offset};

/// Render the Special and High Level cards side by side (stacked when narrow).
/// The quests cursor runs through Special first, then High Level.
pub fn render_quests_view(frame: &mut Frame, app: &App, area: Rect) {
    let direction = if area.width >= 60 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let special_len = app.board.special().pending().count();
    render_card(frame, app, Category::Special, chunks[0], 0);
    render_card(frame, app, Category::HighLevel, chunks[1], special_len);
}

/// `first_row` is the quests-cursor index of this card's first row
fn render_card(frame: &mut Frame, app: &App, category: Category, area: Rect, first_row: usize) {
    let Some(quests) = app.board.quests(category) else {
        return;
    };
    let reward = app.board.rewards().for_category(category);
    let title = format!(" {}  +{} ", category.label(), reward);
    let block = card_block(app, title, app.theme.card_color(category));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let height = inner.height as usize;
    let rows: Vec<_> = quests.pending().collect();

    let mut lines: Vec<Line> = Vec::new();
    if rows.is_empty() {
        let done = quests.completed().count();
        let text = if done == 0 {
            "Nothing here yet.".to_string()
        } else {
            format!("All done. {} completed.", done)
        };
        lines.push(empty_line(app, &text));
    } else {
        let local_cursor = app
            .quests_cursor
            .checked_sub(first_row)
            .filter(|&c| c < rows.len());
        let offset = scroll_offset(local_cursor.unwrap_or(0), height);
        for (i, task) in rows.iter().enumerate().skip(offset).take(height) {
            let selected = local_cursor == Some(i);
            lines.push(list_row(app, "\u{25C7}", &task.name, selected, width));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
