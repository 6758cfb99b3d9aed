use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::{card_block, empty_line, scroll_offset};

/// Render every counter with its count right-aligned
pub fn render_counter_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = card_block(app, " Counters ".to_string(), app.theme.highlight);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let counters = app.board.counters();
    if counters.is_empty() {
        let line = empty_line(app, "No counters yet. Press a to add one.");
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    let width = inner.width as usize;
    let height = inner.height as usize;
    let offset = scroll_offset(app.counter_cursor, height);

    let mut lines: Vec<Line> = Vec::new();
    for (i, counter) in counters.iter().enumerate().skip(offset).take(height) {
        let is_selected = i == app.counter_cursor;
        let bg = if is_selected {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        let count = format!(" {} ", counter.count);
        let count_color = if counter.count < 0 {
            app.theme.red
        } else {
            app.theme.green
        };
        let budget = width.saturating_sub(display_width(&count) + 2);
        let name = truncate_to_width(&counter.name, budget);
        let pad = width.saturating_sub(display_width(&name) + display_width(&count) + 1);

        let name_style = if is_selected {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(name, name_style),
            Span::styled(" ".repeat(pad), Style::default().bg(bg)),
            Span::styled(
                count,
                Style::default()
                    .fg(count_color)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
