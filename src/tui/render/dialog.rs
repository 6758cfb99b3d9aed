use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, InputState, PickerState, PickerTarget};
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::{centered_rect_fixed, empty_line, list_row, scroll_offset};

const DIALOG_W: u16 = 48;

/// Render the add dialog: a label and a one-line text field with a cursor
pub fn render_add_dialog(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    let popup_w = DIALOG_W.min(area.width.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, 6, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let inner_w = popup_w.saturating_sub(2) as usize;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default().fg(app.theme.highlight).bg(bg);

    // Long input scrolls so the text before the cursor stays visible
    let (before, after) = input.buffer.split_at(input.cursor.min(input.buffer.len()));
    let field_w = inner_w.saturating_sub(4);
    let before = tail_to_width(before, field_w.saturating_sub(1));
    let after = truncate_to_width(after, field_w.saturating_sub(display_width(&before) + 1));

    let lines = vec![
        Line::from(Span::styled(format!(" {}", input.target.label()), label_style)),
        Line::from(vec![
            Span::styled(" > ", cursor_style),
            Span::styled(before, text_style),
            Span::styled("\u{258C}", cursor_style), // ▌ cursor
            Span::styled(after, text_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Enter add  Esc cancel", label_style)),
    ];

    let block = popup_block(app, input.target.title());
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

/// Render the delete picker listing every entry of its target list
pub fn render_picker(frame: &mut Frame, app: &App, picker: &PickerState, area: Rect) {
    let names: Vec<&str> = match picker.target {
        PickerTarget::DailyTasks => app
            .board
            .daily()
            .all()
            .iter()
            .map(|t| t.name.as_str())
            .collect(),
        PickerTarget::Counters => app
            .board
            .counters()
            .iter()
            .map(|c| c.name.as_str())
            .collect(),
    };

    let popup_w = DIALOG_W.min(area.width.saturating_sub(2));
    let max_rows = area.height.saturating_sub(4).max(1) as usize;
    let rows = names.len().clamp(1, max_rows);
    let popup_h = (rows as u16) + 2;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let inner_w = popup_w.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    if names.is_empty() {
        lines.push(empty_line(app, picker.target.empty_text()));
    } else {
        let offset = scroll_offset(picker.cursor, rows);
        for (i, name) in names.iter().enumerate().skip(offset).take(rows) {
            let is_selected = i == picker.cursor;
            let marker = if is_selected { "\u{25B8}" } else { " " };
            lines.push(list_row(app, marker, name, is_selected, inner_w));
        }
    }

    let block = popup_block(app, picker.target.title());
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn popup_block<'a>(app: &App, title: &str) -> Block<'a> {
    let bg = app.theme.background;
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg))
}

/// Longest suffix of `s` that fits in `max_cells`
fn tail_to_width(s: &str, max_cells: usize) -> String {
    use unicode_segmentation::UnicodeSegmentation;

    let mut used = 0;
    let mut start = s.len();
    for (idx, g) in s.grapheme_indices(true).rev() {
        let w = display_width(g);
        if used + w > max_cells {
            break;
        }
        used += w;
        start = idx;
    }
    s[start..].to_string()
}
