use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Total display width of a run of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// Fixed-size rect centered in `area`, clipped to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Bordered card with a bold title in the card's accent color
pub(super) fn card_block<'a>(app: &App, title: String, accent: Color) -> Block<'a> {
    let bg = app.theme.background;
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).bg(bg))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg))
}

/// One selectable list row: `marker name`, padded so the selection
/// background spans the full width
pub(super) fn list_row<'a>(
    app: &App,
    marker: &str,
    name: &str,
    is_selected: bool,
    width: usize,
) -> Line<'a> {
    let bg = if is_selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let name_style = if is_selected {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let lead = format!(" {} ", marker);
    let budget = width.saturating_sub(display_width(&lead) + 1);
    let mut spans = vec![
        Span::styled(lead, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(truncate_to_width(name, budget), name_style),
    ];
    let used = spans_width(&spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    Line::from(spans)
}

/// Dim placeholder line for an empty list
pub(super) fn empty_line<'a>(app: &App, text: &str) -> Line<'a> {
    Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}

/// First visible row so that `cursor` stays inside a window of `height` rows
pub(super) fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor.saturating_sub(height - 1)
}
