use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::tab::Tab;
use crate::tui::app::App;

use super::helpers::centered_rect_fixed;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    let tab = app.tab();
    lines.push(Line::from(Span::styled(
        format!(" {}", tab.title()),
        header_style,
    )));
    let bindings: &[(&str, &str)] = match tab {
        Tab::Daily => &[
            (" \u{2191}\u{2193}/jk", "Move cursor"),
            (" Space/Enter", "Complete quest"),
            (" a", "Add daily quest"),
            (" d", "Delete a daily quest"),
        ],
        Tab::Quests => &[
            (" \u{2191}\u{2193}/jk", "Move cursor"),
            (" Space/Enter", "Complete quest"),
            (" a", "Add special quest"),
            (" A", "Add high level quest"),
            (" x", "Delete quest under cursor"),
        ],
        Tab::Counter => &[
            (" \u{2191}\u{2193}/jk", "Move cursor"),
            (" +/l", "Increment"),
            (" -/h", "Decrement"),
            (" a", "Add counter"),
            (" d", "Delete a counter"),
        ],
        Tab::Map => &[(" ", "Your score so far")],
        Tab::Personalize => &[(" ", "Edit the config file to change settings")],
    };
    for (key, desc) in bindings {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " 1-5", "Switch tab", key_style, desc_style);
    add_binding(&mut lines, " Tab/S-Tab", "Next/previous tab", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let overlay_area = centered_rect_fixed(44, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &str,
    desc: &str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", key), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}
