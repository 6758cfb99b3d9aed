use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::config::ResetPolicy;
use crate::model::task::Category;
use crate::tui::app::App;

use super::helpers::card_block;

/// Render a read-only summary of the effective settings
pub fn render_personalize_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = card_block(app, " Personalize ".to_string(), app.theme.dim);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text).bg(bg);

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("   {:<18}", label), key_style),
            Span::styled(value, value_style),
        ])
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Rewards", header_style)));
    for category in Category::ALL {
        lines.push(row(
            category.label(),
            format!("+{}", app.board.rewards().for_category(category)),
        ));
    }
    lines.push(Line::from(""));

    let daily = &app.config.daily;
    let log = app.board.completed_today();
    lines.push(Line::from(Span::styled(" Daily reset", header_style)));
    let policy = match log.policy() {
        ResetPolicy::Rollover => format!("rollover at {:02}:00", daily.day_start_hour.min(23)),
        ResetPolicy::Session => "once per session".to_string(),
    };
    lines.push(row("Policy", policy));
    lines.push(row("Current cycle", log.cycle().to_string()));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Interface", header_style)));
    let hints = if app.config.ui.show_key_hints { "on" } else { "off" };
    lines.push(row("Key hints", hints.to_string()));
    if app.config.ui.colors.is_empty() {
        lines.push(row("Colors", "default theme".to_string()));
    } else {
        for (key, value) in &app.config.ui.colors {
            lines.push(row(key.as_str(), value.clone()));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
