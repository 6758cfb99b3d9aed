pub mod counter_view;
pub mod daily_view;
pub mod dialog;
pub mod help_overlay;
pub mod map_view;
pub mod personalize_view;
pub mod quests_view;
pub mod status_row;
pub mod tab_bar;

mod helpers;
#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::tab::Tab;

use super::app::{App, Mode};

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.tab() {
        Tab::Daily => daily_view::render_daily_view(frame, app, chunks[1]),
        Tab::Quests => quests_view::render_quests_view(frame, app, chunks[1]),
        Tab::Map => map_view::render_map_view(frame, app, chunks[1]),
        Tab::Counter => counter_view::render_counter_view(frame, app, chunks[1]),
        Tab::Personalize => personalize_view::render_personalize_view(frame, app, chunks[1]),
    }

    // Popups (rendered on top of content)
    match app.mode {
        Mode::Input => {
            if let Some(input) = &app.input {
                dialog::render_add_dialog(frame, app, input, chunks[1]);
            }
        }
        Mode::Picker => {
            if let Some(picker) = &app.picker {
                dialog::render_picker(frame, app, picker, chunks[1]);
            }
        }
        Mode::Navigate => {}
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
