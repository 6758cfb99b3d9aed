use chrono::{NaiveDate, NaiveDateTime};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::GamifyConfig;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Fixed clock used by render tests
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, 4)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

/// An app with default config and an empty board.
pub fn empty_app() -> App {
    App::new(GamifyConfig::default(), test_now())
}

/// An app with a couple of entries in every list.
pub fn sample_app() -> App {
    use crate::model::task::Category;

    let mut app = empty_app();
    let board = &mut app.board;
    let read = board.on_add_task(Category::Daily, "Read a book");
    board.on_add_task(Category::Daily, "Stretch");
    board.on_add_task(Category::Special, "Bake bread");
    board.on_add_task(Category::HighLevel, "Run a marathon");
    board.on_add_counter("Pushups");
    board.on_add_counter("Glasses of water");
    if let Some(id) = read {
        board.on_complete_task(Category::Daily, id);
    }
    app
}
