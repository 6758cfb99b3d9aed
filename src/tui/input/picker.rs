use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::Category;
use crate::ops::{Intent, Outcome};
use crate::tui::app::{App, Mode, PickerTarget};

use super::navigate::step;

/// Keys for the delete picker popup
pub(super) fn handle_picker(app: &mut App, key: KeyEvent) {
    let Some(picker) = app.picker else {
        app.mode = Mode::Navigate;
        return;
    };
    let len = app.picker_len(picker.target);

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => close_picker(app),
        KeyCode::Char('j') | KeyCode::Down => set_cursor(app, step(picker.cursor, 1, len)),
        KeyCode::Char('k') | KeyCode::Up => set_cursor(app, step(picker.cursor, -1, len)),
        KeyCode::Enter => {
            let intent = match picker.target {
                PickerTarget::DailyTasks => app
                    .board
                    .daily()
                    .all()
                    .as_slice()
                    .get(picker.cursor)
                    .map(|t| Intent::DeleteTask {
                        category: Category::Daily,
                        id: t.id,
                    }),
                PickerTarget::Counters => app
                    .board
                    .counters()
                    .as_slice()
                    .get(picker.cursor)
                    .map(|c| Intent::DeleteCounter { id: c.id }),
            };
            let Some(intent) = intent else {
                return;
            };
            if app.apply(intent) == Outcome::Removed {
                app.status_message = Some("Deleted".to_string());
            }
            close_picker(app);
        }
        _ => {}
    }
}

fn set_cursor(app: &mut App, cursor: usize) {
    if let Some(picker) = app.picker.as_mut() {
        picker.cursor = cursor;
    }
}

fn close_picker(app: &mut App) {
    app.picker = None;
    app.mode = Mode::Navigate;
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;
    use crate::model::config::GamifyConfig;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let now = NaiveDate::from_ymd_opt(2026, 7, 4)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        App::new(GamifyConfig::default(), now)
    }

    #[test]
    fn picker_deletes_completed_daily_task_too() {
        let mut app = app();
        let read = app.board.on_add_task(Category::Daily, "Read").unwrap();
        app.board.on_add_task(Category::Daily, "Walk");
        app.board.on_complete_task(Category::Daily, read);

        handle_key(&mut app, ch('d'));
        handle_key(&mut app, key(KeyCode::Enter));

        let names: Vec<&str> = app.board.daily().all().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Walk"]);
        assert_eq!(app.board.score(), 2);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn picker_moves_and_deletes_counter() {
        let mut app = app();
        app.board.on_add_counter("Pushups");
        app.board.on_add_counter("Water");
        handle_key(&mut app, ch('4'));
        handle_key(&mut app, ch('d'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        assert_eq!(app.picker.map(|p| p.cursor), Some(1));
        handle_key(&mut app, key(KeyCode::Enter));
        let names: Vec<&str> = app.board.counters().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Pushups"]);
    }

    #[test]
    fn enter_on_empty_picker_stays_open() {
        let mut app = app();
        handle_key(&mut app, ch('d'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Picker);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.picker.is_none());
    }
}
