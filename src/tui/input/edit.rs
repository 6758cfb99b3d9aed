use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::item_list::is_valid_name;
use crate::ops::{Intent, Outcome};
use crate::tui::app::{AddTarget, App, InputState, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_start_before};

/// Keys for the add dialog's single-line text field
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(input) = app.input.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => cancel_edit(app),
        (_, KeyCode::Enter) => submit_edit(app),

        // Cursor movement
        (_, KeyCode::Left) => {
            if let Some(pos) = prev_grapheme_boundary(&input.buffer, input.cursor) {
                input.cursor = pos;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(pos) = next_grapheme_boundary(&input.buffer, input.cursor) {
                input.cursor = pos;
            }
        }
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => input.cursor = 0,
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            input.cursor = input.buffer.len();
        }

        // Deletion
        (KeyModifiers::CONTROL, KeyCode::Char('w')) | (KeyModifiers::ALT, KeyCode::Backspace) => {
            let start = word_start_before(&input.buffer, input.cursor);
            input.buffer.replace_range(start..input.cursor, "");
            input.cursor = start;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            input.buffer.replace_range(..input.cursor, "");
            input.cursor = 0;
        }
        (_, KeyCode::Backspace) => {
            if let Some(start) = prev_grapheme_boundary(&input.buffer, input.cursor) {
                input.buffer.replace_range(start..input.cursor, "");
                input.cursor = start;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(end) = next_grapheme_boundary(&input.buffer, input.cursor) {
                input.buffer.replace_range(input.cursor..end, "");
            }
        }

        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            insert_char(input, c);
        }
        _ => {}
    }
}

fn insert_char(input: &mut InputState, c: char) {
    input.buffer.insert(input.cursor, c);
    input.cursor += c.len_utf8();
}

fn cancel_edit(app: &mut App) {
    app.input = None;
    app.mode = Mode::Navigate;
}

/// Blank input leaves the dialog open with nothing added
fn submit_edit(app: &mut App) {
    let Some(input) = app.input.as_ref() else {
        return;
    };
    if !is_valid_name(&input.buffer) {
        return;
    }
    let name = input.buffer.clone();
    let message = format!("Added {}", name);
    let intent = match input.target {
        AddTarget::Task(category) => Intent::AddTask { category, name },
        AddTarget::Counter => Intent::AddCounter { name },
    };

    app.input = None;
    app.mode = Mode::Navigate;
    match app.apply(intent) {
        Outcome::TaskAdded(_) | Outcome::CounterAdded(_) => {
            app.status_message = Some(message);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;
    use crate::model::config::GamifyConfig;
    use crate::model::task::Category;
    use chrono::NaiveDate;

    fn app() -> App {
        let now = NaiveDate::from_ymd_opt(2026, 7, 4)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        App::new(GamifyConfig::default(), now)
    }

    fn buffer(app: &App) -> &str {
        app.input.as_ref().map_or("", |i| i.buffer.as_str())
    }

    #[test]
    fn typing_and_enter_adds_daily_task() {
        let mut app = app();
        handle_key(&mut app, ch('a'));
        for k in typed("Read a book") {
            handle_key(&mut app, k);
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        let names: Vec<&str> = app.board.daily().all().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Read a book"]);
        assert_eq!(app.board.score(), 0);
    }

    #[test]
    fn blank_input_keeps_dialog_open() {
        let mut app = app();
        handle_key(&mut app, ch('a'));
        for k in typed("   ") {
            handle_key(&mut app, k);
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Input);
        assert!(app.board.daily().all().is_empty());
    }

    #[test]
    fn esc_discards_input() {
        let mut app = app();
        handle_key(&mut app, ch('4'));
        handle_key(&mut app, ch('a'));
        for k in typed("Pushups") {
            handle_key(&mut app, k);
        }
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.input.is_none());
        assert!(app.board.counters().is_empty());
    }

    #[test]
    fn dialog_keys_do_not_leak_into_navigation() {
        let mut app = app();
        handle_key(&mut app, ch('a'));
        for k in typed("q3?") {
            handle_key(&mut app, k);
        }
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert_eq!(buffer(&app), "q3?");
    }

    #[test]
    fn cursor_editing_is_grapheme_aware() {
        let mut app = app();
        handle_key(&mut app, ch('a'));
        for k in typed("cafe\u{301}") {
            handle_key(&mut app, k);
        }
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(buffer(&app), "caf");
        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, ch('X'));
        assert_eq!(buffer(&app), "caXf");
        handle_key(&mut app, key(KeyCode::Delete));
        assert_eq!(buffer(&app), "caX");
    }

    #[test]
    fn ctrl_w_deletes_previous_word() {
        let mut app = app();
        handle_key(&mut app, ch('a'));
        for k in typed("read a book") {
            handle_key(&mut app, k);
        }
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        assert_eq!(buffer(&app), "read a ");
    }

    #[test]
    fn adds_to_high_level_from_quests() {
        let mut app = app();
        handle_key(&mut app, ch('2'));
        handle_key(&mut app, ch('A'));
        for k in typed("Marathon") {
            handle_key(&mut app, k);
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.board.find_task(Category::HighLevel, "Marathon").is_some());
        assert!(app.board.special().is_empty());
    }
}
