use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::tab::Tab;
use crate::model::task::{Category, TaskId};
use crate::ops::{Intent, Outcome};
use crate::tui::app::{AddTarget, App, InputState, Mode, PickerState, PickerTarget};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Tab switching
        (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='5')) => {
            let index = c as usize - '1' as usize;
            app.apply(Intent::SelectTab { index });
        }
        (_, KeyCode::Tab) => app.board.next_tab(),
        (_, KeyCode::BackTab) => app.board.prev_tab(),

        // Cursor
        (_, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g') | KeyCode::Home) => move_cursor(app, isize::MIN),
        (_, KeyCode::Char('G') | KeyCode::End) => move_cursor(app, isize::MAX),

        _ => match app.tab() {
            Tab::Daily => handle_daily(app, key),
            Tab::Quests => handle_quests(app, key),
            Tab::Counter => handle_counter(app, key),
            Tab::Map | Tab::Personalize => {}
        },
    }
}

fn handle_daily(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(&id) = app.daily_rows().get(app.daily_cursor) {
                complete(app, Category::Daily, id);
            }
        }
        KeyCode::Char('a') => open_add(app, AddTarget::Task(Category::Daily)),
        KeyCode::Char('d') => open_picker(app, PickerTarget::DailyTasks),
        _ => {}
    }
}

fn handle_quests(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(&(category, id)) = app.quest_rows().get(app.quests_cursor) {
                complete(app, category, id);
            }
        }
        KeyCode::Char('x') => {
            if let Some(&(category, id)) = app.quest_rows().get(app.quests_cursor)
                && app.apply(Intent::DeleteTask { category, id }) == Outcome::Removed
            {
                app.status_message = Some(format!("Deleted {} quest", category.label()));
            }
        }
        KeyCode::Char('a') => open_add(app, AddTarget::Task(Category::Special)),
        KeyCode::Char('A') => open_add(app, AddTarget::Task(Category::HighLevel)),
        _ => {}
    }
}

fn handle_counter(app: &mut App, key: KeyEvent) {
    let selected = app.counter_rows().get(app.counter_cursor).copied();
    match key.code {
        KeyCode::Char('+' | '=' | 'l') | KeyCode::Right => {
            if let Some(id) = selected {
                app.apply(Intent::Increment { id });
            }
        }
        KeyCode::Char('-' | 'h') | KeyCode::Left => {
            if let Some(id) = selected {
                app.apply(Intent::Decrement { id });
            }
        }
        KeyCode::Char('a') => open_add(app, AddTarget::Counter),
        KeyCode::Char('d') => open_picker(app, PickerTarget::Counters),
        _ => {}
    }
}

fn complete(app: &mut App, category: Category, id: TaskId) {
    if let Outcome::Awarded(points) = app.apply(Intent::CompleteTask { category, id }) {
        app.status_message = Some(format!("+{} {}", points, category.label()));
    }
}

fn open_add(app: &mut App, target: AddTarget) {
    app.input = Some(InputState::new(target));
    app.mode = Mode::Input;
}

fn open_picker(app: &mut App, target: PickerTarget) {
    app.picker = Some(PickerState { target, cursor: 0 });
    app.mode = Mode::Picker;
}

/// Move the current view's cursor by `delta`, saturating at both ends
fn move_cursor(app: &mut App, delta: isize) {
    let (cursor, len) = match app.tab() {
        Tab::Daily => (&mut app.daily_cursor, app.board.daily().pending_today().count()),
        Tab::Quests => {
            let len =
                app.board.special().pending().count() + app.board.high_level().pending().count();
            (&mut app.quests_cursor, len)
        }
        Tab::Counter => (&mut app.counter_cursor, app.board.counters().len()),
        Tab::Map | Tab::Personalize => return,
    };
    *cursor = step(*cursor, delta, len);
}

pub(super) fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}
