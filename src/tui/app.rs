use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::config::GamifyConfig;
use crate::model::counter::CounterId;
use crate::model::tab::Tab;
use crate::model::task::{Category, TaskId};
use crate::ops::{Board, Intent, Outcome};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a name into the add dialog
    Input,
    /// Choosing an entry in the delete picker
    Picker,
}

/// What the add dialog will create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTarget {
    Task(Category),
    Counter,
}

impl AddTarget {
    pub fn title(self) -> &'static str {
        match self {
            AddTarget::Task(_) => "New Task",
            AddTarget::Counter => "New Counter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AddTarget::Task(_) => "Task Name",
            AddTarget::Counter => "Counter Name",
        }
    }
}

/// Add dialog state: a single-line text buffer with a byte-offset cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub target: AddTarget,
    pub buffer: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new(target: AddTarget) -> Self {
        InputState {
            target,
            buffer: String::new(),
            cursor: 0,
        }
    }
}

/// Which list the delete picker shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    DailyTasks,
    Counters,
}

impl PickerTarget {
    pub fn title(self) -> &'static str {
        match self {
            PickerTarget::DailyTasks => "Delete Daily Task",
            PickerTarget::Counters => "Delete Counter",
        }
    }

    pub fn empty_text(self) -> &'static str {
        match self {
            PickerTarget::DailyTasks => "No tasks to delete.",
            PickerTarget::Counters => "No counters to delete.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub target: PickerTarget,
    pub cursor: usize,
}

/// Main application state. The board holds everything that matters; the rest
/// is cursor and dialog state for the terminal.
pub struct App {
    pub board: Board,
    pub config: GamifyConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    /// Cursor into the pending-today daily list
    pub daily_cursor: usize,
    /// Cursor into the combined special + high-level pending list
    pub quests_cursor: usize,
    pub counter_cursor: usize,
    pub input: Option<InputState>,
    pub picker: Option<PickerState>,
    /// Transient message shown in the status row until the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: GamifyConfig, now: NaiveDateTime) -> Self {
        let board = Board::new(&config, now);
        let theme = Theme::from_config(&config.ui);
        App {
            board,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            daily_cursor: 0,
            quests_cursor: 0,
            counter_cursor: 0,
            input: None,
            picker: None,
            status_message: None,
        }
    }

    pub fn tab(&self) -> Tab {
        self.board.selected_tab()
    }

    /// Ids of daily quests still open today, in display order
    pub fn daily_rows(&self) -> Vec<TaskId> {
        self.board.daily().pending_today().map(|t| t.id).collect()
    }

    /// Pending special quests followed by pending high-level quests
    pub fn quest_rows(&self) -> Vec<(Category, TaskId)> {
        let special = self
            .board
            .special()
            .pending()
            .map(|t| (Category::Special, t.id));
        let high = self
            .board
            .high_level()
            .pending()
            .map(|t| (Category::HighLevel, t.id));
        special.chain(high).collect()
    }

    pub fn counter_rows(&self) -> Vec<CounterId> {
        self.board.counters().iter().map(|c| c.id).collect()
    }

    /// Number of rows the delete picker offers
    pub fn picker_len(&self, target: PickerTarget) -> usize {
        match target {
            PickerTarget::DailyTasks => self.board.daily().all().len(),
            PickerTarget::Counters => self.board.counters().len(),
        }
    }

    /// Apply an intent and keep cursors inside their lists
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        debug!(?intent, "tui intent");
        let outcome = self.board.apply(intent);
        self.clamp_cursors();
        outcome
    }

    pub fn clamp_cursors(&mut self) {
        self.daily_cursor = clamp(self.daily_cursor, self.daily_rows().len());
        self.quests_cursor = clamp(self.quests_cursor, self.quest_rows().len());
        self.counter_cursor = clamp(self.counter_cursor, self.board.counters().len());
        if let Some(picker) = self.picker {
            let len = self.picker_len(picker.target);
            self.picker = Some(PickerState {
                cursor: clamp(picker.cursor, len),
                ..picker
            });
        }
    }

    /// Observe the clock; announces a new daily cycle in the status row
    pub fn tick(&mut self, now: NaiveDateTime) {
        if self.board.tick(now) {
            self.status_message = Some("A new day: daily quests are back".to_string());
            self.clamp_cursors();
        }
    }
}

fn clamp(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor.min(len - 1) }
}

/// Run the TUI application
pub fn run(config: GamifyConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, Local::now().naive_local());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(score = app.board.score(), "tui stopped");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Local::now().naive_local());
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.tick(Local::now().naive_local());
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
