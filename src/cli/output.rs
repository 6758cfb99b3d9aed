use serde::Serialize;

use crate::model::tab::Tab;
use crate::model::task::Completable;
use crate::ops::{Board, Outcome};

use super::script::StepResult;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct BoardJson {
    pub score: u64,
    pub tab: Tab,
    pub daily: DailyJson,
    pub special: Vec<QuestJson>,
    pub high_level: Vec<QuestJson>,
    pub counters: Vec<CounterJson>,
}

#[derive(Serialize)]
pub struct DailyJson {
    /// Day the current completion cycle belongs to (YYYY-MM-DD)
    pub cycle: String,
    pub completed_today: Vec<String>,
    pub tasks: Vec<DailyTaskJson>,
}

#[derive(Serialize)]
pub struct DailyTaskJson {
    pub id: u32,
    pub name: String,
    pub done_today: bool,
}

#[derive(Serialize)]
pub struct QuestJson {
    pub id: u32,
    pub name: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct CounterJson {
    pub id: u32,
    pub name: String,
    pub count: i64,
}

#[derive(Serialize)]
pub struct ReplayJson {
    pub steps: Vec<StepJson>,
    pub board: BoardJson,
}

#[derive(Serialize)]
pub struct StepJson {
    pub line: usize,
    pub outcome: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn board_to_json(board: &Board) -> BoardJson {
    let daily = board.daily();
    BoardJson {
        score: board.score(),
        tab: board.selected_tab(),
        daily: DailyJson {
            cycle: daily.log().cycle().format("%Y-%m-%d").to_string(),
            completed_today: daily.log().completed().map(str::to_string).collect(),
            tasks: daily
                .entries()
                .map(|e| DailyTaskJson {
                    id: e.task.id.0,
                    name: e.task.name.clone(),
                    done_today: !e.is_pending(),
                })
                .collect(),
        },
        special: board.special().iter().map(quest_to_json).collect(),
        high_level: board.high_level().iter().map(quest_to_json).collect(),
        counters: board
            .counters()
            .iter()
            .map(|c| CounterJson {
                id: c.id.0,
                name: c.name.clone(),
                count: c.count,
            })
            .collect(),
    }
}

fn quest_to_json(task: &crate::model::PermanentTask) -> QuestJson {
    QuestJson {
        id: task.id.0,
        name: task.name.clone(),
        done: task.done,
    }
}

pub fn replay_to_json(results: &[StepResult], board: &Board) -> ReplayJson {
    ReplayJson {
        steps: results
            .iter()
            .map(|r| StepJson {
                line: r.line,
                outcome: describe_outcome(r.outcome),
            })
            .collect(),
        board: board_to_json(board),
    }
}

/// Short human-readable description of an outcome
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Ignored => "ignored".to_string(),
        Outcome::TaskAdded(id) => format!("added task {}", id),
        Outcome::CounterAdded(id) => format!("added counter {}", id),
        Outcome::Removed => "removed".to_string(),
        Outcome::Awarded(points) => format!("+{} points", points),
        Outcome::Counted(count) => format!("count = {}", count),
        Outcome::Selected(tab) => format!("tab {}", tab.title()),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Format the board as plain text, one section per list
pub fn format_board(board: &Board) -> String {
    let mut lines = Vec::new();
    lines.push(format!("score: {}", board.score()));
    lines.push(format!("tab: {}", board.selected_tab().title()));

    lines.push(String::new());
    lines.push(format!(
        "daily (cycle {}):",
        board.daily().log().cycle().format("%Y-%m-%d")
    ));
    for entry in board.daily().entries() {
        lines.push(format!(
            "  [{}] {}",
            if entry.is_pending() { ' ' } else { 'x' },
            entry.task.name
        ));
    }

    for (title, list) in [("special", board.special()), ("high level", board.high_level())] {
        lines.push(String::new());
        lines.push(format!("{}:", title));
        for task in list {
            lines.push(format!("  [{}] {}", if task.done { 'x' } else { ' ' }, task.name));
        }
    }

    lines.push(String::new());
    lines.push("counters:".to_string());
    for counter in board.counters() {
        lines.push(format!("  {:>4}  {}", counter.count, counter.name));
    }

    lines.join("\n")
}
