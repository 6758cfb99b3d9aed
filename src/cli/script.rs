//! Intent scripts: one user action per line.
//!
//! ```text
//! # comments and blank lines are ignored
//! add daily Read
//! done daily Read
//! delete special Bake bread
//! counter add Pushups
//! counter inc Pushups
//! tab map
//! ```
//!
//! Names address the first matching entry. `done` addresses the first entry
//! that can still be completed.

use crate::model::tab::Tab;
use crate::model::task::Category;
use crate::ops::{Board, Intent, Outcome};

/// Error type for script parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: unknown category '{word}' (expected daily, special, or high)")]
    UnknownCategory { line: usize, word: String },
    #[error("line {line}: unknown tab '{word}' (expected 0-4 or a tab name)")]
    UnknownTab { line: usize, word: String },
    #[error("line {line}: missing {what}")]
    Missing { line: usize, what: &'static str },
}

/// A parsed script step. Names are resolved against the board when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Add { category: Category, name: String },
    Done { category: Category, name: String },
    Delete { category: Category, name: String },
    CounterAdd { name: String },
    CounterDelete { name: String },
    CounterInc { name: String },
    CounterDec { name: String },
    Tab { tab: Tab },
}

/// A step that ran, with what it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub line: usize,
    pub step: Step,
    pub outcome: Outcome,
}

/// Parse a whole script. Stops at the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Step)>, ScriptError> {
    let mut steps = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        steps.push((line, parse_line(line, trimmed)?));
    }
    Ok(steps)
}

fn parse_line(line: usize, text: &str) -> Result<Step, ScriptError> {
    let (word, rest) = split_word(text);
    match word.to_ascii_lowercase().as_str() {
        "add" => {
            let (category, name) = category_and_name(line, rest)?;
            Ok(Step::Add { category, name })
        }
        "done" | "complete" => {
            let (category, name) = category_and_name(line, rest)?;
            Ok(Step::Done { category, name })
        }
        "delete" | "rm" => {
            let (category, name) = category_and_name(line, rest)?;
            Ok(Step::Delete { category, name })
        }
        "counter" => {
            let (action, name) = split_word(rest);
            if action.is_empty() {
                return Err(ScriptError::Missing {
                    line,
                    what: "counter action",
                });
            }
            let name = name.to_string();
            match action.to_ascii_lowercase().as_str() {
                "add" => Ok(Step::CounterAdd { name }),
                "delete" | "rm" => Ok(Step::CounterDelete { name: required_name(line, name)? }),
                "inc" | "+" => Ok(Step::CounterInc { name: required_name(line, name)? }),
                "dec" | "-" => Ok(Step::CounterDec { name: required_name(line, name)? }),
                other => Err(ScriptError::UnknownCommand {
                    line,
                    word: format!("counter {}", other),
                }),
            }
        }
        "tab" => {
            let target = rest.trim();
            if target.is_empty() {
                return Err(ScriptError::Missing { line, what: "tab" });
            }
            let tab = Tab::parse(target).ok_or_else(|| ScriptError::UnknownTab {
                line,
                word: target.to_string(),
            })?;
            Ok(Step::Tab { tab })
        }
        _ => Err(ScriptError::UnknownCommand {
            line,
            word: word.to_string(),
        }),
    }
}

/// Split off the first whitespace-delimited word. The remainder keeps inner spacing.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], text[pos..].trim_start()),
        None => (text, ""),
    }
}

fn category_and_name(line: usize, rest: &str) -> Result<(Category, String), ScriptError> {
    let (word, name) = split_word(rest);
    if word.is_empty() {
        return Err(ScriptError::Missing {
            line,
            what: "category",
        });
    }
    let category = Category::parse(word).ok_or_else(|| ScriptError::UnknownCategory {
        line,
        word: word.to_string(),
    })?;
    // Blank names are allowed through: the board rejects them like the UI does.
    Ok((category, name.to_string()))
}

fn required_name(line: usize, name: String) -> Result<String, ScriptError> {
    if name.is_empty() {
        Err(ScriptError::Missing {
            line,
            what: "counter name",
        })
    } else {
        Ok(name)
    }
}

/// Resolve a step's names against the board and apply it
pub fn run_step(board: &mut Board, step: &Step) -> Outcome {
    let intent = match step {
        Step::Add { category, name } => Some(Intent::AddTask {
            category: *category,
            name: name.clone(),
        }),
        Step::Done { category, name } => board
            .find_pending_task(*category, name)
            .map(|id| Intent::CompleteTask {
                category: *category,
                id,
            }),
        Step::Delete { category, name } => board
            .find_task(*category, name)
            .map(|id| Intent::DeleteTask {
                category: *category,
                id,
            }),
        Step::CounterAdd { name } => Some(Intent::AddCounter { name: name.clone() }),
        Step::CounterDelete { name } => board
            .find_counter(name)
            .map(|id| Intent::DeleteCounter { id }),
        Step::CounterInc { name } => board.find_counter(name).map(|id| Intent::Increment { id }),
        Step::CounterDec { name } => board.find_counter(name).map(|id| Intent::Decrement { id }),
        Step::Tab { tab } => Some(Intent::SelectTab { index: tab.index() }),
    };
    match intent {
        Some(intent) => board.apply(intent),
        None => Outcome::Ignored,
    }
}

/// Parse and run a script, returning one result per executed step
pub fn run_script(board: &mut Board, text: &str) -> Result<Vec<StepResult>, ScriptError> {
    let steps = parse_script(text)?;
    Ok(steps
        .into_iter()
        .map(|(line, step)| {
            let outcome = run_step(board, &step);
            StepResult {
                line,
                step,
                outcome,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::GamifyConfig;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn board() -> Board {
        let now = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        Board::new(&GamifyConfig::default(), now)
    }

    #[test]
    fn parse_all_commands() {
        let steps = parse_script(
            "\
# morning
add daily Read a chapter
done daily Read a chapter

delete special Bake
counter add Pushups
counter inc Pushups
counter dec Pushups
counter delete Pushups
tab 2
tab counter
",
        )
        .unwrap();
        let kinds: Vec<Step> = steps.into_iter().map(|(_, s)| s).collect();
        assert_eq!(
            kinds,
            vec![
                Step::Add {
                    category: Category::Daily,
                    name: "Read a chapter".into()
                },
                Step::Done {
                    category: Category::Daily,
                    name: "Read a chapter".into()
                },
                Step::Delete {
                    category: Category::Special,
                    name: "Bake".into()
                },
                Step::CounterAdd {
                    name: "Pushups".into()
                },
                Step::CounterInc {
                    name: "Pushups".into()
                },
                Step::CounterDec {
                    name: "Pushups".into()
                },
                Step::CounterDelete {
                    name: "Pushups".into()
                },
                Step::Tab { tab: Tab::Map },
                Step::Tab { tab: Tab::Counter },
            ]
        );
    }

    #[test]
    fn line_numbers_count_comments_and_blanks() {
        let steps = parse_script("# header\n\nadd high Marathon\n").unwrap();
        assert_eq!(steps[0].0, 3);
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse_script("add daily ok\njump daily x\n"),
            Err(ScriptError::UnknownCommand {
                line: 2,
                word: "jump".into()
            })
        );
        assert_eq!(
            parse_script("add weekly x"),
            Err(ScriptError::UnknownCategory {
                line: 1,
                word: "weekly".into()
            })
        );
        assert_eq!(
            parse_script("tab 9"),
            Err(ScriptError::UnknownTab {
                line: 1,
                word: "9".into()
            })
        );
        assert_eq!(
            parse_script("counter inc"),
            Err(ScriptError::Missing {
                line: 1,
                what: "counter name"
            })
        );
        assert_eq!(
            parse_script("add"),
            Err(ScriptError::Missing {
                line: 1,
                what: "category"
            })
        );
    }

    #[test]
    fn blank_add_is_ignored_at_run_time() {
        let mut b = board();
        let results = run_script(&mut b, "add special\ncounter add\n").unwrap();
        assert!(results.iter().all(|r| r.outcome == Outcome::Ignored));
        assert!(b.special().is_empty());
        assert!(b.counters().is_empty());
    }

    #[test]
    fn read_and_pushups_script() {
        let mut b = board();
        let results = run_script(
            &mut b,
            "\
add daily Read
done daily Read
counter add Pushups
counter inc Pushups
counter inc Pushups
counter inc Pushups
counter dec Pushups
tab map
",
        )
        .unwrap();
        assert_eq!(results[1].outcome, Outcome::Awarded(2));
        assert_eq!(b.score(), 2);
        assert_eq!(b.counters().find_named("Pushups").unwrap().count, 2);
        assert_eq!(b.selected_tab(), Tab::Map);
        assert_eq!(b.daily().pending_today().count(), 0);
    }

    #[test]
    fn done_on_missing_task_is_ignored() {
        let mut b = board();
        let results = run_script(&mut b, "done special Ghost\ndelete high Ghost\n").unwrap();
        assert_eq!(results[0].outcome, Outcome::Ignored);
        assert_eq!(results[1].outcome, Outcome::Ignored);
        assert_eq!(b.score(), 0);
    }

    #[test]
    fn done_twice_scores_once() {
        let mut b = board();
        run_script(&mut b, "add special Bake\ndone special Bake\ndone special Bake\n").unwrap();
        assert_eq!(b.score(), 5);
        assert_eq!(b.special().len(), 1);
    }
}
