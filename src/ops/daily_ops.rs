use chrono::{Duration, NaiveDate, NaiveDateTime};
use indexmap::IndexSet;
use serde::Serialize;
use tracing::info;

use crate::model::config::{DailyConfig, ResetPolicy};
use crate::model::score::ScoreLedger;
use crate::model::task::{Completable, DailyEntry, DailyTask, TaskId};

use super::item_list::ItemList;

/// Names of daily quests completed in the current cycle.
///
/// Membership is by name: completing one "Read" hides every daily quest
/// called "Read" until the cycle ends.
#[derive(Debug, Clone, Serialize)]
pub struct DailyLog {
    policy: ResetPolicy,
    day_start_hour: u32,
    cycle: NaiveDate,
    completed: IndexSet<String>,
}

impl DailyLog {
    pub fn new(config: &DailyConfig, now: NaiveDateTime) -> Self {
        let day_start_hour = config.day_start_hour.min(23);
        DailyLog {
            policy: config.reset,
            day_start_hour,
            cycle: day_key(now, day_start_hour),
            completed: IndexSet::new(),
        }
    }

    /// Observe the clock. Clears the log if a later cycle has begun; a clock
    /// that steps back into an earlier day leaves the log untouched.
    /// Returns true if completions were reset.
    pub fn roll_over(&mut self, now: NaiveDateTime) -> bool {
        if self.policy == ResetPolicy::Session {
            return false;
        }
        let key = day_key(now, self.day_start_hour);
        if key <= self.cycle {
            return false;
        }
        info!(
            from = %self.cycle,
            to = %key,
            cleared = self.completed.len(),
            "daily cycle rolled over"
        );
        self.cycle = key;
        self.completed.clear();
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.completed.contains(name)
    }

    /// Record a completion. Returns false if the name was already recorded.
    pub fn mark(&mut self, name: &str) -> bool {
        self.completed.insert(name.to_string())
    }

    /// Completed names, in completion order
    pub fn completed(&self) -> impl Iterator<Item = &str> + '_ {
        self.completed.iter().map(|s| s.as_str())
    }

    pub fn cycle(&self) -> NaiveDate {
        self.cycle
    }

    pub fn policy(&self) -> ResetPolicy {
        self.policy
    }
}

/// The calendar day a moment belongs to, with days starting at `day_start_hour`
pub fn day_key(now: NaiveDateTime, day_start_hour: u32) -> NaiveDate {
    (now - Duration::hours(i64::from(day_start_hour))).date()
}

/// Daily quests plus the log that decides which of them are done today
#[derive(Debug, Clone, Serialize)]
pub struct DailyQuests {
    tasks: ItemList<DailyTask>,
    log: DailyLog,
}

impl DailyQuests {
    pub fn new(config: &DailyConfig, now: NaiveDateTime) -> Self {
        DailyQuests {
            tasks: ItemList::new(),
            log: DailyLog::new(config, now),
        }
    }

    pub fn add(&mut self, name: &str) -> Option<TaskId> {
        self.tasks.add(name)
    }

    pub fn remove(&mut self, id: TaskId) -> Option<DailyTask> {
        self.tasks.remove(id)
    }

    pub fn remove_named(&mut self, name: &str) -> Option<DailyTask> {
        self.tasks.remove_named(name)
    }

    /// Every daily quest, done today or not
    pub fn all(&self) -> &ItemList<DailyTask> {
        &self.tasks
    }

    /// Every daily quest paired with its done-today state
    pub fn entries(&self) -> impl Iterator<Item = DailyEntry<'_>> + '_ {
        self.tasks.iter().map(|task| DailyEntry {
            task,
            completed_today: self.log.contains(&task.name),
        })
    }

    /// Quests still open today, in insertion order
    pub fn pending_today(&self) -> impl Iterator<Item = &DailyTask> + '_ {
        self.entries().filter(|e| e.is_pending()).map(|e| e.task)
    }

    /// First quest with this name that is still open today
    pub fn find_pending_named(&self, name: &str) -> Option<&DailyTask> {
        self.pending_today().find(|t| t.name == name)
    }

    /// Record the quest's name as done today and award `reward`.
    ///
    /// Leaves the task itself untouched. Returns `None` if the quest is absent
    /// or its name is already done today.
    pub fn complete_today(
        &mut self,
        id: TaskId,
        reward: u32,
        ledger: &mut ScoreLedger,
    ) -> Option<u32> {
        let task = self.tasks.get(id)?;
        if !self.log.mark(&task.name) {
            return None;
        }
        ledger.award(reward);
        Some(reward)
    }

    pub fn log(&self) -> &DailyLog {
        &self.log
    }

    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        self.log.roll_over(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn rollover(day_start_hour: u32) -> DailyConfig {
        DailyConfig {
            reset: ResetPolicy::Rollover,
            day_start_hour,
        }
    }

    fn pending_names(daily: &DailyQuests) -> Vec<&str> {
        daily.pending_today().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn complete_today_hides_from_pending_but_keeps_task() {
        let mut daily = DailyQuests::new(&rollover(0), at(10, 9));
        let mut ledger = ScoreLedger::new();
        let read = daily.add("Read").unwrap();
        daily.add("Stretch");

        assert_eq!(daily.complete_today(read, 2, &mut ledger), Some(2));
        assert_eq!(ledger.total(), 2);
        assert_eq!(pending_names(&daily), vec!["Stretch"]);
        assert_eq!(daily.all().len(), 2);
        assert!(daily.all().find_named("Read").is_some());
    }

    #[test]
    fn completion_is_by_name() {
        let mut daily = DailyQuests::new(&rollover(0), at(10, 9));
        let mut ledger = ScoreLedger::new();
        let first = daily.add("Read").unwrap();
        let second = daily.add("Read").unwrap();
        daily.complete_today(first, 2, &mut ledger);
        assert!(pending_names(&daily).is_empty());
        // The duplicate shares the name, so it is already done today
        assert_eq!(daily.complete_today(second, 2, &mut ledger), None);
        assert_eq!(ledger.total(), 2);
    }

    #[test]
    fn completing_absent_task_scores_nothing() {
        let mut daily = DailyQuests::new(&rollover(0), at(10, 9));
        let mut ledger = ScoreLedger::new();
        assert_eq!(daily.complete_today(TaskId(7), 2, &mut ledger), None);
        assert_eq!(ledger.total(), 0);
        assert_eq!(daily.log().completed().count(), 0);
    }

    #[test]
    fn rollover_at_midnight_reoffers_tasks() {
        let mut daily = DailyQuests::new(&rollover(0), at(10, 22));
        let mut ledger = ScoreLedger::new();
        let read = daily.add("Read").unwrap();
        daily.complete_today(read, 2, &mut ledger);

        assert!(!daily.tick(at(10, 23)));
        assert!(pending_names(&daily).is_empty());

        assert!(daily.tick(at(11, 0)));
        assert_eq!(pending_names(&daily), vec!["Read"]);
        assert_eq!(daily.log().cycle(), NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());
        // Score is never taken back
        assert_eq!(ledger.total(), 2);
    }

    #[test]
    fn clock_stepping_back_does_not_reset() {
        let at_minute = |day: u32, hour: u32, min: u32| {
            NaiveDate::from_ymd_opt(2026, 10, day)
                .unwrap()
                .and_hms_opt(hour, min, 0)
                .unwrap()
        };
        let mut daily = DailyQuests::new(&rollover(0), at_minute(25, 0, 30));
        let mut ledger = ScoreLedger::new();
        let read = daily.add("Read").unwrap();
        assert_eq!(daily.complete_today(read, 2, &mut ledger), Some(2));

        // Fall-back or a clock correction lands on the previous day
        assert!(!daily.tick(at_minute(24, 23, 45)));
        assert_eq!(daily.complete_today(read, 2, &mut ledger), None);
        assert_eq!(daily.log().cycle(), NaiveDate::from_ymd_opt(2026, 10, 25).unwrap());

        // Returning to the same day is still the same cycle
        assert!(!daily.tick(at_minute(25, 0, 5)));
        assert_eq!(daily.complete_today(read, 2, &mut ledger), None);
        assert_eq!(ledger.total(), 2);

        assert!(daily.tick(at_minute(26, 0, 0)));
        assert_eq!(daily.complete_today(read, 2, &mut ledger), Some(2));
    }

    #[test]
    fn remove_named_drops_first_match_only() {
        let mut daily = DailyQuests::new(&rollover(0), at(10, 9));
        let first = daily.add("Read").unwrap();
        let second = daily.add("Read").unwrap();
        assert_eq!(daily.remove_named("Read").map(|t| t.id), Some(first));
        assert_eq!(daily.all().iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
        assert!(daily.remove_named("Walk").is_none());
        assert_eq!(daily.all().len(), 1);
    }

    #[test]
    fn day_start_hour_shifts_the_boundary() {
        let mut daily = DailyQuests::new(&rollover(4), at(10, 23));
        let mut ledger = ScoreLedger::new();
        let read = daily.add("Read").unwrap();
        daily.complete_today(read, 2, &mut ledger);

        // 02:00 on the 11th still belongs to the 10th
        assert!(!daily.tick(at(11, 2)));
        assert!(daily.tick(at(11, 4)));
        assert_eq!(pending_names(&daily), vec!["Read"]);
    }

    #[test]
    fn session_policy_never_resets() {
        let config = DailyConfig {
            reset: ResetPolicy::Session,
            day_start_hour: 0,
        };
        let mut daily = DailyQuests::new(&config, at(10, 9));
        let mut ledger = ScoreLedger::new();
        let read = daily.add("Read").unwrap();
        daily.complete_today(read, 2, &mut ledger);
        assert!(!daily.tick(at(20, 9)));
        assert!(pending_names(&daily).is_empty());
    }

    #[test]
    fn out_of_range_start_hour_is_clamped() {
        let log = DailyLog::new(&rollover(99), at(10, 23));
        assert_eq!(log.cycle(), NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
    }

    #[test]
    fn completed_names_keep_completion_order() {
        let mut daily = DailyQuests::new(&rollover(0), at(10, 9));
        let mut ledger = ScoreLedger::new();
        let a = daily.add("a").unwrap();
        let b = daily.add("b").unwrap();
        daily.complete_today(b, 2, &mut ledger);
        daily.complete_today(a, 2, &mut ledger);
        assert_eq!(daily.log().completed().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
