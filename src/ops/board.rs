use chrono::NaiveDateTime;
use tracing::debug;

use crate::model::config::{GamifyConfig, RewardConfig};
use crate::model::counter::CounterId;
use crate::model::score::ScoreLedger;
use crate::model::tab::Tab;
use crate::model::task::{Category, TaskId};

use super::counter_ops::CounterList;
use super::daily_ops::{DailyLog, DailyQuests};
use super::nav::Navigator;
use super::quest_ops::QuestList;

/// A user action forwarded from a presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddTask { category: Category, name: String },
    DeleteTask { category: Category, id: TaskId },
    CompleteTask { category: Category, id: TaskId },
    AddCounter { name: String },
    DeleteCounter { id: CounterId },
    Increment { id: CounterId },
    Decrement { id: CounterId },
    SelectTab { index: usize },
}

/// What applying an intent did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed (blank name, absent item, out-of-range tab, already done)
    Ignored,
    TaskAdded(TaskId),
    CounterAdded(CounterId),
    Removed,
    Awarded(u32),
    Counted(i64),
    Selected(Tab),
}

/// All tracker state: three quest lists, counters, the score, and the selected tab.
///
/// The board is the only owner of the score. Every mutation goes through one
/// of the `on_*` intents below.
#[derive(Debug, Clone)]
pub struct Board {
    rewards: RewardConfig,
    daily: DailyQuests,
    special: QuestList,
    high_level: QuestList,
    counters: CounterList,
    score: ScoreLedger,
    nav: Navigator,
}

impl Board {
    pub fn new(config: &GamifyConfig, now: NaiveDateTime) -> Self {
        Board {
            rewards: config.rewards,
            daily: DailyQuests::new(&config.daily, now),
            special: QuestList::new(),
            high_level: QuestList::new(),
            counters: CounterList::new(),
            score: ScoreLedger::new(),
            nav: Navigator::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    pub fn on_add_task(&mut self, category: Category, name: &str) -> Option<TaskId> {
        let id = match category {
            Category::Daily => self.daily.add(name),
            Category::Special => self.special.add(name),
            Category::HighLevel => self.high_level.add(name),
        };
        match id {
            Some(id) => debug!(%category, %id, name, "task added"),
            None => debug!(%category, "blank task name rejected"),
        }
        id
    }

    pub fn on_delete_task(&mut self, category: Category, id: TaskId) -> bool {
        let removed = match category {
            Category::Daily => self.daily.remove(id).is_some(),
            Category::Special => self.special.remove(id).is_some(),
            Category::HighLevel => self.high_level.remove(id).is_some(),
        };
        debug!(%category, %id, removed, "delete task");
        removed
    }

    /// Complete a task and award its category's reward. Returns points awarded.
    pub fn on_complete_task(&mut self, category: Category, id: TaskId) -> Option<u32> {
        let reward = self.rewards.for_category(category);
        let awarded = match category {
            Category::Daily => self.daily.complete_today(id, reward, &mut self.score),
            Category::Special => self.special.complete(id, reward, &mut self.score),
            Category::HighLevel => self.high_level.complete(id, reward, &mut self.score),
        };
        debug!(%category, %id, ?awarded, score = self.score.total(), "complete task");
        awarded
    }

    pub fn on_add_counter(&mut self, name: &str) -> Option<CounterId> {
        let id = self.counters.add(name);
        debug!(?id, name, "add counter");
        id
    }

    pub fn on_delete_counter(&mut self, id: CounterId) -> bool {
        let removed = self.counters.remove(id).is_some();
        debug!(%id, removed, "delete counter");
        removed
    }

    pub fn on_increment(&mut self, id: CounterId) -> Option<i64> {
        self.counters.increment(id)
    }

    pub fn on_decrement(&mut self, id: CounterId) -> Option<i64> {
        self.counters.decrement(id)
    }

    pub fn on_select_tab(&mut self, index: usize) -> bool {
        self.nav.select(index)
    }

    /// Cycle to the next tab (wraps)
    pub fn next_tab(&mut self) {
        self.nav.next();
    }

    /// Cycle to the previous tab (wraps)
    pub fn prev_tab(&mut self) {
        self.nav.prev();
    }

    /// Apply an intent value. Equivalent to calling the matching `on_*` method.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::AddTask { category, name } => self
                .on_add_task(category, &name)
                .map_or(Outcome::Ignored, Outcome::TaskAdded),
            Intent::DeleteTask { category, id } => {
                removed_outcome(self.on_delete_task(category, id))
            }
            Intent::CompleteTask { category, id } => self
                .on_complete_task(category, id)
                .map_or(Outcome::Ignored, Outcome::Awarded),
            Intent::AddCounter { name } => self
                .on_add_counter(&name)
                .map_or(Outcome::Ignored, Outcome::CounterAdded),
            Intent::DeleteCounter { id } => removed_outcome(self.on_delete_counter(id)),
            Intent::Increment { id } => self
                .on_increment(id)
                .map_or(Outcome::Ignored, Outcome::Counted),
            Intent::Decrement { id } => self
                .on_decrement(id)
                .map_or(Outcome::Ignored, Outcome::Counted),
            Intent::SelectTab { index } => {
                if self.on_select_tab(index) {
                    Outcome::Selected(self.selected_tab())
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    /// Observe the clock; resets daily completions when a new cycle starts
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        self.daily.tick(now)
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    pub fn score(&self) -> u64 {
        self.score.total()
    }

    pub fn selected_tab(&self) -> Tab {
        self.nav.current()
    }

    pub fn rewards(&self) -> &RewardConfig {
        &self.rewards
    }

    pub fn daily(&self) -> &DailyQuests {
        &self.daily
    }

    pub fn special(&self) -> &QuestList {
        &self.special
    }

    pub fn high_level(&self) -> &QuestList {
        &self.high_level
    }

    /// The permanent quest list for special or high-level. `None` for daily.
    pub fn quests(&self, category: Category) -> Option<&QuestList> {
        match category {
            Category::Daily => None,
            Category::Special => Some(&self.special),
            Category::HighLevel => Some(&self.high_level),
        }
    }

    pub fn counters(&self) -> &CounterList {
        &self.counters
    }

    pub fn completed_today(&self) -> &DailyLog {
        self.daily.log()
    }

    // -----------------------------------------------------------------------
    // Name lookups (scripts address entries by name)
    // -----------------------------------------------------------------------

    /// First task in `category` with this name
    pub fn find_task(&self, category: Category, name: &str) -> Option<TaskId> {
        match category {
            Category::Daily => self.daily.all().find_named(name).map(|t| t.id),
            Category::Special => self.special.find_named(name).map(|t| t.id),
            Category::HighLevel => self.high_level.find_named(name).map(|t| t.id),
        }
    }

    /// First task in `category` with this name that can still be completed
    pub fn find_pending_task(&self, category: Category, name: &str) -> Option<TaskId> {
        match category {
            Category::Daily => self.daily.find_pending_named(name).map(|t| t.id),
            Category::Special => self.special.find_pending_named(name).map(|t| t.id),
            Category::HighLevel => self.high_level.find_pending_named(name).map(|t| t.id),
        }
    }

    pub fn find_counter(&self, name: &str) -> Option<CounterId> {
        self.counters.find_named(name).map(|c| c.id)
    }
}

fn removed_outcome(removed: bool) -> Outcome {
    if removed {
        Outcome::Removed
    } else {
        Outcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn board() -> Board {
        Board::new(&GamifyConfig::default(), now())
    }

    #[test]
    fn rewards_per_category() {
        let mut b = board();
        let d = b.on_add_task(Category::Daily, "Read").unwrap();
        let s = b.on_add_task(Category::Special, "Bake").unwrap();
        let h = b.on_add_task(Category::HighLevel, "Marathon").unwrap();
        assert_eq!(b.on_complete_task(Category::Daily, d), Some(2));
        assert_eq!(b.on_complete_task(Category::Special, s), Some(5));
        assert_eq!(b.on_complete_task(Category::HighLevel, h), Some(10));
        assert_eq!(b.score(), 17);
    }

    #[test]
    fn score_never_decreases() {
        let mut b = board();
        let mut last = b.score();
        let s = b.on_add_task(Category::Special, "x").unwrap();
        let c = b.on_add_counter("c").unwrap();
        let steps: Vec<Intent> = vec![
            Intent::CompleteTask { category: Category::Special, id: s },
            Intent::DeleteTask { category: Category::Special, id: s },
            Intent::Decrement { id: c },
            Intent::CompleteTask { category: Category::Special, id: s },
            Intent::SelectTab { index: 4 },
        ];
        for step in steps {
            b.apply(step);
            assert!(b.score() >= last);
            last = b.score();
        }
        assert_eq!(b.score(), 5);
    }

    #[test]
    fn read_scenario() {
        let mut b = board();
        assert_eq!(b.score(), 0);
        let read = b.on_add_task(Category::Daily, "Read").unwrap();
        b.on_complete_task(Category::Daily, read);
        assert_eq!(b.score(), 2);
        assert_eq!(b.daily().pending_today().count(), 0);
        assert!(b.daily().all().find_named("Read").is_some());
        assert!(b.completed_today().contains("Read"));
    }

    #[test]
    fn pushups_scenario() {
        let mut b = board();
        let id = b.on_add_counter("Pushups").unwrap();
        for _ in 0..3 {
            b.on_increment(id);
        }
        assert_eq!(b.counters().get(id).unwrap().count, 3);
        b.on_decrement(id);
        assert_eq!(b.counters().get(id).unwrap().count, 2);
        assert_eq!(b.score(), 0);
    }

    #[test]
    fn select_map_keeps_collections() {
        let mut b = board();
        b.on_add_task(Category::Special, "Bake");
        assert_eq!(b.apply(Intent::SelectTab { index: 2 }), Outcome::Selected(Tab::Map));
        assert_eq!(b.selected_tab(), Tab::Map);
        assert_eq!(b.special().len(), 1);
        assert_eq!(b.apply(Intent::SelectTab { index: 7 }), Outcome::Ignored);
        assert_eq!(b.selected_tab(), Tab::Map);
    }

    #[test]
    fn collections_are_independent() {
        let mut b = board();
        let s = b.on_add_task(Category::Special, "Same").unwrap();
        b.on_add_task(Category::HighLevel, "Same");
        b.on_add_task(Category::Daily, "Same");
        // Ids are per list, so the same id in another list is a different task
        assert!(b.on_delete_task(Category::Special, s));
        assert_eq!(b.high_level().len(), 1);
        assert_eq!(b.daily().all().len(), 1);
        assert!(b.special().is_empty());
    }

    #[test]
    fn blank_names_are_ignored() {
        let mut b = board();
        let intent = Intent::AddTask {
            category: Category::Daily,
            name: "   ".into(),
        };
        assert_eq!(b.apply(intent), Outcome::Ignored);
        assert_eq!(b.apply(Intent::AddCounter { name: String::new() }), Outcome::Ignored);
        assert!(b.daily().all().is_empty());
        assert!(b.counters().is_empty());
    }

    #[test]
    fn delete_absent_is_ignored() {
        let mut b = board();
        b.on_add_task(Category::Special, "Keep");
        assert_eq!(
            b.apply(Intent::DeleteTask {
                category: Category::Special,
                id: TaskId(999),
            }),
            Outcome::Ignored
        );
        assert_eq!(b.apply(Intent::DeleteCounter { id: CounterId(3) }), Outcome::Ignored);
        assert_eq!(b.special().len(), 1);
    }

    #[test]
    fn find_pending_prefers_open_duplicate() {
        let mut b = board();
        let first = b.on_add_task(Category::Special, "Dragon").unwrap();
        let second = b.on_add_task(Category::Special, "Dragon").unwrap();
        b.on_complete_task(Category::Special, first);
        assert_eq!(b.find_task(Category::Special, "Dragon"), Some(first));
        assert_eq!(b.find_pending_task(Category::Special, "Dragon"), Some(second));
    }

    #[test]
    fn custom_rewards_apply() {
        let mut config = GamifyConfig::default();
        config.rewards.special = 8;
        let mut b = Board::new(&config, now());
        let s = b.on_add_task(Category::Special, "Bake").unwrap();
        assert_eq!(
            b.apply(Intent::CompleteTask {
                category: Category::Special,
                id: s
            }),
            Outcome::Awarded(8)
        );
    }

    #[test]
    fn tick_into_next_day_reoffers_daily() {
        let mut b = board();
        let read = b.on_add_task(Category::Daily, "Read").unwrap();
        b.on_complete_task(Category::Daily, read);
        let tomorrow = now() + chrono::Duration::days(1);
        assert!(b.tick(tomorrow));
        assert_eq!(b.daily().pending_today().count(), 1);
        assert_eq!(b.on_complete_task(Category::Daily, read), Some(2));
        assert_eq!(b.score(), 4);
    }
}
