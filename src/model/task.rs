use serde::{Deserialize, Serialize};

/// Task identifier, unique within its list. Two tasks may share a name; they never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Task category (which list a task lives in)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Daily,
    Special,
    HighLevel,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Daily, Category::Special, Category::HighLevel];

    /// Human-readable card title
    pub fn label(self) -> &'static str {
        match self {
            Category::Daily => "Daily Quests",
            Category::Special => "Special",
            Category::HighLevel => "High Level",
        }
    }

    /// Parse a category keyword as written in scripts (`daily`, `special`, `high`)
    pub fn parse(s: &str) -> Option<Category> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "d" => Some(Category::Daily),
            "special" | "s" => Some(Category::Special),
            "high" | "high-level" | "high_level" | "highlevel" | "h" => Some(Category::HighLevel),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Daily => write!(f, "daily"),
            Category::Special => write!(f, "special"),
            Category::HighLevel => write!(f, "high"),
        }
    }
}

/// Something a user can tick off.
///
/// Permanent quests answer from their own `done` flag. Daily quests carry no
/// flag at all; their answer comes from the day's completion set, so they are
/// only `Completable` through a [`DailyEntry`] view.
pub trait Completable {
    fn name(&self) -> &str;
    fn is_pending(&self) -> bool;
}

/// A special or high-level quest. Completion is permanent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentTask {
    pub id: TaskId,
    pub name: String,
    pub done: bool,
}

impl PermanentTask {
    pub fn new(id: TaskId, name: String) -> Self {
        PermanentTask {
            id,
            name,
            done: false,
        }
    }
}

impl Completable for PermanentTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_pending(&self) -> bool {
        !self.done
    }
}

/// A daily quest. Re-offered every daily cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    pub id: TaskId,
    pub name: String,
}

impl DailyTask {
    pub fn new(id: TaskId, name: String) -> Self {
        DailyTask { id, name }
    }
}

/// A daily task paired with whether its name is in today's completion set
#[derive(Debug, Clone, Copy)]
pub struct DailyEntry<'a> {
    pub task: &'a DailyTask,
    pub completed_today: bool,
}

impl Completable for DailyEntry<'_> {
    fn name(&self) -> &str {
        &self.task.name
    }

    fn is_pending(&self) -> bool {
        !self.completed_today
    }
}

impl From<u32> for TaskId {
    fn from(raw: u32) -> Self {
        TaskId(raw)
    }
}

/// Items stored in an ordered, id-addressed list
pub trait Listed {
    type Id: Copy + Eq + From<u32>;

    /// Build a fresh item (pending, zeroed) with the given id and name
    fn create(id: Self::Id, name: String) -> Self;
    fn item_id(&self) -> Self::Id;
    fn item_name(&self) -> &str;
}

impl Listed for PermanentTask {
    type Id = TaskId;

    fn create(id: TaskId, name: String) -> Self {
        PermanentTask::new(id, name)
    }
    fn item_id(&self) -> TaskId {
        self.id
    }
    fn item_name(&self) -> &str {
        &self.name
    }
}

impl Listed for DailyTask {
    type Id = TaskId;

    fn create(id: TaskId, name: String) -> Self {
        DailyTask::new(id, name)
    }
    fn item_id(&self) -> TaskId {
        self.id
    }
    fn item_name(&self) -> &str {
        &self.name
    }
}
