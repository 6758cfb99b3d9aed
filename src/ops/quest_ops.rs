use crate::model::score::ScoreLedger;
use crate::model::task::{Completable, PermanentTask, TaskId};

use super::item_list::ItemList;

/// Special and high-level quests: completion is a permanent flag on the task
pub type QuestList = ItemList<PermanentTask>;

impl ItemList<PermanentTask> {
    /// Quests not yet completed, in insertion order
    pub fn pending(&self) -> impl Iterator<Item = &PermanentTask> + '_ {
        self.iter().filter(|t| t.is_pending())
    }

    /// Quests already completed (kept in the list, hidden from the pending view)
    pub fn completed(&self) -> impl Iterator<Item = &PermanentTask> + '_ {
        self.iter().filter(|t| !t.is_pending())
    }

    /// Mark a quest done and award `reward` points.
    ///
    /// Returns the points awarded, or `None` if the quest is absent or was
    /// already done. Only the false → true transition scores.
    pub fn complete(&mut self, id: TaskId, reward: u32, ledger: &mut ScoreLedger) -> Option<u32> {
        let task = self.get_mut(id)?;
        if task.done {
            return None;
        }
        task.done = true;
        ledger.award(reward);
        Some(reward)
    }

    /// First pending quest with this name
    pub fn find_pending_named(&self, name: &str) -> Option<&PermanentTask> {
        self.pending().find(|t| t.name == name)
    }
}
