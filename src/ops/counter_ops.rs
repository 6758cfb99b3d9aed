use crate::model::counter::{CounterId, CounterItem};

use super::item_list::ItemList;

pub type CounterList = ItemList<CounterItem>;

impl ItemList<CounterItem> {
    /// Add one. Returns the new count, or `None` if the counter is absent.
    pub fn increment(&mut self, id: CounterId) -> Option<i64> {
        let counter = self.get_mut(id)?;
        counter.count = counter.count.saturating_add(1);
        Some(counter.count)
    }

    /// Subtract one. Counts may go negative.
    pub fn decrement(&mut self, id: CounterId) -> Option<i64> {
        let counter = self.get_mut(id)?;
        counter.count = counter.count.saturating_sub(1);
        Some(counter.count)
    }
}
