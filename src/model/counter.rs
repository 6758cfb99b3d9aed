use serde::{Deserialize, Serialize};

use super::task::Listed;

/// Counter identifier, unique within the counter list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterId(pub u32);

impl std::fmt::Display for CounterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named tally. Unbounded in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterItem {
    pub id: CounterId,
    pub name: String,
    pub count: i64,
}

impl CounterItem {
    pub fn new(id: CounterId, name: String) -> Self {
        CounterItem { id, name, count: 0 }
    }
}

impl From<u32> for CounterId {
    fn from(raw: u32) -> Self {
        CounterId(raw)
    }
}

impl Listed for CounterItem {
    type Id = CounterId;

    fn create(id: CounterId, name: String) -> Self {
        CounterItem::new(id, name)
    }
    fn item_id(&self) -> CounterId {
        self.id
    }
    fn item_name(&self) -> &str {
        &self.name
    }
}
