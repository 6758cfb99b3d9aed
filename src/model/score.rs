use serde::{Deserialize, Serialize};

/// The point total. `award` is the only way to change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreLedger {
    total: u64,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` points. Saturates instead of wrapping.
    pub fn award(&mut self, amount: u32) {
        self.total = self.total.saturating_add(u64::from(amount));
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
