use tracing::info;

use crate::model::tab::Tab;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    selected: Tab,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tab {
        self.selected
    }

    /// Select a tab by index. Out-of-range indices leave the state unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        match Tab::from_index(index) {
            Some(tab) => {
                self.select_tab(tab);
                true
            }
            None => false,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.selected {
            info!(from = %self.selected, to = %tab, "tab selected");
        }
        self.selected = tab;
    }

    /// Next tab, wrapping from the last to the first
    pub fn next(&mut self) {
        let idx = (self.selected.index() + 1) % Tab::ALL.len();
        self.select(idx);
    }

    /// Previous tab, wrapping from the first to the last
    pub fn prev(&mut self) {
        let len = Tab::ALL.len();
        let idx = (self.selected.index() + len - 1) % len;
        self.select(idx);
    }
}
