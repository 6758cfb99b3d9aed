use serde::{Deserialize, Serialize};

/// Top-level screens, in tab-bar order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Daily,
    Quests,
    Map,
    Counter,
    Personalize,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Daily,
        Tab::Quests,
        Tab::Map,
        Tab::Counter,
        Tab::Personalize,
    ];

    /// Position in the tab bar (0-based)
    pub fn index(self) -> usize {
        match self {
            Tab::Daily => 0,
            Tab::Quests => 1,
            Tab::Map => 2,
            Tab::Counter => 3,
            Tab::Personalize => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    /// Screen title shown in the tab bar
    pub fn title(self) -> &'static str {
        match self {
            Tab::Daily => "Daily Quests",
            Tab::Quests => "Quests",
            Tab::Map => "Map",
            Tab::Counter => "Counter",
            Tab::Personalize => "Personalize",
        }
    }

    /// Parse either a tab index (`2`) or a tab name (`map`)
    pub fn parse(s: &str) -> Option<Tab> {
        if let Ok(idx) = s.parse::<usize>() {
            return Tab::from_index(idx);
        }
        match s.to_ascii_lowercase().as_str() {
            "daily" => Some(Tab::Daily),
            "quests" => Some(Tab::Quests),
            "map" => Some(Tab::Map),
            "counter" | "counters" => Some(Tab::Counter),
            "personalize" => Some(Tab::Personalize),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
