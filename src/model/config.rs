use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::task::Category;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamifyConfig {
    #[serde(default)]
    pub rewards: RewardConfig,
    #[serde(default)]
    pub daily: DailyConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Points awarded per completed quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    #[serde(default = "default_daily_reward")]
    pub daily: u32,
    #[serde(default = "default_special_reward")]
    pub special: u32,
    #[serde(default = "default_high_level_reward")]
    pub high_level: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig {
            daily: default_daily_reward(),
            special: default_special_reward(),
            high_level: default_high_level_reward(),
        }
    }
}

impl RewardConfig {
    pub fn for_category(&self, category: Category) -> u32 {
        match category {
            Category::Daily => self.daily,
            Category::Special => self.special,
            Category::HighLevel => self.high_level,
        }
    }
}

fn default_daily_reward() -> u32 {
    2
}

fn default_special_reward() -> u32 {
    5
}

fn default_high_level_reward() -> u32 {
    10
}

/// When the daily completion set is cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetPolicy {
    /// Clear whenever the local day (shifted by `day_start_hour`) changes
    #[default]
    Rollover,
    /// Keep completions for the lifetime of the process
    Session,
}

impl std::fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetPolicy::Rollover => write!(f, "rollover"),
            ResetPolicy::Session => write!(f, "session"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyConfig {
    #[serde(default)]
    pub reset: ResetPolicy,
    /// Hour (0-23) at which a new day starts. 4 means 03:59 still counts as yesterday.
    #[serde(default)]
    pub day_start_hour: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (`background`, `highlight`, ...)
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: IndexMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
