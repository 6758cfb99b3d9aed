pub mod board;
pub mod counter_ops;
pub mod daily_ops;
pub mod item_list;
pub mod nav;
pub mod quest_ops;

pub use board::{Board, Intent, Outcome};
