pub mod config;
pub mod counter;
pub mod score;
pub mod tab;
pub mod task;

pub use config::*;
pub use counter::*;
pub use score::*;
pub use tab::*;
pub use task::*;
