pub mod console;
pub mod games;
pub mod menu;

pub use console::{Console, GameError};
pub use games::GameEntry;
