mod config;
mod console;
mod error;
mod game;
mod instructions;
mod player;
mod turn;
pub use config::*;
pub use console::*;
pub use error::*;
pub use game::*;
pub use instructions::*;
pub use player::*;
pub use turn::*;
