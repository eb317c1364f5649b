mod engine;
mod game;
mod player;
pub use engine::*;
pub use game::*;
pub use player::*;
