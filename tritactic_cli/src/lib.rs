mod game;
mod input;
pub use game::*;
pub use input::*;
