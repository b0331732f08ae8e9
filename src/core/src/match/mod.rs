mod day;
pub mod engine;
mod game;
mod result;
pub mod squad;

pub use day::*;
pub use engine::*;
pub use game::*;
pub use result::*;
pub use squad::*;
