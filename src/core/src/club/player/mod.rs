mod builder;
mod player;
mod position;

pub use builder::*;
pub use player::*;
pub use position::*;
