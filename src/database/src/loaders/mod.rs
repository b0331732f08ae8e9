mod championship;
mod names;
mod team;

pub use championship::*;
pub use names::*;
pub use team::*;
