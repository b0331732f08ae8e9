mod builder;
mod collection;
mod morale;
mod strength;
mod team;

pub use builder::*;
pub use collection::*;
pub use morale::*;
pub use strength::*;
pub use team::*;
