mod groups;
mod league;
mod promotion;
mod result;
mod schedule;
mod settings;
mod table;

pub use groups::*;
pub use league::*;
pub use promotion::*;
pub use result::*;
pub use schedule::*;
pub use settings::*;
pub use table::*;
