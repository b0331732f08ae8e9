pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod simulator;
pub mod utils;

pub use club::*;
pub use error::*;
pub use league::*;
pub use r#match::*;
pub use simulator::*;
pub use utils::*;
