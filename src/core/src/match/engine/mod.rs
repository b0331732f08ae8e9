mod engine;
mod events;
mod possession;
mod state;

pub use engine::*;
pub use events::*;
pub use possession::*;
pub use state::*;
