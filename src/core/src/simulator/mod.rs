mod season;
mod snapshot;
mod statistics;

pub use season::*;
pub use snapshot::*;
pub use statistics::*;
