//! API request handlers.

mod anomalies;
mod costs;
mod events;
mod status;
mod summary;

pub use anomalies::*;
pub use costs::*;
pub use events::*;
pub use status::*;
pub use summary::*;
