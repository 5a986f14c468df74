pub mod config;
pub mod error;
pub mod types;

pub use config::ConciergeConfig;
pub use error::{ConciergeError, Result};
pub use types::AvailabilityQuery;
