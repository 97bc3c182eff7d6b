pub mod config;
pub mod error;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use store::{AttendeeStore, StoreFile};
pub use shared::{models::*, summary::*};

#[cfg(test)]
mod tests;
