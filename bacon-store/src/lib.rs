// Library exports for bacon-store
// The CLI drives these modules directly; there is no server in between

pub mod config;
pub mod db;
pub mod error;
pub mod platform;
pub mod state;

pub use error::{StoreError, StoreResult};
