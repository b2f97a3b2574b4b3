//! Infrastructure - concrete implementations of the domain ports

pub mod confirm;
pub mod store;

pub use confirm::InteractiveConfirmation;
pub use store::{JsonFileStore, MemoryStore};
