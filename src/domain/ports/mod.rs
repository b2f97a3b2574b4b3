//! Ports - interfaces the core requires from the outside world
//!
//! Two collaborators: a synchronous key-value JSON store and a yes/no
//! confirmation prompt for destructive decisions. Infrastructure provides
//! the real implementations; tests substitute in-memory ones.

mod confirmation;
mod store;

pub use confirmation::{AlwaysConfirm, ConfirmationPrompt, NeverConfirm};
pub use store::{keys, StateStore, StoreError};
