//! Property tests for Escala.
//!
//! Properties use randomized input generation to protect the structural
//! invariants of the ledger and the rotation calendar.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/ledger.rs"]
mod ledger;

#[path = "properties/rotation.rs"]
mod rotation;
