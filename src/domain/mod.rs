//! Domain layer
//!
//! Entities own the state, value objects carry the vocabulary, services
//! hold the pure calculations, ports declare what the core needs from
//! infrastructure.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
