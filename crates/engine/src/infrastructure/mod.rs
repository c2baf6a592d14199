//! Infrastructure - port traits and the adapters that implement them.

pub mod config;
pub mod dictionary;
pub mod locks;
pub mod memory;
pub mod ports;
pub mod random;
pub mod timed_store;
