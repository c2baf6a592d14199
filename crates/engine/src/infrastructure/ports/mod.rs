//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Game storage (could swap the in-memory map for a document database)
//! - Word lists (could swap a bundled file for a remote catalogue)
//! - Word validation (could swap the local list for a dictionary API)
//! - Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{GameStore, WordStore};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{WordCheck, WordValidator};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockGameStore, MockWordStore};

#[cfg(test)]
pub use external::MockWordValidator;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::RandomPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
