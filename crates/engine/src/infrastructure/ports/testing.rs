//! Testability port for injecting randomness.

use uuid::Uuid;

// =============================================================================
// Testability Ports
// =============================================================================

pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
    fn gen_uuid(&self) -> Uuid;
}
