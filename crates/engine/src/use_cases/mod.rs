//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across ports to fulfill user stories.

pub mod play;
pub mod session;
pub mod word;

// Re-export main types
pub use play::PlayUseCases;
pub use session::SessionUseCases;
