//! Wordgrid Protocol - wire types between the game server and its clients
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde
//! 2. **No business logic** - pure data types and serialization
//! 3. **Field names are the contract** - renames here break deployed clients
//! 4. **No domain IDs** - ids travel as plain strings

pub mod requests;
pub mod responses;

pub use requests::{DeleteRequest, NewGameRequest, PlayRequest, TileLocationData};
pub use responses::{ErrorResponse, GameResponse, PlayResponse};
