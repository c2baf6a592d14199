//! In-memory adapters - the process is the database.

mod game_store;
mod word_list;

pub use game_store::InMemoryGameStore;
pub use word_list::{WordList, WordListError};
