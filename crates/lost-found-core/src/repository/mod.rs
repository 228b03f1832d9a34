//! Repository Layer
//!
//! Client-side state: the item cache, the selection board and session
//! persistence.

mod board;
mod item_repo;
mod session_store;
mod traits;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use item_repo::ItemRepository;
pub use session_store::{SessionStore, SESSION_KEY};
pub use traits::{KeyValueStorage, MemoryStorage, StorageError};
