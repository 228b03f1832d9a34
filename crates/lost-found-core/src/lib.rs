//! Lost & Found Core
//!
//! Platform-neutral logic of the lost & found board:
//! - domain: items, sessions, drafts, filters, errors
//! - api: path resolution, wire decoding, the backend trait
//! - repository: item cache, board, session persistence
//! - filter: the visible-items engine
//! - coordinator: confirm-then-update actions

pub mod api;
pub mod coordinator;
pub mod domain;
pub mod filter;
pub mod lifetime;
pub mod repository;

#[cfg(test)]
mod testing;

pub use coordinator::{ActionCoordinator, ActionKind, Confirmed};
pub use filter::visible;
pub use lifetime::ViewLifetime;
