//! API Layer
//!
//! Path resolution, wire decoding and the backend trait.

mod backend;
mod path;
pub mod wire;

pub use backend::Backend;
pub use path::{encode_segment, resolve, ApiPaths};
