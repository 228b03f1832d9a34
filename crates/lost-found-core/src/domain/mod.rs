//! Domain Layer
//!
//! Entities and value types shared by every other layer.
//! No I/O happens here.

mod category;
mod draft;
mod error;
mod filter;
mod item;
mod session;

pub use category::{is_known_category, CATEGORIES};
pub use draft::{DraftPost, ImageUpload};
pub use error::{ActionError, ActionResult, ErrorKind};
pub use filter::{CategoryFilter, Filter, TypeFilter};
pub use item::{ContactKind, Item, ItemId, ItemKind, ItemStatus, Owner};
pub use session::{Credentials, Session};
