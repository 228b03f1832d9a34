//! Backend Port
//!
//! The REST surface the client consumes. The browser build talks HTTP;
//! tests plug in an in-memory fake.

use async_trait::async_trait;

use crate::domain::{ActionResult, Credentials, DraftPost, Item, Session};

/// One method per endpoint, one request per call
///
/// Futures are `?Send`: everything runs on the single UI thread.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /api/items`
    async fn list_items(&self) -> ActionResult<Vec<Item>>;

    /// `POST /api/items` (multipart); bearer sent when `session` is present
    async fn create_item(&self, session: Option<&Session>, draft: &DraftPost) -> ActionResult<Item>;

    /// `PATCH /api/items/{id}/status` with `{"status":"resolved"}`
    async fn resolve_item(&self, session: &Session, id: &str) -> ActionResult<()>;

    /// `DELETE /api/items/{id}`
    async fn delete_item(&self, session: &Session, id: &str) -> ActionResult<()>;

    /// `POST /api/users/signup`
    async fn sign_up(&self, credentials: &Credentials) -> ActionResult<Session>;

    /// `POST /api/users/login`
    async fn log_in(&self, credentials: &Credentials) -> ActionResult<Session>;

    /// `POST /api/users/{id}/rotate-key`
    async fn rotate_key(&self, session: &Session) -> ActionResult<Session>;
}
