//! User Commands
//!
//! Bindings for `/api/users`: sign-up, login and key rotation.

use lost_found_core::api::wire::{self, WireSession};
use lost_found_core::domain::{ActionResult, Credentials, Session};

use super::{authorized, HttpBackend};

async fn read_session(http: &HttpBackend, request: reqwest::RequestBuilder) -> ActionResult<Session> {
    let (status, body) = http.send(request).await?;
    let session: WireSession = wire::read_data(status, &body)?;
    wire::session_from_wire(status, session)
}

pub async fn sign_up(http: &HttpBackend, credentials: &Credentials) -> ActionResult<Session> {
    let url = http.absolute(http.paths.signup());
    read_session(http, http.client.post(url).json(credentials)).await
}

pub async fn log_in(http: &HttpBackend, credentials: &Credentials) -> ActionResult<Session> {
    let url = http.absolute(http.paths.login());
    read_session(http, http.client.post(url).json(credentials)).await
}

/// Invalidate the current key and mint a new one for the same user
pub async fn rotate_key(http: &HttpBackend, session: &Session) -> ActionResult<Session> {
    let url = http.absolute(http.paths.rotate_key(&session.user_id));
    read_session(http, authorized(http.client.post(url), session)).await
}
