//! Backend Command Wrappers
//!
//! HTTP bindings to the lost & found REST API, organized by domain.

mod item;
mod user;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use lost_found_core::api::{ApiPaths, Backend};
use lost_found_core::domain::{ActionError, ActionResult, Credentials, DraftPost, Item, Session};

use crate::config::Config;

/// REST client bound to one API base
pub struct HttpBackend {
    client: Client,
    paths: ApiPaths,
    /// `window.location.origin`, prefixed to root-relative URLs
    origin: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self {
            client: Client::new(),
            paths: ApiPaths::new(config.api_base.clone()),
            origin,
        }
    }

    /// fetch needs absolute URLs
    fn absolute(&self, resolved: String) -> String {
        if resolved.starts_with('/') {
            format!("{}{}", self.origin, resolved)
        } else {
            resolved
        }
    }

    /// Send one request; returns the status and raw body
    async fn send(&self, request: RequestBuilder) -> ActionResult<(u16, String)> {
        let response = request
            .send()
            .await
            .map_err(|e| ActionError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ActionError::Network(e.to_string()))?;
        log::debug!("<- {} ({} bytes)", status, body.len());
        Ok((status, body))
    }
}

fn authorized(request: RequestBuilder, session: &Session) -> RequestBuilder {
    request.bearer_auth(&session.api_key)
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn list_items(&self) -> ActionResult<Vec<Item>> {
        item::list_items(self).await
    }

    async fn create_item(&self, session: Option<&Session>, draft: &DraftPost) -> ActionResult<Item> {
        item::create_item(self, session, draft).await
    }

    async fn resolve_item(&self, session: &Session, id: &str) -> ActionResult<()> {
        item::resolve_item(self, session, id).await
    }

    async fn delete_item(&self, session: &Session, id: &str) -> ActionResult<()> {
        item::delete_item(self, session, id).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> ActionResult<Session> {
        user::sign_up(self, credentials).await
    }

    async fn log_in(&self, credentials: &Credentials) -> ActionResult<Session> {
        user::log_in(self, credentials).await
    }

    async fn rotate_key(&self, session: &Session) -> ActionResult<Session> {
        user::rotate_key(self, session).await
    }
}
