//! Item Commands
//!
//! Bindings for `/api/items`.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use lost_found_core::api::wire::{self, WireItem};
use lost_found_core::domain::{ActionError, ActionResult, DraftPost, Item, ItemStatus, Session};

use super::{authorized, HttpBackend};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct StatusArgs {
    status: ItemStatus,
}

fn creation_form(draft: &DraftPost) -> ActionResult<Form> {
    let mut form = Form::new();
    for (name, value) in draft.form_fields() {
        form = form.text(name, value);
    }
    if let Some(image) = &draft.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| {
                log::warn!("rejecting image {:?}: {}", image.file_name, e);
                ActionError::Validation { fields: vec!["image"] }
            })?;
        form = form.part("image", part);
    }
    Ok(form)
}

// ========================
// Commands
// ========================

pub async fn list_items(http: &HttpBackend) -> ActionResult<Vec<Item>> {
    let url = http.absolute(http.paths.items());
    let (status, body) = http.send(http.client.get(url)).await?;
    let items: Vec<WireItem> = wire::read_data(status, &body)?;
    wire::items_from_wire(items)
}

pub async fn create_item(
    http: &HttpBackend,
    session: Option<&Session>,
    draft: &DraftPost,
) -> ActionResult<Item> {
    let url = http.absolute(http.paths.items());
    let mut request = http.client.post(url).multipart(creation_form(draft)?);
    if let Some(session) = session {
        request = authorized(request, session);
    }
    let (status, body) = http.send(request).await?;
    let created: WireItem = wire::read_data(status, &body)?;
    Item::try_from(created)
}

pub async fn resolve_item(http: &HttpBackend, session: &Session, id: &str) -> ActionResult<()> {
    let url = http.absolute(http.paths.item_status(id));
    let request = authorized(http.client.patch(url), session).json(&StatusArgs {
        status: ItemStatus::Resolved,
    });
    let (status, body) = http.send(request).await?;
    wire::read_ack(status, &body)
}

pub async fn delete_item(http: &HttpBackend, session: &Session, id: &str) -> ActionResult<()> {
    let url = http.absolute(http.paths.item(id));
    let (status, body) = http.send(authorized(http.client.delete(url), session)).await?;
    wire::read_ack(status, &body)
}
