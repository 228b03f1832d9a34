//! Wire Format
//!
//! Response envelopes and the server's item/session shapes. Identifier
//! aliases (`_id`, `userId`, ...) are resolved here and nowhere else.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{ActionError, Item, ItemKind, ItemStatus, Owner, Session};

/// `{success, data, message}` envelope wrapping every response
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

/// Decode a response body, mapping failures onto the error taxonomy
pub fn read_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ActionError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|m| !m.trim().is_empty());
        return Err(ActionError::from_status(status, message));
    }

    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| {
        log::warn!("malformed response body ({}): {}", status, e);
        ActionError::server(Some(status), "the server sent an unreadable response")
    })?;
    if !envelope.success {
        return Err(ActionError::server(
            Some(status),
            envelope
                .message
                .unwrap_or_else(|| "the server rejected the request".to_string()),
        ));
    }
    Ok(envelope)
}

/// Like `read_envelope`, but `data` must be present
pub fn read_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ActionError> {
    read_envelope::<T>(status, body)?
        .data
        .ok_or_else(|| ActionError::server(Some(status), "the server response had no data"))
}

/// Confirmation-only responses (`{success}`)
pub fn read_ack(status: u16, body: &str) -> Result<(), ActionError> {
    read_envelope::<serde_json::Value>(status, body).map(|_| ())
}

// ========================
// Items
// ========================

#[derive(Debug, Deserialize)]
pub struct WireOwner {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub object_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Owner either populated or as a bare id
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireOwnerRef {
    Id(String),
    Profile(WireOwner),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub object_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub reward: Option<String>,
    #[serde(default, alias = "user", alias = "postedBy")]
    pub owner: Option<WireOwnerRef>,
    #[serde(default, alias = "userId")]
    pub owner_id: Option<String>,
}

/// Accepts `YYYY-MM-DD` and ISO timestamps (date part kept)
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Servers may send `id`, `_id` or both; `id` wins when both are set
fn either_id(id: Option<String>, object_id: Option<String>) -> Option<String> {
    non_blank(id).or_else(|| non_blank(object_id))
}

impl TryFrom<WireItem> for Item {
    type Error = ActionError;

    fn try_from(wire: WireItem) -> Result<Self, Self::Error> {
        let id = either_id(wire.id, wire.object_id)
            .ok_or_else(|| ActionError::server(None, "the server sent an item without an id"))?;
        let date = parse_date(&wire.date).ok_or_else(|| {
            ActionError::server(None, format!("item {} has an invalid date {:?}", id, wire.date))
        })?;
        let owner = match wire.owner {
            Some(WireOwnerRef::Profile(p)) => either_id(p.id, p.object_id).map(|id| Owner {
                id,
                name: p.name,
                email: p.email,
            }),
            Some(WireOwnerRef::Id(id)) => Some(Owner {
                id,
                ..Default::default()
            }),
            None => wire.owner_id.map(|id| Owner {
                id,
                ..Default::default()
            }),
        };
        Ok(Item {
            id,
            kind: wire.kind,
            category: wire.category,
            title: wire.title,
            description: wire.description,
            date,
            location: wire.location,
            image: non_blank(wire.image),
            contact: wire.contact,
            status: wire.status,
            reward: non_blank(wire.reward),
            owner,
        })
    }
}

/// Convert a fetched list. One malformed entry fails the whole fetch so the
/// cache is never replaced by a partial list.
pub fn items_from_wire(wire: Vec<WireItem>) -> Result<Vec<Item>, ActionError> {
    wire.into_iter().map(Item::try_from).collect()
}

// ========================
// Sessions
// ========================

/// Session as sent by the server and as persisted locally
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSession {
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub api_key: String,
}

impl WireSession {
    /// `None` when a required field is blank
    pub fn into_session(self) -> Option<Session> {
        let user_id = non_blank(Some(self.user_id)).or_else(|| either_id(self.id, self.object_id))?;
        if self.email.trim().is_empty() || self.api_key.trim().is_empty() {
            return None;
        }
        Some(Session {
            user_id,
            name: self.name,
            email: self.email,
            api_key: self.api_key,
        })
    }
}

impl From<&Session> for WireSession {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.clone(),
            id: None,
            object_id: None,
            name: session.name.clone(),
            email: session.email.clone(),
            api_key: session.api_key.clone(),
        }
    }
}

pub fn session_from_wire(status: u16, wire: WireSession) -> Result<Session, ActionError> {
    wire.into_session()
        .ok_or_else(|| ActionError::server(Some(status), "the server returned an incomplete session"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    #[test]
    fn test_item_aliases() {
        let body = r#"{"success":true,"data":[
            {"_id":"a1","type":"lost","category":"Keys","title":"Keys","description":"d",
             "date":"2024-04-02T00:00:00.000Z","location":"Gym","imageUrl":"",
             "contact":"x@y.z","status":"active","reward":"","user":{"_id":"u1","name":"Bo","email":"bo@x"}},
            {"id":"a2","type":"found","date":"2024-04-03","status":"resolved","ownerId":"u2"},
            {"id":"a3","type":"found","date":"2024-04-04","owner":"u3"}
        ]}"#;
        let wire: Vec<WireItem> = read_data(200, body).unwrap();
        let items = items_from_wire(wire).unwrap();

        assert_eq!(items[0].id, "a1");
        assert_eq!(items[0].date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        assert_eq!(items[0].image, None);
        assert_eq!(items[0].reward, None);
        assert_eq!(items[0].owner.as_ref().unwrap().name, "Bo");
        assert_eq!(items[1].owner.as_ref().unwrap().id, "u2");
        assert_eq!(items[1].status, ItemStatus::Resolved);
        assert_eq!(items[2].owner.as_ref().unwrap().id, "u3");
        assert_eq!(items[2].status, ItemStatus::Active);
    }

    #[test]
    fn test_both_id_keys_present() {
        let body = r#"{"success":true,"data":[
            {"_id":"a1","id":"a1","type":"lost","date":"2024-04-02",
             "owner":{"_id":"u1","id":"u1","name":"Bo"}},
            {"_id":"a2","id":"","type":"found","date":"2024-04-03"}
        ]}"#;
        let wire: Vec<WireItem> = read_data(200, body).unwrap();
        let items = items_from_wire(wire).unwrap();
        assert_eq!(items[0].id, "a1");
        assert_eq!(items[0].owner.as_ref().unwrap().id, "u1");
        assert_eq!(items[1].id, "a2");

        let wire: WireSession = serde_json::from_str(
            r#"{"_id":"u7","id":"u7","name":"Ada","email":"a@x","apiKey":"k"}"#,
        )
        .unwrap();
        assert_eq!(session_from_wire(200, wire).unwrap().user_id, "u7");
    }

    #[test]
    fn test_item_without_any_id_is_rejected() {
        let body = r#"{"success":true,"data":[{"type":"lost","date":"2024-04-02"}]}"#;
        let wire: Vec<WireItem> = read_data(200, body).unwrap();
        assert_eq!(items_from_wire(wire).unwrap_err().kind(), ErrorKind::Server);
    }

    #[test]
    fn test_empty_list_is_success() {
        let wire: Vec<WireItem> = read_data(200, r#"{"success":true,"data":[]}"#).unwrap();
        assert!(wire.is_empty());
    }

    #[test]
    fn test_bad_date_fails_whole_list() {
        let body = r#"{"success":true,"data":[{"id":"1","type":"lost","date":"yesterday"}]}"#;
        let wire: Vec<WireItem> = read_data(200, body).unwrap();
        assert_eq!(items_from_wire(wire).unwrap_err().kind(), ErrorKind::Server);
    }

    #[test]
    fn test_error_statuses() {
        let err = read_ack(403, r#"{"success":false,"message":"Not your item"}"#).unwrap_err();
        assert_eq!(err, ActionError::Forbidden("Not your item".to_string()));

        let err = read_ack(404, "<html>gone</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = read_ack(502, r#"{"error":"upstream down"}"#).unwrap_err();
        assert_eq!(err, ActionError::server(Some(502), "upstream down"));
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let err = read_ack(200, r#"{"success":false,"message":"Title required"}"#).unwrap_err();
        assert_eq!(err, ActionError::server(Some(200), "Title required"));

        let err = read_data::<WireSession>(200, r#"{"success":true}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);

        let err = read_ack(200, "not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn test_session_shapes() {
        let wire: WireSession =
            serde_json::from_str(r#"{"_id":"u1","name":"Ada","email":"a@x","apiKey":"k"}"#).unwrap();
        let session = session_from_wire(200, wire).unwrap();
        assert_eq!(session.user_id, "u1");

        let stored = serde_json::to_value(WireSession::from(&session)).unwrap();
        assert_eq!(stored["userId"], "u1");
        assert_eq!(stored["apiKey"], "k");
        assert!(stored.get("_id").is_none());

        let wire: WireSession = serde_json::from_str(r#"{"userId":"u1","email":"a@x"}"#).unwrap();
        assert!(session_from_wire(200, wire).is_err());
    }
}
