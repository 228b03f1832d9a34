//! Item Entity
//!
//! One lost/found report as held by the client-side cache.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::session::Session;

/// Server-assigned identifier. Immutable once assigned.
pub type ItemId = String;

/// Whether the report is about something lost or something found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Lost,
    Found,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lost" => Some(ItemKind::Lost),
            "found" => Some(ItemKind::Found),
            _ => None,
        }
    }
}

/// Item lifecycle status
///
/// Only `Active -> Resolved` is reachable from the client. Unknown values
/// coming from newer servers are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    #[default]
    Active,
    Resolved,
    Other(String),
}

impl ItemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Resolved => "resolved",
            ItemStatus::Other(s) => s,
        }
    }
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => ItemStatus::Active,
            "resolved" => ItemStatus::Resolved,
            _ => ItemStatus::Other(s),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        status.as_str().to_string()
    }
}

/// How the poster can be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
}

impl ContactKind {
    pub fn of(contact: &str) -> Self {
        if contact.contains('@') {
            ContactKind::Email
        } else {
            ContactKind::Phone
        }
    }

    /// Link target for the contact string (`mailto:` / `tel:`)
    pub fn href(&self, contact: &str) -> String {
        match self {
            ContactKind::Email => format!("mailto:{}", contact.trim()),
            ContactKind::Phone => {
                let digits: String = contact
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                format!("tel:{}", digits)
            }
        }
    }
}

/// Identity of the user who posted an item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A lost/found report
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub category: String,
    pub title: String,
    pub description: String,
    /// Day the item was lost or found
    pub date: NaiveDate,
    pub location: String,
    pub image: Option<String>,
    pub contact: String,
    pub status: ItemStatus,
    pub reward: Option<String>,
    pub owner: Option<Owner>,
}

impl Item {
    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }

    pub fn contact_kind(&self) -> ContactKind {
        ContactKind::of(&self.contact)
    }

    /// True when the session's identity is this item's recorded owner.
    /// Items without an owner belong to nobody.
    pub fn is_owned_by(&self, session: &Session) -> bool {
        self.owner
            .as_ref()
            .is_some_and(|owner| !owner.id.is_empty() && owner.id == session.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user_id: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            api_key: "key".to_string(),
        }
    }

    fn item(owner: Option<&str>) -> Item {
        Item {
            id: "1".to_string(),
            kind: ItemKind::Lost,
            category: "Keys".to_string(),
            title: "Car keys".to_string(),
            description: "Blue keyring".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            location: "Library".to_string(),
            image: None,
            contact: "555-0100".to_string(),
            status: ItemStatus::Active,
            reward: None,
            owner: owner.map(|id| Owner {
                id: id.to_string(),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_status_keeps_unknown_values() {
        let status: ItemStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, ItemStatus::Other("archived".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"archived\"");
        assert_eq!(ItemStatus::from("resolved".to_string()), ItemStatus::Resolved);
    }

    #[test]
    fn test_contact_kind() {
        assert_eq!(ContactKind::of("someone@example.com"), ContactKind::Email);
        assert_eq!(ContactKind::of("+1 555 0100"), ContactKind::Phone);
        assert_eq!(ContactKind::Phone.href("+1 (555) 0100"), "tel:+15550100");
        assert_eq!(ContactKind::Email.href(" a@b.c "), "mailto:a@b.c");
    }

    #[test]
    fn test_ownership() {
        assert!(item(Some("u1")).is_owned_by(&session("u1")));
        assert!(!item(Some("u2")).is_owned_by(&session("u1")));
        assert!(!item(None).is_owned_by(&session("u1")));
        assert!(!item(Some("")).is_owned_by(&session("")));
    }

    #[test]
    fn test_kind_round_trip_names() {
        assert_eq!(ItemKind::from_str("found"), Some(ItemKind::Found));
        assert_eq!(ItemKind::from_str("all"), None);
        assert_eq!(ItemKind::Lost.as_str(), "lost");
    }
}
