//! Test support: builders and an in-memory backend that behaves like the
//! real server (ownership checks, id assignment, not-found).

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::Backend;
use crate::domain::{
    ActionError, ActionResult, Credentials, DraftPost, Item, ItemKind, ItemStatus, Owner, Session,
};

pub fn session(user_id: &str) -> Session {
    Session {
        user_id: user_id.to_string(),
        name: format!("User {}", user_id),
        email: format!("{}@example.com", user_id),
        api_key: format!("key-{}", user_id),
    }
}

pub fn item(id: &str, kind: ItemKind, category: &str, status: ItemStatus) -> Item {
    Item {
        id: id.to_string(),
        kind,
        category: category.to_string(),
        title: format!("Item {}", id),
        description: "No description".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        location: "Campus".to_string(),
        image: None,
        contact: "555-0100".to_string(),
        status,
        reward: None,
        owner: None,
    }
}

pub fn owned_item(id: &str, owner_id: &str) -> Item {
    let mut item = item(id, ItemKind::Lost, "Keys", ItemStatus::Active);
    item.owner = Some(Owner {
        id: owner_id.to_string(),
        name: format!("User {}", owner_id),
        email: format!("{}@example.com", owner_id),
    });
    item
}

#[derive(Default)]
pub struct FakeBackend {
    items: RefCell<Vec<Item>>,
    calls: RefCell<Vec<String>>,
    fail_next: RefCell<Option<ActionError>>,
    next_id: Cell<u32>,
    rotations: Cell<u32>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(99),
            ..Default::default()
        }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let backend = Self::new();
        *backend.items.borrow_mut() = items;
        backend
    }

    /// Make the next request fail with `err`
    pub fn fail_next(&self, err: ActionError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    /// Requests received so far, e.g. `"DELETE 1"`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn server_items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    fn record(&self, call: String) -> ActionResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn owned_position(&self, session: &Session, id: &str) -> ActionResult<usize> {
        let items = self.items.borrow();
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ActionError::NotFound("Item not found".to_string()))?;
        if !items[index].is_owned_by(session) {
            return Err(ActionError::Forbidden("Not authorized".to_string()));
        }
        Ok(index)
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn list_items(&self) -> ActionResult<Vec<Item>> {
        self.record("GET items".to_string())?;
        Ok(self.items.borrow().clone())
    }

    async fn create_item(&self, session: Option<&Session>, draft: &DraftPost) -> ActionResult<Item> {
        self.record(format!("POST items {}", draft.title))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let item = Item {
            id: id.to_string(),
            kind: draft.kind,
            category: draft.category.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date,
            location: draft.location.clone(),
            image: draft.image.as_ref().map(|img| format!("/uploads/{}", img.file_name)),
            contact: draft.contact.clone(),
            status: ItemStatus::Active,
            reward: Some(draft.reward.clone()).filter(|r| !r.is_empty()),
            owner: session.map(|s| Owner {
                id: s.user_id.clone(),
                name: s.name.clone(),
                email: s.email.clone(),
            }),
        };
        self.items.borrow_mut().insert(0, item.clone());
        Ok(item)
    }

    async fn resolve_item(&self, session: &Session, id: &str) -> ActionResult<()> {
        self.record(format!("PATCH {}", id))?;
        let index = self.owned_position(session, id)?;
        self.items.borrow_mut()[index].status = ItemStatus::Resolved;
        Ok(())
    }

    async fn delete_item(&self, session: &Session, id: &str) -> ActionResult<()> {
        self.record(format!("DELETE {}", id))?;
        let index = self.owned_position(session, id)?;
        self.items.borrow_mut().remove(index);
        Ok(())
    }

    async fn sign_up(&self, credentials: &Credentials) -> ActionResult<Session> {
        self.record(format!("SIGNUP {}", credentials.email))?;
        let mut created = session("new");
        created.email = credentials.email.clone();
        created.name = credentials.name.clone().unwrap_or_default();
        Ok(created)
    }

    async fn log_in(&self, credentials: &Credentials) -> ActionResult<Session> {
        self.record(format!("LOGIN {}", credentials.email))?;
        if credentials.password.as_deref() != Some("secret") {
            return Err(ActionError::Unauthorized("Invalid credentials".to_string()));
        }
        let mut found = session("u1");
        found.email = credentials.email.clone();
        Ok(found)
    }

    async fn rotate_key(&self, current: &Session) -> ActionResult<Session> {
        self.record(format!("ROTATE {}", current.user_id))?;
        let n = self.rotations.get() + 1;
        self.rotations.set(n);
        Ok(Session {
            api_key: format!("{}-r{}", current.api_key, n),
            ..current.clone()
        })
    }
}
