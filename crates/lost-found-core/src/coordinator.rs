//! Action Coordinator
//!
//! Runs user-triggered actions as confirm-then-update cycles:
//! check preconditions locally, send exactly one request, and hand back a
//! [`Confirmed`] result for the caller to apply to its [`Board`].
//! Nothing is retried here.
//!
//! [`Board`]: crate::repository::Board

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::api::Backend;
use crate::domain::{ActionError, ActionResult, Credentials, DraftPost, Item, ItemId, Session};
use crate::repository::{KeyValueStorage, SessionStore};

/// A server-confirmed change, not yet applied to local state
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmed {
    Loaded(Vec<Item>),
    Created(Item),
    Resolved(ItemId),
    Deleted(ItemId),
}

impl Confirmed {
    pub fn label(&self) -> &'static str {
        match self {
            Confirmed::Loaded(_) => "load",
            Confirmed::Created(_) => "create",
            Confirmed::Resolved(_) => "resolve",
            Confirmed::Deleted(_) => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Load,
    Create,
    Resolve,
    Delete,
    RotateKey,
    SignIn,
    SignUp,
}

type PendingKey = (ActionKind, Option<ItemId>);

/// Marks an action in flight until dropped
struct PendingGuard {
    pending: Rc<RefCell<HashSet<PendingKey>>>,
    key: PendingKey,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending.borrow_mut().remove(&self.key);
    }
}

/// Refuse resolve/delete unless signed in as the item's owner
fn authorize<'s>(session: Option<&'s Session>, item: &Item) -> ActionResult<&'s Session> {
    let session = session.ok_or_else(ActionError::not_signed_in)?;
    if !item.is_owned_by(session) {
        return Err(ActionError::Forbidden(
            "you can only change your own posts".to_string(),
        ));
    }
    Ok(session)
}

fn require_credentials(credentials: &Credentials, needs_name: bool) -> ActionResult<()> {
    let mut fields = Vec::new();
    if needs_name && credentials.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        fields.push("name");
    }
    if credentials.email.trim().is_empty() {
        fields.push("email");
    }
    if credentials.password.as_deref().map_or(true, str::is_empty) {
        fields.push("password");
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ActionError::Validation { fields })
    }
}

fn log_failure(action: &str, err: &ActionError) {
    log::warn!("{} failed [{}]: {}", action, err.kind().as_str(), err);
}

pub struct ActionCoordinator<B: ?Sized> {
    backend: Rc<B>,
    pending: Rc<RefCell<HashSet<PendingKey>>>,
}

impl<B: ?Sized> Clone for ActionCoordinator<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<B: Backend + ?Sized> ActionCoordinator<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self {
            backend,
            pending: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Whether an action on `target` is still waiting for its response.
    /// The UI disables the triggering control while this holds.
    pub fn is_pending(&self, kind: ActionKind, target: Option<&str>) -> bool {
        self.pending
            .borrow()
            .contains(&(kind, target.map(str::to_string)))
    }

    fn track(&self, kind: ActionKind, target: Option<&str>) -> PendingGuard {
        let key = (kind, target.map(str::to_string));
        self.pending.borrow_mut().insert(key.clone());
        PendingGuard {
            pending: Rc::clone(&self.pending),
            key,
        }
    }

    /// Fetch the authoritative item list
    pub async fn load_all(&self) -> ActionResult<Confirmed> {
        let _guard = self.track(ActionKind::Load, None);
        match self.backend.list_items().await {
            Ok(items) => {
                log::info!("loaded {} items", items.len());
                Ok(Confirmed::Loaded(items))
            }
            Err(err) => {
                log_failure("load", &err);
                Err(err)
            }
        }
    }

    /// Post a new item. The result carries the server-assigned id.
    pub async fn create(&self, session: Option<&Session>, draft: &DraftPost) -> ActionResult<Confirmed> {
        draft.validate()?;
        let _guard = self.track(ActionKind::Create, None);
        log::info!("creating {} item {:?}", draft.kind.as_str(), draft.title.trim());
        let item = self.backend.create_item(session, draft).await.map_err(|err| {
            log_failure("create", &err);
            err
        })?;
        if item.id.trim().is_empty() {
            let err = ActionError::server(None, "the server did not assign an id to the new item");
            log_failure("create", &err);
            return Err(err);
        }
        Ok(Confirmed::Created(item))
    }

    /// Mark an owned, still active item as resolved
    pub async fn resolve(&self, session: Option<&Session>, item: &Item) -> ActionResult<Confirmed> {
        let session = authorize(session, item)?;
        if !item.is_active() {
            return Err(ActionError::Forbidden(format!(
                "only active posts can be resolved (this one is {})",
                item.status.as_str()
            )));
        }
        let _guard = self.track(ActionKind::Resolve, Some(&item.id));
        log::info!("resolving item {}", item.id);
        self.backend.resolve_item(session, &item.id).await.map_err(|err| {
            log_failure("resolve", &err);
            err
        })?;
        Ok(Confirmed::Resolved(item.id.clone()))
    }

    /// Delete an owned item
    pub async fn delete(&self, session: Option<&Session>, item: &Item) -> ActionResult<Confirmed> {
        let session = authorize(session, item)?;
        let _guard = self.track(ActionKind::Delete, Some(&item.id));
        log::info!("deleting item {}", item.id);
        self.backend.delete_item(session, &item.id).await.map_err(|err| {
            log_failure("delete", &err);
            err
        })?;
        Ok(Confirmed::Deleted(item.id.clone()))
    }

    /// Resolve or delete by kind. Any other kind is refused without a request.
    pub async fn mutate(&self, kind: ActionKind, session: Option<&Session>, item: &Item) -> ActionResult<Confirmed> {
        match kind {
            ActionKind::Resolve => self.resolve(session, item).await,
            ActionKind::Delete => self.delete(session, item).await,
            other => {
                log::error!("{:?} is not an item mutation", other);
                Err(ActionError::server(None, format!("{:?} cannot be applied to an item", other)))
            }
        }
    }

    /// Replace the session's credential; persisted through `store`
    pub async fn rotate_key<S: KeyValueStorage>(
        &self,
        store: &SessionStore<S>,
        session: Option<&Session>,
    ) -> ActionResult<Session> {
        let _guard = self.track(ActionKind::RotateKey, None);
        store
            .rotate(self.backend.as_ref(), session)
            .await
            .map_err(|err| {
                log_failure("rotate-key", &err);
                err
            })
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> ActionResult<Session> {
        require_credentials(credentials, false)?;
        let _guard = self.track(ActionKind::SignIn, None);
        let session = self.backend.log_in(credentials).await.map_err(|err| {
            log_failure("sign-in", &err);
            err
        })?;
        log::info!("signed in as {}", session.user_id);
        Ok(session)
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> ActionResult<Session> {
        require_credentials(credentials, true)?;
        let _guard = self.track(ActionKind::SignUp, None);
        let session = self.backend.sign_up(credentials).await.map_err(|err| {
            log_failure("sign-up", &err);
            err
        })?;
        log::info!("signed up as {}", session.user_id);
        Ok(session)
    }
}
