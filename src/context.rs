//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every user action goes
//! through here: dispatch via the coordinator, then apply the confirmed
//! result to the store or report the failure.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use lost_found_core::domain::{ActionError, Credentials, DraftPost, Item};
use lost_found_core::repository::SessionStore;
use lost_found_core::{ActionCoordinator, ActionKind, ViewLifetime};

use crate::commands::HttpBackend;
use crate::config::Config;
use crate::storage::BrowserStorage;
use crate::store::{
    reload_failure_action, sign_in_notice, store_apply, store_clear_notice, store_notify,
    store_notify_error, store_notify_info, store_session, store_set_loading, store_set_session,
    AppStore, NoticeAction,
};

type Coordinator = ActionCoordinator<HttpBackend>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    coordinator: StoredValue<Coordinator, LocalStorage>,
    sessions: StoredValue<Rc<SessionStore<BrowserStorage>>, LocalStorage>,
    lifetime: StoredValue<ViewLifetime>,
}

impl AppContext {
    pub fn new(store: AppStore, config: &Config) -> Self {
        let backend = Rc::new(HttpBackend::new(config));
        Self {
            store,
            coordinator: StoredValue::new_local(ActionCoordinator::new(backend)),
            sessions: StoredValue::new_local(Rc::new(SessionStore::new(BrowserStorage::open()))),
            lifetime: StoredValue::new(ViewLifetime::new()),
        }
    }

    fn coordinator(&self) -> Coordinator {
        self.coordinator.get_value()
    }

    fn lifetime(&self) -> ViewLifetime {
        self.lifetime.get_value()
    }

    /// Mark the app torn down; late responses are dropped
    pub fn end(&self) {
        self.lifetime.with_value(ViewLifetime::end);
    }

    fn alive(&self) -> bool {
        self.lifetime().is_alive()
    }

    fn fail(&self, err: &ActionError, action: Option<NoticeAction>) {
        if self.alive() {
            store_notify_error(&self.store, err, action);
        }
    }

    // ========================
    // Session
    // ========================

    /// Restore the persisted session, once at startup
    pub fn restore_session(&self) {
        let restored = self.sessions.with_value(|sessions| sessions.load());
        if let Some(session) = &restored {
            log::info!("restored session for {}", session.user_id);
        }
        store_set_session(&self.store, restored);
    }

    pub fn sign_in(&self, credentials: Credentials, sign_up: bool, on_done: impl FnOnce(bool) + 'static) {
        let ctx = *self;
        let coordinator = self.coordinator();
        spawn_local(async move {
            let result = if sign_up {
                coordinator.sign_up(&credentials).await
            } else {
                coordinator.sign_in(&credentials).await
            };
            if !ctx.alive() {
                return;
            }
            match result {
                Ok(session) => {
                    let saved = ctx.sessions.with_value(|sessions| sessions.save(&session));
                    if let Err(e) = &saved {
                        log::warn!("session not persisted: {}", e);
                    }
                    store_notify(&ctx.store, sign_in_notice(&session, &saved));
                    store_set_session(&ctx.store, Some(session));
                    on_done(true);
                }
                Err(err) => {
                    ctx.fail(&err, None);
                    on_done(false);
                }
            }
        });
    }

    pub fn sign_out(&self) {
        self.sessions.with_value(|sessions| sessions.clear());
        store_set_session(&self.store, None);
        store_notify_info(&self.store, "Signed out");
    }

    pub fn rotate_key(&self) {
        let ctx = *self;
        let coordinator = self.coordinator();
        let sessions = self.sessions.get_value();
        let current = store_session(&self.store);
        spawn_local(async move {
            let result = coordinator.rotate_key(&sessions, current.as_ref()).await;
            if !ctx.alive() {
                return;
            }
            match result {
                Ok(session) => {
                    store_set_session(&ctx.store, Some(session));
                    store_notify_info(&ctx.store, "Your API key was rotated");
                }
                Err(err) => ctx.fail(&err, None),
            }
        });
    }

    // ========================
    // Items
    // ========================

    /// Fetch the authoritative item list
    pub fn reload(&self) {
        let ctx = *self;
        let coordinator = self.coordinator();
        if coordinator.is_pending(ActionKind::Load, None) {
            return;
        }
        store_set_loading(&self.store, true);
        spawn_local(async move {
            let result = coordinator.load_all().await;
            if !ctx.alive() {
                return;
            }
            store_set_loading(&ctx.store, false);
            match result {
                Ok(confirmed) => {
                    store_apply(&ctx.store, &ctx.lifetime(), confirmed);
                }
                Err(err) => {
                    let action = reload_failure_action(&err);
                    ctx.fail(&err, action);
                }
            }
        });
    }

    pub fn create(&self, draft: DraftPost, on_done: impl FnOnce(bool) + 'static) {
        let ctx = *self;
        let coordinator = self.coordinator();
        let session = store_session(&self.store);
        spawn_local(async move {
            let result = coordinator.create(session.as_ref(), &draft).await;
            if !ctx.alive() {
                return;
            }
            match result {
                Ok(confirmed) => {
                    let applied = store_apply(&ctx.store, &ctx.lifetime(), confirmed);
                    if applied {
                        store_notify_info(&ctx.store, "Your post is live");
                    }
                    on_done(applied);
                }
                Err(err) => {
                    ctx.fail(&err, None);
                    on_done(false);
                }
            }
        });
    }

    pub fn resolve(&self, item: Item) {
        self.mutate(ActionKind::Resolve, item);
    }

    pub fn delete(&self, item: Item) {
        self.mutate(ActionKind::Delete, item);
    }

    /// Resolve or delete; repeated clicks while in flight are ignored
    fn mutate(&self, kind: ActionKind, item: Item) {
        let ctx = *self;
        let coordinator = self.coordinator();
        if coordinator.is_pending(kind, Some(&item.id)) {
            log::debug!("{:?} for {} already in flight", kind, item.id);
            return;
        }
        let session = store_session(&self.store);
        store_clear_notice(&self.store);
        spawn_local(async move {
            match coordinator.mutate(kind, session.as_ref(), &item).await {
                Ok(confirmed) => {
                    store_apply(&ctx.store, &ctx.lifetime(), confirmed);
                }
                Err(err) => ctx.fail(&err, None),
            }
        });
    }
}
