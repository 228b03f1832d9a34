//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use lost_found_core::domain::{ActionError, CategoryFilter, Filter, Item, Session, TypeFilter};
use lost_found_core::repository::{Board, StorageError};
use lost_found_core::{visible, Confirmed, ViewLifetime};

/// What a notice's action button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeAction {
    Reload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-visible message (errors are never swallowed silently)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub action: Option<NoticeAction>,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Item cache and selection
    pub board: Board,
    /// Signed-in session, if any
    pub session: Option<Session>,
    pub filter: Filter,
    /// Free-text query
    pub search: String,
    pub notice: Option<Notice>,
    /// An item list fetch is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a confirmed result unless the view has been torn down
pub fn store_apply(store: &AppStore, lifetime: &ViewLifetime, confirmed: Confirmed) -> bool {
    match store.board().try_write() {
        Some(mut board) => board.apply_while(lifetime, confirmed),
        None => false,
    }
}

pub fn store_items_len(store: &AppStore) -> usize {
    store.board().read().items().len()
}

/// Items passing the current filter and search, in cache order
pub fn store_visible_items(store: &AppStore) -> Vec<Item> {
    let board = store.board().read();
    let filter = store.filter().read();
    let search = store.search().read();
    visible(board.items(), &filter, &search)
        .into_iter()
        .cloned()
        .collect()
}

pub fn store_selected_id(store: &AppStore) -> Option<String> {
    store.board().read().selected_id().map(str::to_string)
}

pub fn store_select(store: &AppStore, id: Option<&str>) {
    store.board().write().select(id);
}

pub fn store_session(store: &AppStore) -> Option<Session> {
    store.session().get()
}

pub fn store_set_session(store: &AppStore, session: Option<Session>) {
    store.session().set(session);
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_loading(store: &AppStore) -> bool {
    store.loading().get()
}

// ========================
// Filter
// ========================

pub fn store_filter(store: &AppStore) -> Filter {
    store.filter().get()
}

pub fn store_set_kind(store: &AppStore, kind: TypeFilter) {
    store.filter().write().set_kind(kind);
}

pub fn store_set_category(store: &AppStore, category: CategoryFilter) {
    store.filter().write().set_category(category);
}

pub fn store_set_active_only(store: &AppStore, active_only: bool) {
    store.filter().write().set_active_only(active_only);
}

pub fn store_search(store: &AppStore) -> String {
    store.search().get()
}

pub fn store_set_search(store: &AppStore, search: String) {
    store.search().set(search);
}

// ========================
// Notices
// ========================

pub fn store_notice(store: &AppStore) -> Option<Notice> {
    store.notice().get()
}

pub fn store_notify(store: &AppStore, notice: Notice) {
    store.notice().set(Some(notice));
}

/// Greeting after sign-in; an error if the session could not be kept for
/// the next page load
pub fn sign_in_notice(session: &Session, saved: &Result<(), StorageError>) -> Notice {
    match saved {
        Ok(()) => Notice {
            level: NoticeLevel::Info,
            message: format!("Welcome, {}", session.name),
            action: None,
        },
        Err(e) => Notice {
            level: NoticeLevel::Error,
            message: format!(
                "Signed in as {}, but the session could not be saved ({}). You will need to sign in again after a reload.",
                session.name, e
            ),
            action: None,
        },
    }
}

/// Retry is offered only for failures that may go away on their own
pub fn reload_failure_action(err: &ActionError) -> Option<NoticeAction> {
    err.is_retryable().then_some(NoticeAction::Reload)
}

pub fn store_notify_error(store: &AppStore, err: &ActionError, action: Option<NoticeAction>) {
    store.notice().set(Some(Notice {
        level: NoticeLevel::Error,
        message: err.to_string(),
        action,
    }));
}

pub fn store_notify_info(store: &AppStore, message: impl Into<String>) {
    store.notice().set(Some(Notice {
        level: NoticeLevel::Info,
        message: message.into(),
        action: None,
    }));
}

pub fn store_clear_notice(store: &AppStore) {
    store.notice().set(None);
}

/// Clear `notice` if it is still the one showing
pub fn store_dismiss(store: &AppStore, notice: &Notice) {
    if let Some(mut current) = store.notice().try_write() {
        if current.as_ref() == Some(notice) {
            *current = None;
        }
    }
}
