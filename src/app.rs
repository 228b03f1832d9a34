//! Lost & Found Frontend App
//!
//! Root component: builds the store and context, restores the session and
//! kicks off the first load.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, ItemList, LogPanel, NewItemForm, NoticeBar, SessionPanel};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store, &config);
    provide_context(ctx);

    ctx.restore_session();
    ctx.reload();

    // Responses landing after unmount are dropped
    on_cleanup(move || ctx.end());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Lost & Found"</h1>
                <SessionPanel />
            </header>

            <NoticeBar />

            <main class="main-content">
                <NewItemForm />
                <FilterBar />
                <ItemList />
            </main>

            <LogPanel />
        </div>
    }
}
