//! Filter Bar Component
//!
//! Type buttons, category dropdown, free-text search and the active-only
//! toggle. Everything here is view state; nothing is persisted.

use leptos::prelude::*;

use lost_found_core::domain::{CategoryFilter, TypeFilter, CATEGORIES};

use super::kind_selector::{KindSelector, FILTER_KINDS};
use crate::store::{
    store_filter, store_search, store_set_active_only, store_set_category, store_set_kind,
    store_set_search, use_app_store,
};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let current_kind = Signal::derive(move || store_filter(&store).kind().as_str());

    view! {
        <div class="filter-bar">
            <KindSelector
                options=FILTER_KINDS
                current=current_kind
                on_change=move |value| store_set_kind(&store, TypeFilter::from_str(value))
            />

            <select
                class="category-filter"
                prop:value=move || store_filter(&store).category().as_str().to_string()
                on:change=move |ev| {
                    store_set_category(&store, CategoryFilter::from_str(&event_target_value(&ev)));
                }
            >
                <option value="all">"All categories"</option>
                {CATEGORIES.iter().map(|name| view! {
                    <option value=*name>{*name}</option>
                }).collect_view()}
            </select>

            <input
                type="search"
                class="search-input"
                placeholder="Search title, description or location..."
                prop:value=move || store_search(&store)
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />

            <label class="active-only-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || store_filter(&store).active_only()
                    on:change=move |ev| store_set_active_only(&store, event_target_checked(&ev))
                />
                "Active only"
            </label>
        </div>
    }
}
