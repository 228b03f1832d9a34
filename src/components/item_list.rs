//! Item List Component
//!
//! Renders the visible subset of the board in cache order.

use leptos::prelude::*;

use super::item_card::ItemCard;
use crate::store::{store_items_len, store_loading, store_visible_items, use_app_store};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    // Recomputed whenever the board, filter or search changes
    let items = Memo::new(move |_| store_visible_items(&store));

    view! {
        <section class="item-list">
            <p class="item-count">
                {move || format!("Showing {} of {} items", items.with(Vec::len), store_items_len(&store))}
            </p>

            <Show when=move || store_loading(&store) && store_items_len(&store) == 0>
                <p class="loading">"Loading items..."</p>
            </Show>
            <Show when=move || !store_loading(&store) && items.with(Vec::is_empty)>
                <p class="empty-state">"No items match your filters."</p>
            </Show>

            <div class="item-grid">
                <For
                    each=move || items.get()
                    key=|item| (item.id.clone(), item.status.clone())
                    children=|item| view! { <ItemCard item=item /> }
                />
            </div>
        </section>
    }
}
