//! Item Card Component
//!
//! One post in the list. Owners get resolve / delete controls.

use leptos::prelude::*;

use lost_found_core::domain::Item;

use super::delete_confirm_button::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{store_select, store_selected_id, store_session};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let stored = StoredValue::new(item.clone());
    let id = item.id.clone();
    let is_selected = move || store_selected_id(&store).as_deref() == Some(id.as_str());
    let is_mine = move || {
        store_session(&store).is_some_and(|session| stored.with_value(|item| item.is_owned_by(&session)))
    };

    let toggle_select = move |_| {
        let id = stored.with_value(|item| item.id.clone());
        if store_selected_id(&store).as_deref() == Some(id.as_str()) {
            store_select(&store, None);
        } else {
            store_select(&store, Some(&id));
        }
    };

    let kind = item.kind.as_str();
    let contact_href = item.contact_kind().href(&item.contact);
    let date = item.date.format("%b %e, %Y").to_string();
    let active = item.is_active();
    let status = (!active).then(|| item.status.as_str().to_string());
    let poster = item.owner.as_ref().map(|owner| owner.name.clone()).filter(|name| !name.is_empty());
    let alt = item.title.clone();

    view! {
        <article
            class=move || if is_selected() { "item-card selected" } else { "item-card" }
            on:click=toggle_select
        >
            <header class="item-card-header">
                <span class=format!("kind-badge {}", kind)>{kind}</span>
                <span class="item-category">{item.category}</span>
                {status.map(|status| view! { <span class="status-badge">{status}</span> })}
            </header>

            {item.image.map(|src| view! { <img class="item-image" src=src alt=alt /> })}

            <h3 class="item-title">{item.title}</h3>
            <p class="item-description">{item.description}</p>

            <dl class="item-meta">
                <dt>"Where"</dt>
                <dd>{item.location}</dd>
                <dt>"When"</dt>
                <dd>{date}</dd>
                {item.reward.map(|reward| view! {
                    <dt>"Reward"</dt>
                    <dd>{reward}</dd>
                })}
            </dl>

            <footer class="item-card-footer">
                <a class="contact-link" href=contact_href on:click=|ev| ev.stop_propagation()>
                    {item.contact}
                </a>
                {poster.map(|name| view! { <span class="item-poster">"Posted by " {name}</span> })}

                <Show when=is_mine>
                    <div class="owner-actions">
                        {active.then(|| view! {
                            <button
                                type="button"
                                class="resolve-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.resolve(stored.get_value());
                                }
                            >
                                "Mark resolved"
                            </button>
                        })}
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            on_confirm=move |_| ctx.delete(stored.get_value())
                        />
                    </div>
                </Show>
            </footer>
        </article>
    }
}
