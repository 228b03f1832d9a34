//! New Item Form Component
//!
//! "Post an item" form. The draft is only cleared once the server has
//! confirmed the new post; a failed submit keeps everything as typed.

use chrono::NaiveDate;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use lost_found_core::domain::{ActionError, DraftPost, ImageUpload, ItemKind, CATEGORIES};

use super::kind_selector::{KindSelector, POST_KINDS};
use crate::context::AppContext;
use crate::store::store_notify_error;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Read a picked file fully into memory
async fn read_image(file: &web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let draft = RwSignal::new(DraftPost::new(today()));
    let (submitting, set_submitting) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let current_kind = Signal::derive(move || draft.with(|d| d.kind.as_str()));

    let on_image = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            draft.update(|d| d.image = None);
            return;
        };
        spawn_local(async move {
            match read_image(&file).await {
                Ok(image) => {
                    log::debug!("picked image {} ({} bytes)", image.file_name, image.bytes.len());
                    draft.update(|d| d.image = Some(image));
                }
                Err(e) => {
                    log::warn!("could not read {}: {}", file.name(), e);
                    store_notify_error(&ctx.store, &ActionError::Validation { fields: vec!["image"] }, None);
                }
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        ctx.create(draft.get_untracked(), move |created| {
            set_submitting.set(false);
            if created {
                draft.update(|d| d.reset(today()));
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=submit>
            <h2>"Post an item"</h2>

            <KindSelector
                options=POST_KINDS
                current=current_kind
                on_change=move |value| {
                    if let Some(kind) = ItemKind::from_str(value) {
                        draft.update(|d| d.kind = kind);
                    }
                }
            />

            <div class="form-row">
                <select
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                >
                    <option value="">"Category..."</option>
                    {CATEGORIES.iter().map(|name| view! {
                        <option value=*name>{*name}</option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </div>

            <textarea
                placeholder="Description"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>

            <div class="form-row">
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.date.format(DATE_FORMAT).to_string())
                    on:input=move |ev| {
                        if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), DATE_FORMAT) {
                            draft.update(|d| d.date = date);
                        }
                    }
                />
                <input
                    type="text"
                    placeholder="Location"
                    prop:value=move || draft.with(|d| d.location.clone())
                    on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <input
                    type="text"
                    placeholder="Email or phone"
                    prop:value=move || draft.with(|d| d.contact.clone())
                    on:input=move |ev| draft.update(|d| d.contact = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Reward (optional)"
                    prop:value=move || draft.with(|d| d.reward.clone())
                    on:input=move |ev| draft.update(|d| d.reward = event_target_value(&ev))
                />
            </div>

            <input type="file" accept="image/*" node_ref=file_input on:change=on_image />

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Posting..." } else { "Post" }}
            </button>
        </form>
    }
}
