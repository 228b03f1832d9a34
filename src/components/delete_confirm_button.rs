//! Delete Confirm Button Component
//!
//! Inline two-step confirmation for destructive actions.

use leptos::prelude::*;

/// Shows `label` initially; once clicked, asks "Delete?" with yes/no buttons.
/// `on_confirm` only runs on yes.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                view! {
                    <button
                        type="button"
                        class=button_class.clone()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        {label.clone()}
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
