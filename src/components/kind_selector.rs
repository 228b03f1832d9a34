//! Kind Selector Component
//!
//! Row of toggle buttons for lost / found (and "all" when filtering).

use leptos::prelude::*;

/// Options for the list filter
pub const FILTER_KINDS: &[(&str, &str)] = &[
    ("all", "All"),
    ("lost", "Lost"),
    ("found", "Found"),
];

/// Options for a new post
pub const POST_KINDS: &[(&str, &str)] = &[
    ("lost", "I lost something"),
    ("found", "I found something"),
];

#[component]
pub fn KindSelector(
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] current: Signal<&'static str>,
    on_change: impl Fn(&'static str) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="kind-selector">
            {options.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "kind-btn active" } else { "kind-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
