//! Log Panel Component
//!
//! Collapsible view of the newest log lines, for reporting problems
//! without opening the browser console.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move || set_lines.set(console_logger::recent_lines());

    view! {
        <details class="log-panel" on:toggle=move |_| refresh()>
            <summary>"Recent activity"</summary>
            <button type="button" class="log-refresh-btn" on:click=move |_| refresh()>
                "Refresh"
            </button>
            <pre class="log-lines">
                {move || lines.with(|lines| lines.join("\n"))}
            </pre>
        </details>
    }
}
