//! Session Panel Component
//!
//! Sign in / sign up when anonymous; identity, key rotation and sign out
//! once a session exists.

use leptos::prelude::*;

use lost_found_core::domain::{Credentials, Session};

use crate::context::AppContext;
use crate::store::store_session;

/// Only the tail of the key is ever shown
fn masked_key(api_key: &str) -> String {
    let tail: String = api_key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("••••{}", tail)
}

#[component]
fn SignedIn(session: Session) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="session-signed-in">
            <span class="session-name">{session.name}</span>
            <span class="session-email">{session.email}</span>
            <code class="session-key" title="API key">{masked_key(&session.api_key)}</code>
            <button type="button" class="rotate-key-btn" on:click=move |_| ctx.rotate_key()>
                "Rotate key"
            </button>
            <button type="button" class="sign-out-btn" on:click=move |_| ctx.sign_out()>
                "Sign out"
            </button>
        </div>
    }
}

#[component]
fn SignInForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (sign_up, set_sign_up) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let creating = sign_up.get_untracked();
        let credentials = if creating {
            Credentials::signup(name.get_untracked(), email.get_untracked(), password.get_untracked())
        } else {
            Credentials::login(email.get_untracked(), password.get_untracked())
        };
        set_busy.set(true);
        // On success this form is replaced, so its signals may be gone
        ctx.sign_in(credentials, creating, move |ok| {
            set_busy.try_set(false);
            if ok {
                set_password.try_set(String::new());
            }
        });
    };

    view! {
        <form class="sign-in-form" on:submit=submit>
            <Show when=move || sign_up.get()>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </Show>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>
                {move || if sign_up.get() { "Sign up" } else { "Sign in" }}
            </button>
            <button
                type="button"
                class="link-btn"
                on:click=move |_| set_sign_up.update(|v| *v = !*v)
            >
                {move || if sign_up.get() { "Have an account? Sign in" } else { "New here? Sign up" }}
            </button>
        </form>
    }
}

#[component]
pub fn SessionPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <section class="session-panel">
            {move || match store_session(&store) {
                Some(session) => view! { <SignedIn session=session /> }.into_any(),
                None => view! { <SignInForm /> }.into_any(),
            }}
        </section>
    }
}
