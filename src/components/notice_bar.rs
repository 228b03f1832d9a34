//! Notice Bar Component
//!
//! Shows the current info or error message. Errors stay until dismissed;
//! info notices clear themselves.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{store_clear_notice, store_dismiss, store_notice, NoticeAction, NoticeLevel};

const INFO_TIMEOUT_MS: u32 = 4_000;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    Effect::new(move |_| {
        if let Some(notice) = store_notice(&store).filter(|n| n.level == NoticeLevel::Info) {
            spawn_local(async move {
                TimeoutFuture::new(INFO_TIMEOUT_MS).await;
                store_dismiss(&store, &notice);
            });
        }
    });

    view! {
        {move || store_notice(&store).map(|notice| {
            let class = match notice.level {
                NoticeLevel::Info => "notice notice-info",
                NoticeLevel::Error => "notice notice-error",
            };
            let action = notice.action.map(|action| match action {
                NoticeAction::Reload => view! {
                    <button
                        type="button"
                        class="notice-action"
                        on:click=move |_| {
                            store_clear_notice(&store);
                            ctx.reload();
                        }
                    >
                        "Retry"
                    </button>
                },
            });
            view! {
                <div class=class role="status">
                    <span class="notice-message">{notice.message}</span>
                    {action}
                    <button type="button" class="notice-dismiss" on:click=move |_| store_clear_notice(&store)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
