//! Settings Panel Component
//!
//! Edits the remote endpoint, saves it to `localStorage` and re-fetches.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::notify;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let current = ctx.controller().client().config();
    let (base_url, set_base_url) = signal(current.api_base_url);
    let (collection, set_collection) = signal(current.collection);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        let mut config = controller.client().config();
        config.api_base_url = base_url.get_untracked().trim().to_string();
        config.collection = collection.get_untracked().trim().to_string();
        if config.api_base_url.is_empty() || config.collection.is_empty() {
            notify::alert("Base URL and collection are required");
            return;
        }

        if let Err(e) = config.save() {
            log::warn!("[CONFIG] {}", e);
        }
        log::info!("[CONFIG] Using {}", config.collection_url());
        controller.client().set_config(config);
        ctx.reload();
    };

    view! {
        <details class="settings-panel">
            <summary>"Settings"</summary>
            <form class="settings-form" on:submit=on_save>
                <label>
                    "API base URL"
                    <input
                        type="url"
                        prop:value=move || base_url.get()
                        on:input=move |ev| set_base_url.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Collection"
                    <input
                        type="text"
                        prop:value=move || collection.get()
                        on:input=move |ev| set_collection.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Save"</button>
            </form>
        </details>
    }
}
