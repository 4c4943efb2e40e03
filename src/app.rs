//! Objects Table App
//!
//! Root component: add/edit form above the records table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CollectionClient, FetchTransport};
use crate::components::{ActivityLog, RecordForm, RecordTable, SettingsPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::ObjectsController;
use crate::notify;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let status_timeout_ms = config.status_timeout_ms;
    let controller = ObjectsController::new(CollectionClient::new(FetchTransport, config));
    let ctx = AppContext::new(controller, status_timeout_ms);

    // Provide context to all children
    provide_context(ctx);

    // Full re-fetch on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::info!("[APP] Loading items, trigger={}", trigger);
        let controller = ctx.controller();
        spawn_local(async move {
            match controller.refresh().await {
                Ok(count) => {
                    log::info!("[APP] Loaded {} items", count);
                    ctx.touch();
                }
                Err(e) => notify::report(&e),
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Objects"</h1>

                <RecordForm />

                <RecordTable />

                <p class="item-count">{move || format!("{} items", ctx.len())}</p>
                <p class="status-line">{move || ctx.status.get().unwrap_or_default()}</p>

                <SettingsPanel />
                <ActivityLog />
            </main>
        </div>
    }
}
