//! Activity Log Component
//!
//! Recent log entries from the console logger's ring buffer, newest first.

use leptos::prelude::*;

use crate::context::AppContext;

const MAX_SHOWN: usize = 20;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let entries = move || {
        let _ = ctx.revision.get();
        let _ = ctx.reload_trigger.get();
        let _ = ctx.status.get();
        console_logger::recent_entries()
            .into_iter()
            .rev()
            .take(MAX_SHOWN)
            .collect::<Vec<_>>()
    };

    view! {
        <details class="activity-log">
            <summary>"Activity"</summary>
            <ul>
                {move || entries().into_iter().map(|entry| {
                    let class = format!("log-{}", entry.level.as_str().to_lowercase());
                    view! {
                        <li class=class>
                            {format!("{} {} {}", entry.timestamp, entry.level, entry.message)}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </details>
    }
}
