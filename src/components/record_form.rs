//! Record Form Component
//!
//! Add/edit form. Submitting while editing updates that record, otherwise a
//! new record is created.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::error::SubmitError;
use crate::form::FormFields;
use crate::notify;

#[component]
pub fn RecordForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = FormFields::new(ctx.name.get_untracked(), ctx.color.get_untracked());
        let controller = ctx.controller();

        spawn_local(async move {
            match controller.submit(&fields).await {
                Ok(saved) => {
                    ctx.clear_fields();
                    ctx.touch();
                    ctx.flash(saved.message());
                    notify::alert(saved.message());
                }
                Err(SubmitError::Invalid(e)) => {
                    log::warn!("[FORM] {}", e);
                    notify::alert(&e.to_string());
                }
                Err(SubmitError::Request(e)) => notify::report(&e),
            }
        });
    };

    view! {
        <form id="addItemForm" class="record-form" on:submit=on_submit>
            <h2>{move || ctx.heading()}</h2>
            <div class="record-form-row">
                <input
                    id="name"
                    type="text"
                    placeholder="Name"
                    prop:value=move || ctx.name.get()
                    on:input=move |ev| ctx.name.set(event_target_value(&ev))
                />
                <input
                    id="color"
                    type="text"
                    placeholder="Color (optional)"
                    prop:value=move || ctx.color.get()
                    on:input=move |ev| ctx.color.set(event_target_value(&ev))
                />
                <button type="submit">{move || ctx.submit_label()}</button>
                <Show when=move || ctx.is_editing()>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
