//! Record Table Component
//!
//! One `<tr>` per record with edit and delete buttons tagged by id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::notify;

#[component]
pub fn RecordTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Delete always re-fetches so the table matches the server afterwards
    let on_delete = move |id: String| {
        let controller = ctx.controller();
        spawn_local(async move {
            match controller.delete(&id).await {
                Ok(()) => {
                    ctx.flash(format!("Deleted #{}", id));
                    notify::alert("Item deleted successfully");
                    ctx.reload();
                }
                Err(e) => notify::report(&e),
            }
        });
    };

    let on_edit = move |id: String| {
        if let Some(fields) = ctx.controller().begin_edit(&id) {
            ctx.name.set(fields.name);
            ctx.color.set(fields.color);
            ctx.touch();
        }
    };

    view! {
        <table class="records-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Color"</th>
                    <th>"Edit"</th>
                    <th>"Delete"</th>
                </tr>
            </thead>
            <tbody>
                // Key on every displayed field so a patch re-renders only its own row
                <For
                    each=move || ctx.rows()
                    key=|row| row.clone()
                    children=move |row| {
                        let edit_id = row.id.clone();
                        let delete_id = row.id.clone();
                        view! {
                            <tr data-id=row.id.clone()>
                                <td>{row.id.clone()}</td>
                                <td>{row.name.clone()}</td>
                                <td>{row.color.clone()}</td>
                                <td>
                                    <button
                                        class="edit-btn"
                                        data-id=row.id.clone()
                                        on:click=move |_| on_edit(edit_id.clone())
                                    >
                                        "Edit"
                                    </button>
                                </td>
                                <td>
                                    <button
                                        class="delete-btn"
                                        data-id=row.id.clone()
                                        on:click=move |_| on_delete(delete_id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
