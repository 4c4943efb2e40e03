//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchTransport;
use crate::controller::ObjectsController;
use crate::table::RowView;

pub type Controller = ObjectsController<FetchTransport>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    /// Trigger a full re-fetch from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger a full re-fetch from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Bumped after any local change to controller state
    pub revision: ReadSignal<u32>,
    set_revision: WriteSignal<u32>,
    /// Transient status line text
    pub status: ReadSignal<Option<String>>,
    set_status: WriteSignal<Option<String>>,
    status_timeout_ms: u32,
    /// Form inputs
    pub name: RwSignal<String>,
    pub color: RwSignal<String>,
}

impl AppContext {
    pub fn new(controller: Controller, status_timeout_ms: u32) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (revision, set_revision) = signal(0u32);
        let (status, set_status) = signal::<Option<String>>(None);
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            reload_trigger,
            set_reload_trigger,
            revision,
            set_revision,
            status,
            set_status,
            status_timeout_ms,
            name: RwSignal::new(String::new()),
            color: RwSignal::new(String::new()),
        }
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Trigger a full re-fetch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Re-render views that read controller state
    pub fn touch(&self) {
        self.set_revision.update(|v| *v += 1);
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn rows(&self) -> Vec<RowView> {
        let _ = self.revision.get();
        self.controller().rows()
    }

    pub fn len(&self) -> usize {
        let _ = self.revision.get();
        self.controller().len()
    }

    pub fn heading(&self) -> &'static str {
        let _ = self.revision.get();
        self.controller().heading()
    }

    pub fn submit_label(&self) -> &'static str {
        let _ = self.revision.get();
        self.controller().submit_label()
    }

    pub fn is_editing(&self) -> bool {
        let _ = self.revision.get();
        self.controller().editing_id().is_some()
    }

    // ========================
    // Form helpers
    // ========================

    pub fn clear_fields(&self) {
        self.name.set(String::new());
        self.color.set(String::new());
    }

    /// Leave editing without saving
    pub fn cancel_edit(&self) {
        self.controller().cancel_edit();
        self.clear_fields();
        self.touch();
    }

    /// Show `message` in the status line until the timeout passes
    pub fn flash(&self, message: impl Into<String>) {
        let message = message.into();
        self.set_status.set(Some(message.clone()));
        let status = self.status;
        let set_status = self.set_status;
        let timeout = self.status_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            if status.get_untracked().as_deref() == Some(message.as_str()) {
                set_status.set(None);
            }
        });
    }
}
