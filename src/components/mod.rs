//! UI Components
//!
//! Leptos components for the records page.

mod activity_log;
mod record_form;
mod record_table;
mod settings_panel;

pub use activity_log::ActivityLog;
pub use record_form::RecordForm;
pub use record_table::RecordTable;
pub use settings_panel::SettingsPanel;
