//! Add/Edit Form State
//!
//! Two states: `Idle` submits a create, `Editing(id)` submits an update.

use crate::error::FormError;
use crate::models::{Record, RecordDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(String),
}

/// Raw text of the `name` and `color` inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub color: String,
}

impl FormFields {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Fields for editing `record`; an absent color leaves the input empty
    pub fn from_record(record: &Record) -> Self {
        Self::new(record.name.clone(), record.color().unwrap_or_default())
    }

    /// Presence check, then build the request body. Empty color means absent.
    pub fn to_draft(&self) -> Result<RecordDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let color = Some(self.color.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Ok(RecordDraft::new(name, color))
    }
}

/// What a submit should do
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(RecordDraft),
    Update(String, RecordDraft),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    state: EditState,
}

impl EditForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Enter `Editing(record.id)` and return the fields to pre-fill
    pub fn begin_edit(&mut self, record: &Record) -> FormFields {
        self.state = EditState::Editing(record.id.clone());
        FormFields::from_record(record)
    }

    pub fn submission(&self, fields: &FormFields) -> Result<Submission, FormError> {
        let draft = fields.to_draft()?;
        Ok(match &self.state {
            EditState::Idle => Submission::Create(draft),
            EditState::Editing(id) => Submission::Update(id.clone(), draft),
        })
    }

    pub fn reset(&mut self) {
        self.state = EditState::Idle;
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() { "Edit Item" } else { "Add New Item" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Item" } else { "Add Item" }
    }
}
