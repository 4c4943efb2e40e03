//! Record Table Model
//!
//! Ordered rows backing the HTML table. Each row keeps its `Record`, and an
//! id -> index map replaces scanning the DOM for `data-id` attributes.

use std::collections::HashMap;

use crate::models::Record;

/// Row as displayed: id, name, color cell text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl From<&Record> for RowView {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            color: record.color_label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    rows: Vec<Record>,
    index: HashMap<String, usize>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every row and rebuild exactly one row per record, in order.
    /// A repeated id keeps its rows; lookups by id resolve to the first one.
    pub fn render(&mut self, records: Vec<Record>) {
        self.index.clear();
        for (pos, record) in records.iter().enumerate() {
            if self.index.contains_key(&record.id) {
                log::warn!("[TABLE] Duplicate id {} in listing", record.id);
                continue;
            }
            self.index.insert(record.id.clone(), pos);
        }
        self.rows = records;
        log::debug!("[TABLE] Rendered {} rows", self.rows.len());
    }

    /// Add a row at the end. A duplicate id replaces the existing row in place.
    pub fn append_row(&mut self, record: Record) {
        if let Some(&pos) = self.index.get(&record.id) {
            log::warn!("[TABLE] Row {} already present, replacing", record.id);
            self.rows[pos] = record;
            return;
        }
        self.index.insert(record.id.clone(), self.rows.len());
        self.rows.push(record);
    }

    /// Update name and color of one row. Returns `false` when no row has `id`.
    pub fn patch_row(&mut self, id: &str, name: &str, color: Option<&str>) -> bool {
        match self.index.get(id) {
            Some(&pos) => {
                self.rows[pos].apply(name, color);
                true
            }
            None => {
                log::warn!("[TABLE] Row with id {} not found", id);
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.index.get(id).map(|&pos| &self.rows[pos])
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.rows.iter().map(RowView::from).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

}
