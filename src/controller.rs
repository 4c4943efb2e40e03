//! Objects Controller
//!
//! Single owner of the remote client, the table rows and the edit state.
//! State sits behind `RefCell`s that are never borrowed across an `.await`,
//! so overlapping user actions interleave instead of panicking.

use std::cell::RefCell;

use crate::api::{CollectionClient, HttpTransport};
use crate::error::{RequestFailed, SubmitError};
use crate::form::{EditForm, FormFields, Submission};
use crate::models::Record;
use crate::table::{RecordTable, RowView};

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Created(Record),
    Updated(Record),
}

impl Saved {
    pub fn message(&self) -> &'static str {
        match self {
            Saved::Created(_) => "New item added successfully",
            Saved::Updated(_) => "Item updated successfully",
        }
    }
}

pub struct ObjectsController<T> {
    client: CollectionClient<T>,
    table: RefCell<RecordTable>,
    form: RefCell<EditForm>,
}

impl<T: HttpTransport> ObjectsController<T> {
    pub fn new(client: CollectionClient<T>) -> Self {
        Self {
            client,
            table: RefCell::new(RecordTable::new()),
            form: RefCell::new(EditForm::new()),
        }
    }

    pub fn client(&self) -> &CollectionClient<T> {
        &self.client
    }

    // ========================
    // Remote-backed actions
    // ========================

    /// Full re-fetch and re-render. On failure the table is left as it was.
    pub async fn refresh(&self) -> Result<usize, RequestFailed> {
        let records = self.client.list().await?;
        let mut table = self.table.borrow_mut();
        table.render(records);
        Ok(table.len())
    }

    /// Delete remotely; the caller re-fetches to drop the row
    pub async fn delete(&self, id: &str) -> Result<(), RequestFailed> {
        self.client.delete(id).await
    }

    /// Create or update depending on the edit state, then patch the table
    /// locally and return to `Idle`. Failures change nothing.
    pub async fn submit(&self, fields: &FormFields) -> Result<Saved, SubmitError> {
        let submission = self.form.borrow().submission(fields)?;
        let saved = match submission {
            Submission::Create(draft) => {
                let record = self.client.create(&draft).await?;
                self.table.borrow_mut().append_row(record.clone());
                Saved::Created(record)
            }
            Submission::Update(id, draft) => {
                let record = self.client.update(&id, &draft).await?;
                self.table
                    .borrow_mut()
                    .patch_row(&id, &record.name, record.color());
                Saved::Updated(record)
            }
        };
        self.form.borrow_mut().reset();
        Ok(saved)
    }

    // ========================
    // Local state
    // ========================

    /// Enter editing for the row with `id`; `None` if the row is gone
    pub fn begin_edit(&self, id: &str) -> Option<FormFields> {
        let record = self.table.borrow().get(id).cloned();
        match record {
            Some(record) => Some(self.form.borrow_mut().begin_edit(&record)),
            None => {
                log::warn!("[APP] Edit requested for unknown row {}", id);
                None
            }
        }
    }

    pub fn cancel_edit(&self) {
        self.form.borrow_mut().reset();
    }

    pub fn editing_id(&self) -> Option<String> {
        self.form.borrow().editing_id().map(str::to_string)
    }

    pub fn heading(&self) -> &'static str {
        self.form.borrow().heading()
    }

    pub fn submit_label(&self) -> &'static str {
        self.form.borrow().submit_label()
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.table.borrow().rows()
    }

    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::api::Method;
    use crate::config::AppConfig;
    use crate::error::{FormError, Operation};

    const ONE_BOX: &str = r#"[{"id":"1","name":"Box","data":{"color":"Red"}}]"#;

    fn controller() -> ObjectsController<ScriptedTransport> {
        let config = AppConfig {
            api_base_url: "https://api.test".to_string(),
            ..AppConfig::default()
        };
        ObjectsController::new(CollectionClient::new(ScriptedTransport::new(), config))
    }

    fn transport(c: &ObjectsController<ScriptedTransport>) -> &ScriptedTransport {
        c.client().transport()
    }

    #[tokio::test]
    async fn test_load_renders_single_row() {
        let c = controller();
        transport(&c).respond(200, ONE_BOX);

        assert_eq!(c.refresh().await.unwrap(), 1);
        assert_eq!(
            c.rows(),
            vec![RowView { id: "1".into(), name: "Box".into(), color: "Red".into() }]
        );
    }

    #[tokio::test]
    async fn test_create_appends_server_record() {
        let c = controller();
        transport(&c)
            .respond(200, ONE_BOX)
            .respond(200, r#"{"id":"99","name":"Ball","data":{"color":"Blue"}}"#);
        c.refresh().await.unwrap();

        let saved = c.submit(&FormFields::new("Ball", "Blue")).await.unwrap();
        assert_eq!(saved.message(), "New item added successfully");

        let rows = c.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Box");
        assert_eq!(rows[1], RowView { id: "99".into(), name: "Ball".into(), color: "Blue".into() });
        assert_eq!(transport(&c).requests().len(), 2);
    }

    #[tokio::test]
    async fn test_edit_then_submit_updates_only_that_row() {
        let c = controller();
        transport(&c)
            .respond(200, r#"[{"id":"1","name":"Box","data":{"color":"Red"}},{"id":"2","name":"Mug"}]"#)
            .respond(200, r#"{"id":"2","name":"Cup","data":{"color":"Green"}}"#);
        c.refresh().await.unwrap();
        let before = c.rows();

        let fields = c.begin_edit("2").unwrap();
        assert_eq!(fields, FormFields::new("Mug", ""));
        assert_eq!(c.editing_id().as_deref(), Some("2"));

        let saved = c.submit(&FormFields::new("Cup", "Green")).await.unwrap();
        assert!(matches!(saved, Saved::Updated(_)));

        let after = c.rows();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], RowView { id: "2".into(), name: "Cup".into(), color: "Green".into() });
        assert_eq!(c.editing_id(), None);

        let put = &transport(&c).requests()[1];
        assert_eq!(put.method, Method::Put);
        assert_eq!(put.url, "https://api.test/objects/2");
    }

    #[tokio::test]
    async fn test_editing_placeholder_row_sends_no_color() {
        let c = controller();
        transport(&c)
            .respond(200, r#"[{"id":"3","name":"Lamp","data":null}]"#)
            .respond(200, r#"{"id":"3","name":"Lamp","data":{}}"#);
        c.refresh().await.unwrap();
        assert_eq!(c.rows()[0].color, "Not mentioned");

        let fields = c.begin_edit("3").unwrap();
        c.submit(&fields).await.unwrap();

        assert_eq!(
            transport(&c).last_body_json(),
            serde_json::json!({"name": "Lamp", "data": {}})
        );
        assert_eq!(c.rows()[0].color, "Not mentioned");
    }

    #[tokio::test]
    async fn test_delete_then_refresh_drops_row() {
        let c = controller();
        transport(&c)
            .respond(200, r#"[{"id":"1","name":"Box"},{"id":"2","name":"Mug"}]"#)
            .respond(200, r#"{"message":"deleted"}"#)
            .respond(200, r#"[{"id":"2","name":"Mug"}]"#);
        c.refresh().await.unwrap();

        c.delete("1").await.unwrap();
        c.refresh().await.unwrap();

        assert!(c.rows().iter().all(|row| row.id != "1"));
        assert_eq!(c.len(), 1);
    }

    #[tokio::test]
    async fn test_failures_leave_table_and_state_unchanged() {
        let c = controller();
        transport(&c)
            .respond(200, ONE_BOX)
            .respond(500, "")
            .respond(503, "")
            .respond(400, "")
            .respond(404, "");
        c.refresh().await.unwrap();
        let before = c.rows();

        let err = c.refresh().await.unwrap_err();
        assert_eq!(err.operation, Operation::List);
        assert_eq!(c.rows(), before);

        let err = c.submit(&FormFields::new("Ball", "Blue")).await.unwrap_err();
        assert!(matches!(err, SubmitError::Request(RequestFailed { operation: Operation::Create, .. })));
        assert_eq!(c.rows(), before);

        c.begin_edit("1").unwrap();
        let err = c.submit(&FormFields::new("Crate", "Red")).await.unwrap_err();
        assert!(matches!(err, SubmitError::Request(RequestFailed { operation: Operation::Update, .. })));
        assert_eq!(c.rows(), before);
        assert_eq!(c.editing_id().as_deref(), Some("1"));

        let err = c.delete("1").await.unwrap_err();
        assert_eq!(err.operation, Operation::Delete);
        assert_eq!(c.rows(), before);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let c = controller();
        let err = c.submit(&FormFields::new("", "Red")).await.unwrap_err();
        assert_eq!(err, SubmitError::Invalid(FormError::MissingName));
        assert!(transport(&c).requests().is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_refresh_and_create() {
        let c = controller();
        transport(&c)
            .respond_to(Method::Get, 200, r#"[{"id":"1","name":"Box"},{"id":"99","name":"Ball","data":{"color":"Blue"}}]"#)
            .respond_to(Method::Post, 200, r#"{"id":"99","name":"Ball","data":{"color":"Blue"}}"#);

        let fields = FormFields::new("Ball", "Blue");
        let (listed, saved) = tokio::join!(c.refresh(), c.submit(&fields));

        listed.unwrap();
        assert!(matches!(saved.unwrap(), Saved::Created(_)));
        let ids: Vec<String> = c.rows().into_iter().map(|row| row.id).collect();
        assert_eq!(ids, vec!["1", "99"]);
        assert_eq!(transport(&c).requests().len(), 2);
    }

    #[tokio::test]
    async fn test_overlapping_update_and_delete() {
        let c = controller();
        transport(&c).respond(200, r#"[{"id":"1","name":"Box"},{"id":"2","name":"Mug"}]"#);
        c.refresh().await.unwrap();
        transport(&c)
            .respond_to(Method::Put, 200, r#"{"id":"1","name":"Crate"}"#)
            .respond_to(Method::Delete, 200, "");

        c.begin_edit("1").unwrap();
        let fields = FormFields::new("Crate", "");
        let (saved, deleted) = tokio::join!(c.submit(&fields), c.delete("2"));

        saved.unwrap();
        deleted.unwrap();
        assert_eq!(c.rows()[0].name, "Crate");
        assert_eq!(c.editing_id(), None);
    }

    #[test]
    fn test_begin_edit_unknown_row() {
        let c = controller();
        assert_eq!(c.begin_edit("nope"), None);
        assert_eq!(c.heading(), "Add New Item");
        c.cancel_edit();
        assert_eq!(c.submit_label(), "Add Item");
    }
}
