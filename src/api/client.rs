//! Collection Client
//!
//! list / create / update / delete against the remote collection. Each call
//! issues exactly one request; any failure becomes `RequestFailed`.

use std::cell::RefCell;

use serde::de::DeserializeOwned;

use super::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::config::AppConfig;
use crate::error::{Operation, RequestFailed};
use crate::models::{Record, RecordDraft};

pub struct CollectionClient<T> {
    transport: T,
    config: RefCell<AppConfig>,
}

impl<T: HttpTransport> CollectionClient<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self {
            transport,
            config: RefCell::new(config),
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> AppConfig {
        self.config.borrow().clone()
    }

    /// Point subsequent calls at another endpoint
    pub fn set_config(&self, config: AppConfig) {
        *self.config.borrow_mut() = config;
    }

    // ========================
    // Operations
    // ========================

    pub async fn list(&self) -> Result<Vec<Record>, RequestFailed> {
        let url = self.config.borrow().collection_url();
        let response = self.execute(Operation::List, HttpRequest::new(Method::Get, url)).await?;
        let records: Vec<Record> = decode(Operation::List, &response)?;
        log::info!("[API] Listed {} records", records.len());
        Ok(records)
    }

    pub async fn create(&self, draft: &RecordDraft) -> Result<Record, RequestFailed> {
        let url = self.config.borrow().collection_url();
        let request = HttpRequest::new(Method::Post, url).with_json(encode(Operation::Create, draft)?);
        let response = self.execute(Operation::Create, request).await?;
        let record: Record = decode(Operation::Create, &response)?;
        log::info!("[API] New item added: {}", record.id);
        Ok(record)
    }

    pub async fn update(&self, id: &str, draft: &RecordDraft) -> Result<Record, RequestFailed> {
        let url = self.config.borrow().record_url(id);
        let request = HttpRequest::new(Method::Put, url).with_json(encode(Operation::Update, draft)?);
        let response = self.execute(Operation::Update, request).await?;
        let record: Record = decode(Operation::Update, &response)?;
        log::info!("[API] Item updated: {}", record.id);
        Ok(record)
    }

    /// Response body is ignored
    pub async fn delete(&self, id: &str) -> Result<(), RequestFailed> {
        let url = self.config.borrow().record_url(id);
        self.execute(Operation::Delete, HttpRequest::new(Method::Delete, url)).await?;
        log::info!("[API] Item deleted: {}", id);
        Ok(())
    }

    async fn execute(&self, operation: Operation, request: HttpRequest) -> Result<HttpResponse, RequestFailed> {
        log::debug!("[API] {}: {} {}", operation, request.method, request.url);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| RequestFailed::new(operation, e))?;
        if !response.is_success() {
            log::warn!("[API] {} returned HTTP {}", operation, response.status);
            return Err(RequestFailed::new(operation, format!("HTTP {}", response.status)));
        }
        Ok(response)
    }
}

fn encode(operation: Operation, draft: &RecordDraft) -> Result<String, RequestFailed> {
    serde_json::to_string(draft).map_err(|e| RequestFailed::new(operation, e.to_string()))
}

fn decode<D: DeserializeOwned>(operation: Operation, response: &HttpResponse) -> Result<D, RequestFailed> {
    serde_json::from_str(&response.body)
        .map_err(|e| RequestFailed::new(operation, format!("Invalid response body: {}", e)))
}
