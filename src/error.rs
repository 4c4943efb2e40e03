//! Error Types
//!
//! One error kind for remote calls, one for local form validation.

use std::fmt;
use thiserror::Error;

/// Remote operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// User-facing summary of the failure
    pub fn failure_text(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch items",
            Operation::Create => "Failed to add new item",
            Operation::Update => "Failed to update item",
            Operation::Delete => "Failed to delete item",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Any transport, status or decode failure of a single remote call
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: {message}", .operation.failure_text())]
pub struct RequestFailed {
    pub operation: Operation,
    pub message: String,
}

impl RequestFailed {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// Presence validation failures; never sent to the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
}

/// Loading or saving the persisted configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("localStorage unavailable")]
    StorageUnavailable,
    #[error("Invalid stored config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to save config: {0}")]
    Storage(String),
}

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Request(#[from] RequestFailed),
}
