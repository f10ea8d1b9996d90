//! Keyed, schema-less document reads.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failures while reading from the document store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("request timed out")]
    Timeout,

    #[error("failed to decode document {key}: {reason}")]
    Decode { key: String, reason: String },
}

/// Result of a single document read.
///
/// A read that reached the store but found nothing is a successful read of
/// a missing document, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    key: String,
    fields: Option<Map<String, Value>>,
}

impl DocumentSnapshot {
    pub fn found(key: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            fields: Some(fields),
        }
    }

    pub fn missing(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn exists(&self) -> bool {
        self.fields.is_some()
    }

    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.fields.as_ref()
    }

    /// Decode the document body. Returns `Ok(None)` for a missing document.
    pub fn data<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        let Some(fields) = &self.fields else {
            return Ok(None);
        };
        serde_json::from_value(Value::Object(fields.clone()))
            .map(Some)
            .map_err(|err| StoreError::Decode {
                key: self.key.clone(),
                reason: err.to_string(),
            })
    }
}

/// Read access to a remote document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the document at `collection/key`.
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<DocumentSnapshot, StoreError>;
}
