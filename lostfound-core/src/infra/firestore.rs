//! Firestore REST document reads.
//!
//! Documents come back with typed values (`{"stringValue": "Asha"}`); they
//! are flattened to plain JSON before the caller decodes them.

use super::http::{EndpointError, join_segments, parse_base_url};
use crate::session::SessionStore;

use lostfound_contracts::document::{
    DocumentSnapshot, DocumentStore, StoreError,
};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use url::Url;

pub struct FirestoreDocumentStore {
    client: Client,
    base_url: Url,
    project_id: String,
    api_key: Option<String>,
    id_token: RwLock<Option<String>>,
}

impl std::fmt::Debug for FirestoreDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreDocumentStore")
            .field("base_url", &self.base_url.as_str())
            .field("project_id", &self.project_id)
            .field("has_api_key", &self.api_key.is_some())
            .field(
                "has_id_token",
                &self
                    .id_token
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreDocumentStore {
    pub fn new(
        client: Client,
        base_url: &str,
        project_id: impl Into<String>,
    ) -> Result<Self, EndpointError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            project_id: project_id.into(),
            api_key: None,
            id_token: RwLock::new(None),
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Bearer token sent with every read; `None` reads anonymously.
    pub async fn set_id_token(&self, token: Option<String>) {
        *self.id_token.write().await = token;
    }

    /// Authenticate reads with the id token of the signed-in session.
    pub async fn use_session(&self, sessions: &SessionStore) {
        self.set_id_token(sessions.id_token()).await;
    }

    pub fn document_url(&self, collection: &str, key: &str) -> Url {
        let mut url = join_segments(
            &self.base_url,
            [
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                collection,
                key,
            ],
        );
        if let Some(api_key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", api_key);
        }
        url
    }
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    #[instrument(skip(self), level = "debug")]
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<DocumentSnapshot, StoreError> {
        let mut request = self.client.get(self.document_url(collection, key));
        if let Some(token) = self.id_token.read().await.as_ref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("document does not exist");
                Ok(DocumentSnapshot::missing(key))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = response.text().await.unwrap_or_default();
                Err(StoreError::PermissionDenied(body))
            }
            status if status.is_success() => {
                let raw: RawDocument =
                    response.json().await.map_err(|err| StoreError::Decode {
                        key: key.to_string(),
                        reason: err.to_string(),
                    })?;
                Ok(DocumentSnapshot::found(key, decode_fields(raw.fields)))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(StoreError::Transport(format!(
                    "status {status}: {body}"
                )))
            }
        }
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout
    } else {
        StoreError::Transport(err.to_string())
    }
}

/// Flatten a Firestore `fields` map into plain JSON.
pub fn decode_fields(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| (name, decode_value(value)))
        .collect()
}

/// Flatten one typed Firestore value.
///
/// `integerValue` arrives as a decimal string. Values of an unknown shape
/// are passed through unchanged.
pub fn decode_value(value: Value) -> Value {
    let Value::Object(typed) = value else {
        return value;
    };
    if typed.len() != 1 {
        return Value::Object(typed);
    }
    let Some((kind, inner)) = typed.into_iter().next() else {
        return Value::Object(Map::new());
    };

    match (kind.as_str(), inner) {
        ("nullValue", _) => Value::Null,
        ("integerValue", Value::String(raw)) => raw
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::String(raw)),
        ("doubleValue", Value::String(raw)) => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::String(raw)),
        (
            "booleanValue" | "stringValue" | "timestampValue"
            | "referenceValue" | "bytesValue" | "integerValue"
            | "doubleValue" | "geoPointValue",
            inner,
        ) => inner,
        ("mapValue", Value::Object(mut map)) => match map.remove("fields") {
            Some(Value::Object(fields)) => Value::Object(decode_fields(fields)),
            _ => Value::Object(Map::new()),
        },
        ("arrayValue", Value::Object(mut array)) => match array.remove("values")
        {
            Some(Value::Array(values)) => {
                Value::Array(values.into_iter().map(decode_value).collect())
            }
            _ => Value::Array(Vec::new()),
        },
        (kind, inner) => {
            let mut original = Map::new();
            original.insert(kind.to_string(), inner);
            Value::Object(original)
        }
    }
}
