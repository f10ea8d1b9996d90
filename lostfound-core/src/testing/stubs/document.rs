use lostfound_contracts::document::{
    DocumentSnapshot, DocumentStore, StoreError,
};
use lostfound_model::{ProfileDocument, UserId};

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tokio::sync::Semaphore;

/// Document store held in memory.
///
/// Every read is recorded before it completes. A gated store holds each
/// read until the paired [`StoreGate`] releases it, which lets tests observe
/// a screen while its fetch is in flight.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    inner: Arc<RwLock<InnerStore>>,
    gate: Option<Arc<Semaphore>>,
}

#[derive(Debug, Default)]
struct InnerStore {
    documents: HashMap<(String, String), Map<String, Value>>,
    reads: Vec<(String, String)>,
    failure: Option<StoreError>,
}

/// Releases reads held by a gated [`InMemoryDocumentStore`].
#[derive(Debug, Clone)]
pub struct StoreGate {
    permits: Arc<Semaphore>,
}

impl StoreGate {
    /// Let one pending or future read complete.
    pub fn open_one(&self) {
        self.permits.add_permits(1);
    }

    pub fn open_many(&self, reads: usize) {
        self.permits.add_permits(reads);
    }
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> (Self, StoreGate) {
        let permits = Arc::new(Semaphore::new(0));
        let store = Self {
            inner: Arc::default(),
            gate: Some(Arc::clone(&permits)),
        };
        (store, StoreGate { permits })
    }

    pub fn insert(
        &self,
        collection: &str,
        key: &str,
        fields: Map<String, Value>,
    ) {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard
            .documents
            .insert((collection.to_string(), key.to_string()), fields);
    }

    pub fn insert_profile(
        &self,
        collection: &str,
        user: &UserId,
        document: &ProfileDocument,
    ) {
        let fields = match serde_json::to_value(document) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };
        self.insert(collection, user.as_str(), fields);
    }

    pub fn remove(&self, collection: &str, key: &str) {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard
            .documents
            .remove(&(collection.to_string(), key.to_string()));
    }

    /// Fail every read from now on with `error` until [`Self::clear_failure`].
    pub fn fail_next_reads(&self, error: StoreError) {
        self.inner.write().expect("lock poisoned").failure = Some(error);
    }

    pub fn clear_failure(&self) {
        self.inner.write().expect("lock poisoned").failure = None;
    }

    /// `(collection, key)` of every read issued so far, in order.
    pub fn reads(&self) -> Vec<(String, String)> {
        self.inner.read().expect("lock poisoned").reads.clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<DocumentSnapshot, StoreError> {
        self.inner
            .write()
            .expect("lock poisoned")
            .reads
            .push((collection.to_string(), key.to_string()));

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| StoreError::Transport("gate closed".into()))?;
            permit.forget();
        }

        let guard = self.inner.read().expect("lock poisoned");
        if let Some(error) = &guard.failure {
            return Err(error.clone());
        }
        Ok(
            match guard
                .documents
                .get(&(collection.to_string(), key.to_string()))
            {
                Some(fields) => DocumentSnapshot::found(key, fields.clone()),
                None => DocumentSnapshot::missing(key),
            },
        )
    }
}
