use lostfound_contracts::push::{PushError, PushRegistry};
use lostfound_model::{PushCredentials, UserId};

use async_trait::async_trait;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

/// Push registry that records unregister calls.
///
/// With a delay the call is recorded only after sleeping, so a caller that
/// stops waiting early leaves no record.
#[derive(Debug, Clone, Default)]
pub struct RecordingPushRegistry {
    inner: Arc<Mutex<InnerPush>>,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
struct InnerPush {
    calls: Vec<(UserId, PushCredentials)>,
    failure: Option<PushError>,
}

impl RecordingPushRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: PushError) -> Self {
        let registry = Self::default();
        registry.inner.lock().expect("lock poisoned").failure = Some(error);
        registry
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(UserId, PushCredentials)> {
        self.inner.lock().expect("lock poisoned").calls.clone()
    }
}

#[async_trait]
impl PushRegistry for RecordingPushRegistry {
    async fn unregister(
        &self,
        subscriber: &UserId,
        credentials: &PushCredentials,
    ) -> Result<(), PushError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut guard = self.inner.lock().expect("lock poisoned");
        guard.calls.push((subscriber.clone(), credentials.clone()));
        match &guard.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
