//! Native Notify indie-push subscriptions.

use super::http::{EndpointError, join_segments, parse_base_url};

use lostfound_contracts::push::{PushError, PushRegistry};
use lostfound_model::{PushCredentials, UserId};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Clone)]
pub struct NativeNotifyRegistry {
    client: Client,
    base_url: Url,
}

impl NativeNotifyRegistry {
    pub fn new(client: Client, base_url: &str) -> Result<Self, EndpointError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// `DELETE` target removing `subscriber` from the app's indie push list.
    pub fn unregister_url(
        &self,
        subscriber: &UserId,
        credentials: &PushCredentials,
    ) -> Url {
        let app_id = credentials.app_id.to_string();
        join_segments(
            &self.base_url,
            [
                "api",
                "app",
                "indie",
                "sub",
                app_id.as_str(),
                credentials.app_token.as_str(),
                subscriber.as_str(),
            ],
        )
    }
}

#[async_trait]
impl PushRegistry for NativeNotifyRegistry {
    #[instrument(skip(self, credentials), fields(app_id = credentials.app_id))]
    async fn unregister(
        &self,
        subscriber: &UserId,
        credentials: &PushCredentials,
    ) -> Result<(), PushError> {
        let response = self
            .client
            .delete(self.unregister_url(subscriber, credentials))
            .send()
            .await
            .map_err(|err| PushError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PushError::Rejected {
                status: status.as_u16(),
            });
        }
        debug!("indie subscription removed");
        Ok(())
    }
}
