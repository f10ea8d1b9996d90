/// Static credentials of the push-notification app.
///
/// These are configuration, not per-call input: every unregister call made
/// by one process uses the same pair.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushCredentials {
    pub app_id: u32,
    pub app_token: String,
}

impl PushCredentials {
    pub fn new(app_id: u32, app_token: impl Into<String>) -> Self {
        Self {
            app_id,
            app_token: app_token.into(),
        }
    }
}

impl std::fmt::Debug for PushCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushCredentials")
            .field("app_id", &self.app_id)
            .field("app_token", &"<redacted>")
            .finish()
    }
}
