/// Display payload for a failed profile load.
///
/// Carries no machine-readable code: the not-found and fetch-failure paths
/// only differ in their wording.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorInfo {
    pub title: String,
    pub message: String,
}

impl ErrorInfo {
    pub const TITLE: &'static str = "Error";
    pub const DISMISS_LABEL: &'static str = "Close";

    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// An alert with the standard "Error" title.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Self::TITLE, message)
    }

    pub fn dismiss_label(&self) -> &'static str {
        Self::DISMISS_LABEL
    }
}
