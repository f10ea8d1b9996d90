pub mod auth;
pub mod document;
pub mod navigation;
pub mod push;

pub use auth::StubAuthService;
pub use document::{InMemoryDocumentStore, StoreGate};
pub use navigation::RecordingNavigator;
pub use push::RecordingPushRegistry;
