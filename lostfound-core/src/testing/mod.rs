//! In-process collaborators for tests and the `lostfoundctl --demo` mode.

pub mod stubs;

pub use stubs::{
    InMemoryDocumentStore, RecordingNavigator, RecordingPushRegistry,
    StoreGate, StubAuthService,
};
