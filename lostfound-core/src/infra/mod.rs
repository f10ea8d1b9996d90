//! HTTP-backed implementations of the collaborator contracts.

pub mod firestore;
pub mod http;
pub mod native_notify;

pub use firestore::FirestoreDocumentStore;
pub use http::{EndpointError, build_client, parse_base_url};
pub use native_notify::NativeNotifyRegistry;
