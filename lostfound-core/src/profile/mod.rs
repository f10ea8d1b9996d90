//! Profile screen: load state machine, loader, activation owner and view.

pub mod loader;
pub mod screen;
pub mod state;
pub mod view;

pub use loader::ProfileLoader;
pub use screen::{Activation, ProfileScreen};
pub use state::{LoadState, LoadStateStore};
pub use view::{ActionButton, AlertView, ProfileBody, ProfileDetails, ProfileView};
