//! Per-User Data Management
//!
//! Everything the engine persists for a user outside of their workspaces
//! lives in one platform-conventional directory tree:
//!
//! - [`paths`] resolves where that tree belongs on the current OS.
//! - [`UserDataStore`] creates and hands out the tree: workspace registry
//!   storage, settings, cache, and the shared global asset library.

pub mod paths;
pub mod store;

pub use store::UserDataStore;
