//! Multibrowser configuration system.
//!
//! Two JSON documents: the persistent settings file (theme, dark-mode
//! flag, per-URL zoom factors) under the OS config directory, and the
//! tab-list file naming the fixed set of tabs. Both fail open: a
//! missing or corrupt file degrades to compiled-in defaults without
//! surfacing an error to the user.

pub mod paths;
pub mod schema;
pub mod store;
pub mod tabs;

pub use schema::{PersistentConfig, Theme};
pub use store::ConfigStore;
pub use tabs::{load_tabs, TabEntry};
