//! In-memory industry dashboard: an announcements feed, a group chat and a
//! notification center, each backed by a [`store::ListResourceStore`].

pub mod common;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod search;
pub mod store;
pub mod ui;

pub use dashboard::{Dashboard, Overview};
pub use error::{SeedError, StoreError};
