//! Library state held by the client

pub mod view;

pub use view::{LibraryFilter, LibraryView, ViewMode};
