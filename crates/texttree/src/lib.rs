//! In-memory text tree.
//!
//! This crate loads every small-enough file below a root directory into memory
//! once and serves its contents by a derived lookup key:
//! - Keys are root-relative paths with the file extension dropped
//! - Sibling files sharing a stem are kept apart under their full filenames
//! - Subdirectories are recorded as markers whose keys end in `/`
//!
//! The resulting [`EntityStore`] is immutable and can be shared freely across
//! threads. It is useful for localization trees and similar sets of small
//! text resources.

pub mod config;
pub mod entity;
pub mod error;
pub mod key;
pub mod tree;

// Re-export main types
pub use config::{LoadConfig, DEFAULT_MAX_FILE_SIZE};
pub use entity::{DirectoryEntity, Entity, EntityKind, FileEntity};
pub use error::{Result, TextTreeError};
pub use tree::EntityStore;
