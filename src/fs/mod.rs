//! File system operations with transaction support.
//!
//! Provides a backed-up, atomic rewrite of a single file.

pub mod transaction;

pub use transaction::{BACKUP_SUFFIX, Transaction, backup_path};
