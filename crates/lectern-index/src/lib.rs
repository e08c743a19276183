//! # lectern-index
//!
//! Indexing pipeline coordination for Lectern.
//!
//! [`IndexerService`] drives the extract → chunk → vectorize pipeline over a
//! set of registered course folders and publishes the result as an immutable
//! [`IndexSnapshot`], swapped in atomically on every rebuild. [`FolderList`]
//! persists which folders belong to the corpus between runs.
//!
//! Per-document failures (unreadable files, unsupported formats) are counted
//! and broadcast as [`IndexUpdate`] events but never abort a rebuild.

pub mod folders;
pub mod indexer;

pub use folders::FolderList;
pub use indexer::{IndexSnapshot, IndexUpdate, IndexerService};
