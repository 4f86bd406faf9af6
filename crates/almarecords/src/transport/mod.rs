//! # Transport
//!
//! The [`Transport`] trait is the seam between records and wherever the
//! resource JSON actually lives. A transport moves wire strings only: it
//! knows nothing about schemas or merge rules, those belong to
//! [`crate::api::RecordsApi`].
//!
//! The library itself performs no I/O. [`MemTransport`] keeps wire strings
//! in a `HashMap` for tests; real transports (HTTP, a directory of JSON
//! files) are supplied by the client.
//!
//! Resources are addressed by their schema name (`users`), ids by the
//! resource's primary identifier.

mod memory;

pub use memory::MemTransport;

use crate::error::{RecordError, Result};

/// Abstract interface for raw resource I/O.
pub trait Transport {
    /// Read the wire form of one resource.
    /// Returns Ok(None) when nothing is stored under `id`.
    fn fetch(&self, resource: &str, id: &str) -> Result<Option<String>>;

    /// Store the wire form, replacing whatever was there.
    /// MUST be atomic: a failed store leaves the previous value intact.
    fn store(&self, resource: &str, id: &str, wire: &str) -> Result<()>;

    /// Ids stored for `resource`, sorted.
    fn list_ids(&self, resource: &str) -> Result<Vec<String>>;

    /// Remove one resource. Returns false when nothing was stored.
    fn remove(&self, resource: &str, id: &str) -> Result<bool>;
}

/// Reject ids that cannot address a single record: empty, starting with a
/// dot (which also covers `.` and `..`), or containing path separators or
/// control characters.
pub fn check_id(id: &str) -> Result<()> {
    let invalid = id.trim().is_empty()
        || id.starts_with('.')
        || id.contains(['/', '\\'])
        || id.chars().any(char::is_control);
    if invalid {
        return Err(RecordError::Transport(format!("invalid record id '{id}'")));
    }
    Ok(())
}
