//! Opaque entry identifiers.
//!
//! Every block held by an article is wrapped in an entry carrying an [`EntryId`]. The renderer
//! uses these identifiers as diffing keys when an article is rebuilt, so two entries must never
//! share an identifier within a process, even when their payloads are identical.
//!
//! ## Canonical form
//! When displayed, an identifier is **32 lowercase hexadecimal characters** (no hyphens), the
//! same value you would get from `Uuid::new_v4().simple().to_string()`.
//!
//! Notes:
//! - Identifiers are minted, never parsed. There is no way to build an
//!   [`EntryId`] from an externally supplied string.
//! - Identifiers are never part of any serialized form.

mod service;

// Re-export public types
pub use service::{EntryId, Uuid};
