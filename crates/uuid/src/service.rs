//! Internal implementation of entry identifiers.

use std::fmt;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Opaque identifier attached to an article entry.
///
/// # Construction
/// [`EntryId::new`] mints a fresh random (RFC 4122 version 4) identifier. Minting is safe to
/// call from any number of threads at once and relies on the 122 random bits of a v4 UUID for
/// uniqueness; no shared state is touched.
///
/// # Display format
/// When displayed or converted to string, `EntryId` always produces the canonical
/// 32-character lowercase hex format without hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryId {
    /// Mints a new identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the identifier as a `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is in canonical identifier form.
    ///
    /// This is a purely syntactic check that validates:
    /// - Exactly 32 bytes long
    /// - Contains only lowercase hex characters (`0-9` and `a-f`)
    ///
    /// Useful for consumers that persist diffing keys as strings and want to sanity check them.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}
