//! Article content model and JSON codec.
//!
//! This crate defines the in-memory model of a styled article (header blocks, content blocks,
//! image references) and translates it to and from a hand-shaped JSON wire format.
//!
//! Rendering lives outside this crate. Renderers traverse an [`Article`] read-only, use entry
//! identifiers as diffing keys, and resolve [`ImageSource`] references themselves.
//!
//! The crate performs no I/O. Decode and encode diagnostics go through `tracing` at debug and
//! trace level and are only visible when the host installs a subscriber.

mod accessors;
pub mod article;
pub mod content;
pub mod entry;
pub mod header;
pub mod image;
pub mod payload;
pub mod summary;
mod wire;

pub use accessors::PLACEHOLDER_TITLE;
pub use article::Article;
pub use content::ContentBlock;
pub use entry::{ContentEntry, Entry, HeaderEntry};
pub use folio_types::NonEmptyText;
pub use folio_uuid::EntryId;
pub use header::HeaderBlock;
pub use image::ImageSource;
pub use payload::{Author, CodeBlock, Image, ListItemHeader, Quote};
pub use summary::ArticleSummary;

/// Errors returned by the article codec and its consumers.
#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    /// Input did not match the expected shape at `at`.
    #[error("malformed article JSON at {at}: {reason}")]
    Malformed { at: String, reason: String },

    /// An in-memory value could not be serialised.
    #[error("failed to encode article: {0}")]
    Encoding(String),

    /// A bundled image asset could not be resolved. Raised by renderers, never by the codec.
    #[error("image asset '{name}' is not bundled")]
    MissingAsset { name: String },
}

impl ArticleError {
    pub(crate) fn malformed(at: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            at: at.into(),
            reason: reason.into(),
        }
    }

    /// Build the error a renderer reports when `name` does not resolve to a bundled asset.
    pub fn missing_asset(name: impl Into<String>) -> Self {
        Self::MissingAsset { name: name.into() }
    }
}

/// Type alias for Results that can fail with an [`ArticleError`].
pub type ArticleResult<T> = Result<T, ArticleError>;

/// Read an article from JSON text.
pub fn read_article_json(text: &str) -> ArticleResult<Article> {
    Article::from_json_str(text)
}

/// Read an article from a JSON byte buffer.
pub fn read_article_bytes(bytes: &[u8]) -> ArticleResult<Article> {
    Article::from_json_bytes(bytes)
}

/// Write an article as compact JSON text.
pub fn write_article_json(article: &Article) -> ArticleResult<String> {
    article.to_json_string()
}

/// Write an article as compact JSON bytes.
pub fn write_article_bytes(article: &Article) -> ArticleResult<Vec<u8>> {
    article.to_json_bytes()
}
