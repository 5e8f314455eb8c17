//! Image references.
//!
//! An [`ImageSource`] only says *where* an image lives. Resolving an asset name to bundled bytes
//! or fetching a remote URL is the renderer's job; when a bundled asset cannot be found the
//! renderer reports [`ArticleError::MissingAsset`](crate::ArticleError::MissingAsset).
//!
//! Wire shape:
//!
//! ```json
//! {"asset": {"name": "harbour.jpg"}}
//! {"remote": {"url": "https://example.com/harbour.jpg"}}
//! ```
//!
//! Exactly one of the two keys must be present. Names and URLs are carried verbatim.

use crate::{wire, ArticleError, ArticleResult};
use folio_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where an image reference points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", deny_unknown_fields)]
pub enum ImageSource {
    /// A resource bundled with the application, looked up by name.
    Asset { name: NonEmptyText },
    /// An absolute URL.
    Remote { url: String },
}

impl ImageSource {
    /// Reference a bundled asset.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Malformed`] if `name` is empty.
    pub fn asset(name: impl Into<String>) -> ArticleResult<Self> {
        let name = NonEmptyText::new(name)
            .map_err(|e| ArticleError::malformed("asset.name", e.to_string()))?;
        Ok(Self::Asset { name })
    }

    /// Reference a remote image.
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    /// The bundled asset name, if this is an asset reference.
    pub fn asset_name(&self) -> Option<&str> {
        match self {
            Self::Asset { name } => Some(name.as_str()),
            Self::Remote { .. } => None,
        }
    }

    /// The remote URL, if this is a remote reference.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Asset { .. } => None,
            Self::Remote { url } => Some(url),
        }
    }

    /// Encode to the `{"asset": ...}` / `{"remote": ...}` wire shape.
    pub fn to_json(&self) -> ArticleResult<Value> {
        wire::encode(self)
    }

    /// Decode from the wire shape.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Malformed`] unless the value is an object with exactly one of
    /// `asset` or `remote`, holding `{"name": <non-empty string>}` or `{"url": <string>}`.
    pub fn from_json(value: &Value) -> ArticleResult<Self> {
        Self::decode_at(value, wire::ROOT)
    }

    pub(crate) fn decode_at(value: &Value, at: &str) -> ArticleResult<Self> {
        let object = wire::as_object(value, at)?;
        if object.len() != 1 {
            return Err(ArticleError::malformed(
                at,
                format!(
                    "expected exactly one of 'asset' or 'remote', found {} keys",
                    object.len()
                ),
            ));
        }
        wire::decode(value, at)
    }
}
