//! Multi-field block payloads.
//!
//! These carry the nested object that sits under a block's payload key, for example the
//! `{"name", "bio", "avatarImage"}` object of an `author` block. Field names on the wire are
//! fixed and strict: unknown keys are rejected and absent optional fields are omitted when
//! encoding.

use crate::ImageSource;
use serde::{Deserialize, Serialize};

/// An article author, used by both the header and the content `author` blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Author {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_image: Option<ImageSource>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: None,
            avatar_image: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar(mut self, avatar: ImageSource) -> Self {
        self.avatar_image = Some(avatar);
        self
    }
}

/// An inline image with an optional caption.
///
/// The source is written under `imageName` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    #[serde(rename = "imageName")]
    pub source: ImageSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A pull quote with optional attribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Quote {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A numbered heading introducing a run of list items (`1. Pack light`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListItemHeader {
    pub number: u32,
    pub text: String,
}

/// A code listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeBlock {
    pub code: String,

    /// Language hint for highlighting, for example `rust`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_omits_absent_fields() {
        let author = Author::new("Ada");
        assert_eq!(serde_json::to_value(&author).expect("encode"), json!({"name": "Ada"}));
    }

    #[test]
    fn author_uses_camel_case_avatar_key() {
        let author = Author::new("Ada")
            .with_bio("Engineer")
            .with_avatar(ImageSource::remote("https://x.test/ada.png"));
        assert_eq!(
            serde_json::to_value(&author).expect("encode"),
            json!({
                "name": "Ada",
                "bio": "Engineer",
                "avatarImage": {"remote": {"url": "https://x.test/ada.png"}}
            })
        );
    }

    #[test]
    fn null_optionals_decode_as_absent() {
        let quote: Quote =
            serde_json::from_value(json!({"text": "Hi", "author": null})).expect("decode");
        assert_eq!(quote.author, None);
    }

    #[test]
    fn list_item_header_rejects_negative_numbers() {
        let result = serde_json::from_value::<ListItemHeader>(json!({"number": -1, "text": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn image_source_lives_under_image_name() {
        let image: Image = serde_json::from_value(json!({
            "imageName": {"asset": {"name": "map.png"}},
            "caption": "The route"
        }))
        .expect("decode");
        assert_eq!(image.source.asset_name(), Some("map.png"));
        assert_eq!(image.caption.as_deref(), Some("The route"));
    }
}
