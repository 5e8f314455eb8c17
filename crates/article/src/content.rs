//! Content blocks and their wire codec.
//!
//! Same flat shape as the header blocks:
//!
//! ```json
//! {"type": "body", "body": "It was a bright morning."}
//! {"type": "codeBlock", "codeBlock": {"code": "fn main() {}", "language": "rust"}}
//! {"type": "divider"}
//! ```
//!
//! `divider` carries no payload key at all.

use crate::payload::{Author, CodeBlock, Image, ListItemHeader, Quote};
use crate::{wire, ArticleError, ArticleResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const HEADING: &str = "heading";
const BODY: &str = "body";
const IMAGE: &str = "image";
const QUOTE: &str = "quote";
const NUMBERED_LIST_HEADER: &str = "numberedListHeader";
const LIST_ITEM_HEADER: &str = "listItemHeader";
const LIST_ITEM: &str = "listItem";
const NUMBERED_LIST_ITEM: &str = "numberedListItem";
const CODE_BLOCK: &str = "codeBlock";
const AUTHOR: &str = "author";
const DIVIDER: &str = "divider";

/// A block in the article body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentBlock {
    Heading(String),
    Body(String),
    Image(Image),
    Quote(Quote),
    NumberedListHeader(Vec<String>),
    ListItemHeader(ListItemHeader),
    ListItem(Vec<String>),
    NumberedListItem(Vec<String>),
    CodeBlock(CodeBlock),
    Author(Author),
    Divider,
}

impl ContentBlock {
    /// The discriminator token written to the `type` key.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading(_) => HEADING,
            Self::Body(_) => BODY,
            Self::Image(_) => IMAGE,
            Self::Quote(_) => QUOTE,
            Self::NumberedListHeader(_) => NUMBERED_LIST_HEADER,
            Self::ListItemHeader(_) => LIST_ITEM_HEADER,
            Self::ListItem(_) => LIST_ITEM,
            Self::NumberedListItem(_) => NUMBERED_LIST_ITEM,
            Self::CodeBlock(_) => CODE_BLOCK,
            Self::Author(_) => AUTHOR,
            Self::Divider => DIVIDER,
        }
    }

    /// Encode to the flat `{"type": ..., <type>: payload}` shape.
    pub fn to_json(&self) -> ArticleResult<Value> {
        let payload = match self {
            Self::Heading(text) | Self::Body(text) => Some(Value::String(text.clone())),
            Self::Image(image) => Some(wire::encode(image)?),
            Self::Quote(quote) => Some(wire::encode(quote)?),
            Self::NumberedListHeader(items)
            | Self::ListItem(items)
            | Self::NumberedListItem(items) => Some(wire::encode(items)?),
            Self::ListItemHeader(header) => Some(wire::encode(header)?),
            Self::CodeBlock(code) => Some(wire::encode(code)?),
            Self::Author(author) => Some(wire::encode(author)?),
            Self::Divider => None,
        };

        let mut object = Map::new();
        object.insert(
            wire::DISCRIMINATOR.to_string(),
            Value::String(self.kind().to_string()),
        );
        if let Some(payload) = payload {
            object.insert(self.kind().to_string(), payload);
        }
        Ok(Value::Object(object))
    }

    /// Decode from the flat wire shape.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Malformed`] if the discriminator is missing or unknown, the
    /// payload key is missing, the payload has the wrong shape, or extra keys are present.
    pub fn from_json(value: &Value) -> ArticleResult<Self> {
        Self::decode_at(value, wire::ROOT)
    }

    pub(crate) fn decode_at(value: &Value, at: &str) -> ArticleResult<Self> {
        let object = wire::as_object(value, at)?;
        let kind = wire::discriminator(object, at)?;

        let block = match kind {
            HEADING => {
                let (payload, at) = wire::payload(object, HEADING, at)?;
                Self::Heading(wire::string(payload, &at)?)
            }
            BODY => {
                let (payload, at) = wire::payload(object, BODY, at)?;
                Self::Body(wire::string(payload, &at)?)
            }
            IMAGE => {
                let (payload, at) = wire::payload(object, IMAGE, at)?;
                Self::Image(wire::decode(payload, &at)?)
            }
            QUOTE => {
                let (payload, at) = wire::payload(object, QUOTE, at)?;
                Self::Quote(wire::decode(payload, &at)?)
            }
            NUMBERED_LIST_HEADER => {
                let (payload, at) = wire::payload(object, NUMBERED_LIST_HEADER, at)?;
                Self::NumberedListHeader(wire::decode(payload, &at)?)
            }
            LIST_ITEM_HEADER => {
                let (payload, at) = wire::payload(object, LIST_ITEM_HEADER, at)?;
                Self::ListItemHeader(wire::decode(payload, &at)?)
            }
            LIST_ITEM => {
                let (payload, at) = wire::payload(object, LIST_ITEM, at)?;
                Self::ListItem(wire::decode(payload, &at)?)
            }
            NUMBERED_LIST_ITEM => {
                let (payload, at) = wire::payload(object, NUMBERED_LIST_ITEM, at)?;
                Self::NumberedListItem(wire::decode(payload, &at)?)
            }
            CODE_BLOCK => {
                let (payload, at) = wire::payload(object, CODE_BLOCK, at)?;
                Self::CodeBlock(wire::decode(payload, &at)?)
            }
            AUTHOR => {
                let (payload, at) = wire::payload(object, AUTHOR, at)?;
                Self::Author(wire::decode(payload, &at)?)
            }
            DIVIDER => {
                wire::deny_unknown_keys(object, &[wire::DISCRIMINATOR], at)?;
                Self::Divider
            }
            other => {
                return Err(ArticleError::malformed(
                    wire::child(at, wire::DISCRIMINATOR),
                    format!("unknown content block type '{other}'"),
                ))
            }
        };
        Ok(block)
    }
}

impl Serialize for ContentBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageSource;
    use serde_json::json;

    fn fixtures() -> Vec<(Value, ContentBlock)> {
        vec![
            (
                json!({"type": "heading", "heading": "Day one"}),
                ContentBlock::Heading("Day one".into()),
            ),
            (
                json!({"type": "body", "body": "We set off early."}),
                ContentBlock::Body("We set off early.".into()),
            ),
            (
                json!({"type": "image", "image": {
                    "imageName": {"asset": {"name": "harbour.jpg"}},
                    "caption": "The harbour at dawn"
                }}),
                ContentBlock::Image(Image {
                    source: ImageSource::asset("harbour.jpg").expect("asset"),
                    caption: Some("The harbour at dawn".into()),
                }),
            ),
            (
                json!({"type": "quote", "quote": {"text": "Keep walking.", "author": "Ada"}}),
                ContentBlock::Quote(Quote {
                    text: "Keep walking.".into(),
                    author: Some("Ada".into()),
                }),
            ),
            (
                json!({"type": "numberedListHeader", "numberedListHeader": ["Step", "Notes"]}),
                ContentBlock::NumberedListHeader(vec!["Step".into(), "Notes".into()]),
            ),
            (
                json!({"type": "listItemHeader", "listItemHeader": {"number": 2, "text": "Pack light"}}),
                ContentBlock::ListItemHeader(ListItemHeader {
                    number: 2,
                    text: "Pack light".into(),
                }),
            ),
            (
                json!({"type": "listItem", "listItem": ["Water", "Map"]}),
                ContentBlock::ListItem(vec!["Water".into(), "Map".into()]),
            ),
            (
                json!({"type": "numberedListItem", "numberedListItem": ["1", "Start at the pier"]}),
                ContentBlock::NumberedListItem(vec!["1".into(), "Start at the pier".into()]),
            ),
            (
                json!({"type": "codeBlock", "codeBlock": {
                    "code": "fn main() {}",
                    "language": "rust",
                    "caption": "Smallest program"
                }}),
                ContentBlock::CodeBlock(CodeBlock {
                    code: "fn main() {}".into(),
                    language: Some("rust".into()),
                    caption: Some("Smallest program".into()),
                }),
            ),
            (
                json!({"type": "author", "author": {"name": "Grace"}}),
                ContentBlock::Author(Author::new("Grace")),
            ),
            (json!({"type": "divider"}), ContentBlock::Divider),
        ]
    }

    #[test]
    fn every_variant_has_a_matching_fixture() {
        let fixtures = fixtures();
        assert_eq!(fixtures.len(), 11);

        for (fixture, expected) in fixtures {
            let decoded = ContentBlock::from_json(&fixture).expect("fixture should decode");
            assert_eq!(decoded, expected);
            assert_eq!(decoded.kind(), fixture["type"]);
            assert_eq!(decoded.to_json().expect("encode"), fixture);
        }
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let decoded = ContentBlock::from_json(&json!({
            "type": "codeBlock",
            "codeBlock": {"code": "ls"}
        }))
        .expect("decode");
        assert_eq!(
            decoded,
            ContentBlock::CodeBlock(CodeBlock {
                code: "ls".into(),
                language: None,
                caption: None,
            })
        );
    }

    #[test]
    fn divider_rejects_payload() {
        let err = ContentBlock::from_json(&json!({"type": "divider", "divider": {}}))
            .expect_err("divider has no payload");
        assert!(err.to_string().contains("unknown key 'divider'"));
    }

    #[test]
    fn rejects_unknown_discriminator() {
        let err = ContentBlock::from_json(&json!({"type": "bogus"})).expect_err("bogus");
        match err {
            ArticleError::Malformed { at, reason } => {
                assert_eq!(at, "type");
                assert!(reason.contains("unknown content block type 'bogus'"));
            }
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_discriminator_with_different_case() {
        assert!(ContentBlock::from_json(&json!({"type": "Body", "Body": "x"})).is_err());
        assert!(ContentBlock::from_json(&json!({"type": "code_block", "code_block": {"code": ""}}))
            .is_err());
    }

    #[test]
    fn reports_nested_field_location() {
        let err = ContentBlock::from_json(&json!({
            "type": "image",
            "image": {"imageName": {"asset": {"name": 5}}}
        }))
        .expect_err("numeric asset name");
        match err {
            ArticleError::Malformed { at, .. } => assert!(at.starts_with("image.imageName")),
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_list_item_header_without_number() {
        let err = ContentBlock::from_json(&json!({
            "type": "listItemHeader",
            "listItemHeader": {"text": "Pack light"}
        }))
        .expect_err("missing number");
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn rejects_non_object_block() {
        let err = ContentBlock::from_json(&json!(["body", "x"])).expect_err("array");
        assert!(err.to_string().contains("expected an object, found array"));
    }
}
