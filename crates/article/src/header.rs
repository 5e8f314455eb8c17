//! Header blocks and their wire codec.
//!
//! A header block encodes to a flat object holding a `type` discriminator and a payload under a
//! key with the same name:
//!
//! ```json
//! {"type": "title", "title": "Walking the coast path"}
//! {"type": "author", "author": {"name": "Ada", "bio": "Walker"}}
//! ```
//!
//! [`HeaderBlock::to_json`] and [`HeaderBlock::from_json`] must stay in lockstep. Both are
//! exhaustive over the variants so that adding one fails to compile until both paths handle it.

use crate::payload::Author;
use crate::{wire, ArticleError, ArticleResult, ImageSource};
use chrono::{DateTime, Utc};
use folio_types::NonEmptyText;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const HERO_IMAGE: &str = "heroImage";
const TITLE: &str = "title";
const SUBTITLE: &str = "subtitle";
const AUTHOR: &str = "author";
const DATE: &str = "date";
const TOPICS: &str = "topics";

/// A block shown above the article body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderBlock {
    HeroImage(ImageSource),
    Title(NonEmptyText),
    Subtitle(String),
    Author(Author),
    Date(DateTime<Utc>),
    Topics(Vec<String>),
}

impl HeaderBlock {
    /// Build a title block.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Malformed`] if `title` is empty.
    pub fn title(title: impl Into<String>) -> ArticleResult<Self> {
        NonEmptyText::new(title)
            .map(Self::Title)
            .map_err(|e| ArticleError::malformed(TITLE, e.to_string()))
    }

    /// The discriminator token written to the `type` key.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HeroImage(_) => HERO_IMAGE,
            Self::Title(_) => TITLE,
            Self::Subtitle(_) => SUBTITLE,
            Self::Author(_) => AUTHOR,
            Self::Date(_) => DATE,
            Self::Topics(_) => TOPICS,
        }
    }

    /// Encode to the flat `{"type": ..., <type>: payload}` shape.
    pub fn to_json(&self) -> ArticleResult<Value> {
        let payload = match self {
            Self::HeroImage(source) => wire::encode(source)?,
            Self::Title(title) => Value::String(title.as_str().to_string()),
            Self::Subtitle(subtitle) => Value::String(subtitle.clone()),
            Self::Author(author) => wire::encode(author)?,
            Self::Date(date) => wire::timestamp_value(date)?,
            Self::Topics(topics) => wire::encode(topics)?,
        };

        let mut object = Map::new();
        object.insert(
            wire::DISCRIMINATOR.to_string(),
            Value::String(self.kind().to_string()),
        );
        object.insert(self.kind().to_string(), payload);
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
            HERO_IMAGE => {
                let (payload, at) = wire::payload(object, HERO_IMAGE, at)?;
                Self::HeroImage(ImageSource::decode_at(payload, &at)?)
            }
            TITLE => {
                let (payload, at) = wire::payload(object, TITLE, at)?;
                Self::Title(wire::decode(payload, &at)?)
            }
            SUBTITLE => {
                let (payload, at) = wire::payload(object, SUBTITLE, at)?;
                Self::Subtitle(wire::string(payload, &at)?)
            }
            AUTHOR => {
                let (payload, at) = wire::payload(object, AUTHOR, at)?;
                Self::Author(wire::decode(payload, &at)?)
            }
            DATE => {
                let (payload, at) = wire::payload(object, DATE, at)?;
                Self::Date(wire::timestamp(payload, &at)?)
            }
            TOPICS => {
                let (payload, at) = wire::payload(object, TOPICS, at)?;
                Self::Topics(wire::decode(payload, &at)?)
            }
            other => {
                return Err(ArticleError::malformed(
                    wire::child(at, wire::DISCRIMINATOR),
                    format!("unknown header block type '{other}'"),
                ))
            }
        };
        Ok(block)
    }
}

impl Serialize for HeaderBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HeaderBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
