//! The article aggregate and its JSON codec.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "id": "a1",
//!   "header": [{"type": "title", "title": "Hi"}],
//!   "content": [{"type": "body", "body": "Hello"}],
//!   "date": "2024-03-01T09:30:00Z",
//!   "topic": "travel"
//! }
//! ```
//!
//! `date` and `topic` are omitted when absent. Entry identifiers are never written.

use crate::{
    wire, ArticleError, ArticleResult, ContentBlock, ContentEntry, HeaderBlock, HeaderEntry,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const ID: &str = "id";
const HEADER: &str = "header";
const CONTENT: &str = "content";
const DATE: &str = "date";
const TOPIC: &str = "topic";

/// A complete article.
///
/// Articles are immutable once built; to edit one, build a new article from the edited blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    id: String,
    header: Vec<HeaderEntry>,
    content: Vec<ContentEntry>,
    date: Option<DateTime<Utc>>,
    topic: Option<String>,
}

impl Article {
    /// Build an article, wrapping every block in a freshly minted entry.
    pub fn new(
        id: impl Into<String>,
        header: impl IntoIterator<Item = HeaderBlock>,
        content: impl IntoIterator<Item = ContentBlock>,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into_iter().map(HeaderEntry::new).collect(),
            content: content.into_iter().map(ContentEntry::new).collect(),
            date: None,
            topic: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &[HeaderEntry] {
        &self.header
    }

    pub fn content(&self) -> &[ContentEntry] {
        &self.content
    }

    /// The article-level date. See [`Article::publication_date`] for the value to display.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Compare two articles for persistence, ignoring entry identifiers.
    pub fn same_content(&self, other: &Self) -> bool {
        self.id == other.id
            && self.date == other.date
            && self.topic == other.topic
            && self.header.len() == other.header.len()
            && self.content.len() == other.content.len()
            && self.header.iter().zip(&other.header).all(|(a, b)| a.same_block(b))
            && self.content.iter().zip(&other.content).all(|(a, b)| a.same_block(b))
    }

    /// Encode to a JSON value.
    pub fn to_json(&self) -> ArticleResult<Value> {
        let header = self
            .header
            .iter()
            .map(|entry| entry.block().to_json())
            .collect::<ArticleResult<Vec<_>>>()?;
        let content = self
            .content
            .iter()
            .map(|entry| entry.block().to_json())
            .collect::<ArticleResult<Vec<_>>>()?;

        let mut object = Map::new();
        object.insert(ID.to_string(), Value::String(self.id.clone()));
        object.insert(HEADER.to_string(), Value::Array(header));
        object.insert(CONTENT.to_string(), Value::Array(content));
        if let Some(date) = &self.date {
            object.insert(DATE.to_string(), wire::timestamp_value(date)?);
        }
        if let Some(topic) = &self.topic {
            object.insert(TOPIC.to_string(), Value::String(topic.clone()));
        }
        Ok(Value::Object(object))
    }

    /// Decode from a JSON value. Every block is wrapped in a newly minted entry.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Malformed`] if `id`, `header` or `content` is missing, any key
    /// is unknown, or any single block fails to decode. No partial article is returned.
    pub fn from_json(value: &Value) -> ArticleResult<Self> {
        let at = wire::ROOT;
        let object = wire::as_object(value, at)?;
        wire::deny_unknown_keys(object, &[ID, HEADER, CONTENT, DATE, TOPIC], at)?;

        let id = wire::string(wire::required(object, ID, at)?, ID)?;

        let header_at = wire::child(at, HEADER);
        let header = wire::as_array(wire::required(object, HEADER, at)?, &header_at)?
            .iter()
            .enumerate()
            .map(|(i, block)| {
                HeaderBlock::decode_at(block, &wire::index(&header_at, i)).map(HeaderEntry::new)
            })
            .collect::<ArticleResult<Vec<_>>>()?;

        let content_at = wire::child(at, CONTENT);
        let content = wire::as_array(wire::required(object, CONTENT, at)?, &content_at)?
            .iter()
            .enumerate()
            .map(|(i, block)| {
                ContentBlock::decode_at(block, &wire::index(&content_at, i)).map(ContentEntry::new)
            })
            .collect::<ArticleResult<Vec<_>>>()?;

        let date = wire::optional(object, DATE)
            .map(|value| wire::timestamp(value, DATE))
            .transpose()?;
        let topic = wire::optional(object, TOPIC)
            .map(|value| wire::string(value, TOPIC))
            .transpose()?;

        Ok(Self {
            id,
            header,
            content,
            date,
            topic,
        })
    }

    /// Decode from UTF-8 text.
    pub fn from_json_str(text: &str) -> ArticleResult<Self> {
        Self::from_json_bytes(text.as_bytes())
    }

    /// Decode from a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Malformed`] if the bytes are not valid UTF-8, are not valid JSON,
    /// or do not describe an article.
    pub fn from_json_bytes(bytes: &[u8]) -> ArticleResult<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            ArticleError::malformed(wire::ROOT, format!("input is not valid UTF-8: {e}"))
        })?;
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ArticleError::malformed(wire::ROOT, format!("invalid JSON: {e}")))?;

        match Self::from_json(&value) {
            Ok(article) => {
                tracing::debug!(
                    article_id = %article.id,
                    header_blocks = article.header.len(),
                    content_blocks = article.content.len(),
                    "decoded article"
                );
                Ok(article)
            }
            Err(err) => {
                tracing::debug!(error = %err, "article decode failed");
                Err(err)
            }
        }
    }

    /// Encode to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Encoding`] if serialisation fails.
    pub fn to_json_bytes(&self) -> ArticleResult<Vec<u8>> {
        let bytes = serde_json::to_vec(&self.to_json()?)
            .map_err(|e| ArticleError::Encoding(e.to_string()))?;
        tracing::trace!(article_id = %self.id, bytes = bytes.len(), "encoded article");
        Ok(bytes)
    }

    /// Encode to compact JSON text.
    pub fn to_json_string(&self) -> ArticleResult<String> {
        String::from_utf8(self.to_json_bytes()?)
            .map_err(|e| ArticleError::Encoding(format!("encoded bytes are not valid UTF-8: {e}")))
    }

    /// Encode to indented JSON text.
    pub fn to_json_string_pretty(&self) -> ArticleResult<String> {
        serde_json::to_string_pretty(&self.to_json()?)
            .map_err(|e| ArticleError::Encoding(e.to_string()))
    }
}

impl Serialize for Article {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Article {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
