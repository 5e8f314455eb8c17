//! Derived, read-only views over an article.
//!
//! Every accessor scans its sequence left to right and uses the first block of the matching
//! variant. Later blocks of the same variant are ignored. Nothing is cached: each call reads
//! the current sequences.

use crate::payload::Author;
use crate::{Article, ArticleSummary, ContentBlock, HeaderBlock, ImageSource};
use chrono::{DateTime, Utc};

/// Title shown when the header has no title block.
pub const PLACEHOLDER_TITLE: &str = "Untitled";

impl Article {
    fn first_header<'a, R>(&'a self, pick: impl Fn(&'a HeaderBlock) -> Option<R>) -> Option<R> {
        self.header().iter().find_map(|entry| pick(entry.block()))
    }

    fn first_content<'a, R>(&'a self, pick: impl Fn(&'a ContentBlock) -> Option<R>) -> Option<R> {
        self.content().iter().find_map(|entry| pick(entry.block()))
    }

    /// The first header title, or [`PLACEHOLDER_TITLE`].
    pub fn title(&self) -> &str {
        self.first_header(|block| match block {
            HeaderBlock::Title(title) => Some(title.as_str()),
            _ => None,
        })
        .unwrap_or(PLACEHOLDER_TITLE)
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.first_header(|block| match block {
            HeaderBlock::Subtitle(subtitle) => Some(subtitle.as_str()),
            _ => None,
        })
    }

    /// The first header author. Content `author` blocks are not considered.
    pub fn author(&self) -> Option<&Author> {
        self.first_header(|block| match block {
            HeaderBlock::Author(author) => Some(author),
            _ => None,
        })
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author().map(|author| author.name.as_str())
    }

    /// Bio of the first header author; a later author's bio is never used.
    pub fn author_bio(&self) -> Option<&str> {
        self.author().and_then(|author| author.bio.as_deref())
    }

    pub fn author_avatar(&self) -> Option<&ImageSource> {
        self.author().and_then(|author| author.avatar_image.as_ref())
    }

    pub fn hero_image(&self) -> Option<&ImageSource> {
        self.first_header(|block| match block {
            HeaderBlock::HeroImage(source) => Some(source),
            _ => None,
        })
    }

    /// The first header date, falling back to the article-level date.
    pub fn publication_date(&self) -> Option<DateTime<Utc>> {
        self.first_header(|block| match block {
            HeaderBlock::Date(date) => Some(*date),
            _ => None,
        })
        .or_else(|| self.date())
    }

    pub fn topics(&self) -> Option<&[String]> {
        self.first_header(|block| match block {
            HeaderBlock::Topics(topics) => Some(topics.as_slice()),
            _ => None,
        })
    }

    /// First element of the first topics block. An empty topics block yields `None`.
    pub fn primary_topic(&self) -> Option<&str> {
        self.topics()
            .and_then(|topics| topics.first())
            .map(String::as_str)
    }

    /// Text of the first body block.
    pub fn content_preview(&self) -> Option<&str> {
        self.first_content(|block| match block {
            ContentBlock::Body(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every image reference in document order: header blocks first, then content blocks.
    ///
    /// Includes hero images, author avatars (header and content) and inline images.
    pub fn image_sources(&self) -> Vec<&ImageSource> {
        let header = self.header().iter().filter_map(|entry| match entry.block() {
            HeaderBlock::HeroImage(source) => Some(source),
            HeaderBlock::Author(author) => author.avatar_image.as_ref(),
            _ => None,
        });
        let content = self.content().iter().filter_map(|entry| match entry.block() {
            ContentBlock::Image(image) => Some(&image.source),
            ContentBlock::Author(author) => author.avatar_image.as_ref(),
            _ => None,
        });
        header.chain(content).collect()
    }

    /// Snapshot of the derived values.
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id().to_string(),
            title: self.title().to_string(),
            subtitle: self.subtitle().map(str::to_string),
            author_name: self.author_name().map(str::to_string),
            hero_image_source: self.hero_image().cloned(),
            primary_topic: self.primary_topic().map(str::to_string),
            date: self.publication_date(),
            content_preview: self.content_preview().map(str::to_string),
        }
    }
}
