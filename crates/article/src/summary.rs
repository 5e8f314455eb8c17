//! Article summary snapshot.

use crate::ImageSource;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only bundle of an article's derived values, built by [`Article::summary`].
///
/// A summary is a snapshot: it does not track later articles built from the same blocks.
///
/// [`Article::summary`]: crate::Article::summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub author_name: Option<String>,
    pub hero_image_source: Option<ImageSource>,
    pub primary_topic: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub content_preview: Option<String>,
}

impl ArticleSummary {
    /// The content preview cut to at most `max_chars` characters.
    ///
    /// Cuts on a character boundary and appends `…` when text was dropped. The ellipsis counts
    /// towards the limit.
    pub fn preview_excerpt(&self, max_chars: usize) -> Option<String> {
        let preview = self.content_preview.as_deref()?;
        if preview.chars().count() <= max_chars {
            return Some(preview.to_string());
        }
        if max_chars == 0 {
            return Some(String::new());
        }
        let kept: String = preview.chars().take(max_chars.saturating_sub(1)).collect();
        Some(format!("{}…", kept.trim_end()))
    }
}
