//! The entry-shaped record handed over by the content pipeline.

use serde::{Deserialize, Serialize};

/// A feed entry as delivered by the reader's sync layer.
///
/// Only `title` and `content` are touched by script conversion; the other
/// fields are carried through unchanged so a converted entry can stand in
/// for the original everywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Article body as sanitized HTML, when the feed provides one.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{"id": 7, "title": "Hello", "url": "https://example.com/7"}"#;
        let entry: FeedEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.title, "Hello");
        assert!(entry.author.is_none());
        assert!(entry.content.is_none());
        assert!(entry.published_at.is_none());
    }
}
