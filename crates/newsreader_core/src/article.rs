use chrono::{DateTime, Utc};

/// One syndicated article as normalized from the search API.
///
/// Identity is the source `url`; the upstream provides no separate id.
/// Records are immutable once received and are owned collectively by the
/// accumulated feed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub published_at: DateTime<Utc>,
    pub source_name: String,
}
