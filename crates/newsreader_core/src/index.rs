use crate::Article;

/// Session-lifetime lookup from article URL to the full record.
///
/// Backed by whatever the feed has currently accumulated; this is not a
/// durable cache. A URL never loaded in this session is a miss even if it
/// exists upstream. Navigation identifiers must be decoded by the caller
/// before lookup; the index compares exact strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleIndex {
    articles: Vec<Article>,
}

impl ArticleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backing list with the current accumulated articles.
    pub fn register(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    /// Exact-match lookup by URL.
    pub fn lookup(&self, url: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.url == url)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
