use std::collections::HashSet;

use crate::{Article, Filter};

/// Snapshot of the feed for rendering.
///
/// `articles` is the materialized display list: deduplicated by URL with
/// the first occurrence kept, since successive upstream pages can overlap.
/// `has_more` and `total_results` still describe the raw accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedView {
    pub articles: Vec<Article>,
    pub loading: bool,
    pub loading_more: bool,
    pub has_more: bool,
    pub total_results: u32,
    pub current_page: u32,
    pub error: Option<String>,
    pub filter: Filter,
}

/// Drop later occurrences of an already-seen URL, preserving order.
pub fn dedupe_by_url(articles: &[Article]) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .iter()
        .filter(|article| seen.insert(article.url.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::dedupe_by_url;
    use crate::Article;
    use chrono::{TimeZone, Utc};

    fn article(url: &str, title: &str) -> Article {
        Article {
            url: url.to_string(),
            title: title.to_string(),
            description: None,
            content: None,
            image_url: None,
            author: None,
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            source_name: "wire".to_string(),
        }
    }

    #[test]
    fn unique_lists_pass_through_unchanged() {
        let input = vec![article("https://a", "a"), article("https://b", "b")];
        assert_eq!(dedupe_by_url(&input), input);
    }

    #[test]
    fn first_occurrence_wins_and_order_is_kept() {
        let input = vec![
            article("https://a", "first a"),
            article("https://b", "b"),
            article("https://a", "second a"),
            article("https://c", "c"),
        ];
        let deduped = dedupe_by_url(&input);
        let titles: Vec<_> = deduped.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["first a", "b", "c"]);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let input = vec![
            article("https://a", "a"),
            article("https://a", "a again"),
            article("https://b", "b"),
        ];
        let once = dedupe_by_url(&input);
        let twice = dedupe_by_url(&once);
        assert_eq!(once, twice);
    }
}
