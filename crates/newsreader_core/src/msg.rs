use crate::{Article, Category, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted search text; empty text falls back to default headlines.
    SearchSubmitted(String),
    /// User picked a category, or `None` for "all".
    CategorySelected(Option<Category>),
    /// Scroll proximity (or an explicit command) asked for the next page.
    LoadMoreRequested,
    /// User cleared the feed back to its initial state.
    ResetRequested,
    /// A page request resolved successfully.
    PageLoaded {
        generation: Generation,
        page: u32,
        articles: Vec<Article>,
        total_results: u32,
    },
    /// A page request failed; `message` is already user-presentable.
    PageFailed {
        generation: Generation,
        message: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
