use crate::{Effect, FeedState, Filter, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchSubmitted(raw) => {
            let query = raw.trim();
            let filter = if query.is_empty() {
                Filter::default()
            } else {
                Filter::Query(query.to_string())
            };
            vec![state.begin_fetch(filter)]
        }
        Msg::CategorySelected(choice) => {
            let filter = match choice {
                Some(category) => Filter::Category(category),
                None => Filter::default(),
            };
            vec![state.begin_fetch(filter)]
        }
        Msg::LoadMoreRequested => state.begin_load_more().into_iter().collect(),
        Msg::PageLoaded {
            generation,
            page,
            articles,
            total_results,
        } => {
            state.apply_page(generation, page, articles, total_results);
            Vec::new()
        }
        Msg::PageFailed {
            generation,
            message,
        } => {
            state.apply_failure(generation, message);
            Vec::new()
        }
        Msg::ResetRequested => {
            state.reset();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
