use chrono::{TimeZone, Utc};
use newsreader_core::{
    update, Article, Category, Effect, FeedPhase, FeedState, Filter, Generation, Msg, PageRequest,
};

fn init_logging() {
    client_logging::initialize_for_tests();
}

fn article(url: &str) -> Article {
    Article {
        url: url.to_string(),
        title: format!("Story at {url}"),
        description: None,
        content: None,
        image_url: None,
        author: None,
        published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        source_name: "Example Wire".to_string(),
    }
}

fn stories(range: std::ops::Range<usize>) -> Vec<Article> {
    range
        .map(|n| article(&format!("https://news.example.com/story-{n}")))
        .collect()
}

fn issued(effects: &[Effect]) -> (Generation, PageRequest) {
    match effects {
        [Effect::FetchPage {
            generation,
            request,
        }] => (*generation, request.clone()),
        other => panic!("expected exactly one FetchPage effect, got {other:?}"),
    }
}

/// Fetch sports headlines and resolve page 1 with `articles` of `total`.
fn ready_feed(articles: Vec<Article>, total: u32) -> (FeedState, Generation) {
    let (state, effects) = update(
        FeedState::new(),
        Msg::CategorySelected(Some(Category::Sports)),
    );
    let (generation, request) = issued(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            generation,
            page: request.page,
            articles,
            total_results: total,
        },
    );
    (state, generation)
}

#[test]
fn load_more_requests_next_page_with_same_filter() {
    init_logging();
    let (state, generation) = ready_feed(stories(0..20), 45);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let (more_generation, request) = issued(&effects);

    assert_eq!(more_generation, generation);
    assert_eq!(request.filter, Filter::Category(Category::Sports));
    assert_eq!(request.page, 2);
    assert_eq!(state.phase(), FeedPhase::LoadingMore);
    assert!(state.view().loading_more);
    assert!(!state.view().loading);
}

#[test]
fn forty_five_results_paginate_in_three_pages() {
    init_logging();
    let (state, generation) = ready_feed(stories(0..20), 45);
    assert!(state.has_more());
    assert_eq!(state.current_page(), 1);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let (_, request) = issued(&effects);
    assert_eq!(request.page, 2);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            generation,
            page: 2,
            articles: stories(20..40),
            total_results: 45,
        },
    );
    assert_eq!(state.articles().len(), 40);
    assert!(state.has_more());
    assert_eq!(state.current_page(), 2);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let (_, request) = issued(&effects);
    assert_eq!(request.page, 3);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            generation,
            page: 3,
            articles: stories(40..45),
            total_results: 45,
        },
    );
    assert_eq!(state.articles().len(), 45);
    assert!(!state.has_more());
    assert_eq!(state.current_page(), 3);

    let (_, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn append_preserves_prior_order_and_strictly_extends() {
    init_logging();
    let first_page = stories(0..20);
    let (state, generation) = ready_feed(first_page.clone(), 45);

    let (state, _) = update(state, Msg::LoadMoreRequested);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            generation,
            page: 2,
            articles: stories(20..40),
            total_results: 45,
        },
    );

    assert_eq!(state.articles().len(), 40);
    assert_eq!(&state.articles()[..20], first_page.as_slice());
}

#[test]
fn load_more_is_noop_while_one_is_in_flight() {
    init_logging();
    let (state, _) = ready_feed(stories(0..20), 45);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    assert_eq!(effects.len(), 1);

    // A second trigger before the response lands must issue nothing.
    let (_, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn load_more_is_noop_when_feed_is_exhausted() {
    init_logging();
    let (state, _) = ready_feed(stories(0..5), 5);
    assert!(!state.has_more());

    let (_, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn load_more_is_noop_before_any_fetch() {
    init_logging();
    let (state, effects) = update(FeedState::new(), Msg::LoadMoreRequested);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), FeedPhase::Idle);
}

#[test]
fn load_more_is_noop_during_initial_load() {
    init_logging();
    let (state, _) = update(
        FeedState::new(),
        Msg::CategorySelected(Some(Category::Sports)),
    );
    let (_, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn load_more_failure_keeps_accumulated_articles() {
    init_logging();
    let (state, generation) = ready_feed(stories(0..20), 45);

    let (state, _) = update(state, Msg::LoadMoreRequested);
    let (mut state, _) = update(
        state,
        Msg::PageFailed {
            generation,
            message: "HTTP error (status 500)".to_string(),
        },
    );

    assert!(state.consume_dirty());
    assert_eq!(state.articles().len(), 20);
    assert_eq!(state.error(), Some("HTTP error (status 500)"));
    assert_eq!(state.phase(), FeedPhase::Error);
    assert!(!state.view().loading_more);
}
