use crate::view_model::{dedupe_by_url, FeedView};
use crate::{Article, Effect, Filter, PageRequest, DEFAULT_PAGE_SIZE};

/// Tag for one filter session's requests. Responses carrying a stale
/// generation are discarded so a slow superseded request can never
/// overwrite newer state.
pub type Generation = u64;

/// Lifecycle of the feed for the current filter session.
///
/// A single phase field makes "at most one kind of load in flight" a
/// structural property rather than an invariant to police.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    #[default]
    Idle,
    LoadingInitial,
    LoadingMore,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    filter: Filter,
    generation: Generation,
    articles: Vec<Article>,
    current_page: u32,
    page_size: u32,
    total_results: u32,
    phase: FeedPhase,
    error: Option<String>,
    dirty: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            generation: 0,
            articles: Vec::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_results: 0,
            phase: FeedPhase::Idle,
            error: None,
            dirty: false,
        }
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Raw accumulated list in arrival order, duplicates included.
    /// Consumers wanting a display list should go through [`FeedState::view`].
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Whether the upstream reports more results than are accumulated.
    ///
    /// Always the raw count against the last successful response's total;
    /// an upstream miscount can leave this stale, which is accepted.
    pub fn has_more(&self) -> bool {
        (self.articles.len() as u64) < u64::from(self.total_results)
    }

    pub fn view(&self) -> FeedView {
        FeedView {
            articles: dedupe_by_url(&self.articles),
            loading: self.phase == FeedPhase::LoadingInitial,
            loading_more: self.phase == FeedPhase::LoadingMore,
            has_more: self.has_more(),
            total_results: self.total_results,
            current_page: self.current_page,
            error: self.error.clone(),
            filter: self.filter.clone(),
        }
    }

    /// Returns the dirty flag and clears it. The shell uses this to
    /// coalesce rendering after a batch of messages.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Start a fresh session for `filter`: clear accumulated articles and
    /// error synchronously, page back to 1, and advance the generation so
    /// any in-flight response is discarded on arrival.
    pub(crate) fn begin_fetch(&mut self, filter: Filter) -> Effect {
        self.generation += 1;
        self.filter = filter;
        self.articles.clear();
        self.error = None;
        self.current_page = 1;
        self.total_results = 0;
        self.phase = FeedPhase::LoadingInitial;
        self.dirty = true;
        Effect::FetchPage {
            generation: self.generation,
            request: PageRequest {
                filter: self.filter.clone(),
                page: 1,
                page_size: self.page_size,
            },
        }
    }

    /// Request the next page for the current filter. `None` while a load
    /// is already in flight, before anything was fetched, or once the feed
    /// is exhausted; rapid repeated triggers collapse to one request.
    pub(crate) fn begin_load_more(&mut self) -> Option<Effect> {
        if self.phase != FeedPhase::Ready || !self.has_more() {
            return None;
        }
        self.phase = FeedPhase::LoadingMore;
        self.dirty = true;
        Some(Effect::FetchPage {
            generation: self.generation,
            request: PageRequest {
                filter: self.filter.clone(),
                page: self.current_page + 1,
                page_size: self.page_size,
            },
        })
    }

    pub(crate) fn apply_page(
        &mut self,
        generation: Generation,
        page: u32,
        articles: Vec<Article>,
        total_results: u32,
    ) {
        if generation != self.generation {
            // Superseded request; a newer fetch or reset owns the state now.
            return;
        }
        match self.phase {
            FeedPhase::LoadingInitial => self.articles = articles,
            FeedPhase::LoadingMore => self.articles.extend(articles),
            FeedPhase::Idle | FeedPhase::Ready | FeedPhase::Error => return,
        }
        self.total_results = total_results;
        self.current_page = page;
        self.error = None;
        self.phase = FeedPhase::Ready;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, generation: Generation, message: String) {
        if generation != self.generation {
            return;
        }
        match self.phase {
            FeedPhase::LoadingInitial | FeedPhase::LoadingMore => {}
            FeedPhase::Idle | FeedPhase::Ready | FeedPhase::Error => return,
        }
        // Accumulated articles stay as they are; only the banner and the
        // loading flags change.
        self.phase = FeedPhase::Error;
        self.error = Some(message);
        self.dirty = true;
    }

    /// Back to initial state without issuing a request. The generation
    /// still advances so in-flight responses cannot resurrect old state.
    pub(crate) fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            dirty: true,
            ..Self::default()
        };
    }
}
