use client_logging::{client_info, client_warn};
use newsreader_client::{SearchEvent, SearchHandle, SearchSettings};
use newsreader_core::{Effect, Msg};

/// Executes effects against the background search worker and translates
/// its completion events back into state-machine messages.
pub(crate) struct EffectRunner {
    handle: SearchHandle,
}

impl EffectRunner {
    pub(crate) fn new(settings: SearchSettings) -> Self {
        Self {
            handle: SearchHandle::new(settings),
        }
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    generation,
                    request,
                } => {
                    client_info!(
                        "FetchPage generation={} page={} filter={:?}",
                        generation,
                        request.page,
                        request.filter
                    );
                    self.handle.fetch(generation, request);
                }
            }
        }
    }

    /// Translate the next completed search, if any, into a message.
    pub(crate) fn poll(&self) -> Option<Msg> {
        self.handle.try_recv().map(|event| match event {
            SearchEvent::PageCompleted {
                generation,
                page,
                result,
            } => match result {
                Ok(loaded) => Msg::PageLoaded {
                    generation,
                    page,
                    articles: loaded.articles,
                    total_results: loaded.total_results,
                },
                Err(err) => {
                    client_warn!("page {} failed: {}", page, err);
                    Msg::PageFailed {
                        generation,
                        message: err.user_message(),
                    }
                }
            },
        })
    }
}
