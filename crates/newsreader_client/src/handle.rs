use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_debug;
use newsreader_core::{Generation, PageRequest};

use crate::search::{ReqwestSearchClient, SearchClient, SearchSettings};
use crate::SearchEvent;

enum Command {
    Fetch {
        generation: Generation,
        request: PageRequest,
    },
}

/// Handle to the background search worker.
///
/// Commands cross into a dedicated thread that owns a tokio runtime; each
/// fetch runs as its own task, so a slow page never blocks a newer one.
/// Completions come back on the event channel in completion order —
/// callers resolve staleness with the generation, not arrival order.
pub struct SearchHandle {
    cmd_tx: mpsc::Sender<Command>,
    event_rx: mpsc::Receiver<SearchEvent>,
}

impl SearchHandle {
    pub fn new(settings: SearchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestSearchClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch(&self, generation: Generation, request: PageRequest) {
        let _ = self.cmd_tx.send(Command::Fetch {
            generation,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<SearchEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn SearchClient,
    command: Command,
    event_tx: mpsc::Sender<SearchEvent>,
) {
    match command {
        Command::Fetch {
            generation,
            request,
        } => {
            let page = request.page;
            let result = client.search(&request).await;
            client_debug!(
                "page {} (generation {}) completed, ok={}",
                page,
                generation,
                result.is_ok()
            );
            let _ = event_tx.send(SearchEvent::PageCompleted {
                generation,
                page,
                result,
            });
        }
    }
}
