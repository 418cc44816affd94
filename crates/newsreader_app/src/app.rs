use std::io::{self, BufRead};
use std::time::{Duration, Instant};

use client_logging::client_info;
use newsreader_core::{update, ArticleIndex, Effect, FeedState, Msg};

use crate::commands::{self, Command};
use crate::config;
use crate::effects::EffectRunner;
use crate::render;
use crate::routes::{self, Route};

/// How long one command blocks waiting for its page before giving the
/// prompt back; stragglers are drained before the next prompt.
const RESPONSE_WAIT: Duration = Duration::from_secs(15);

/// Everything the session owns: the feed state machine plus the article
/// lookup index. Created once at startup and passed explicitly; there is
/// no ambient global.
pub(crate) struct Session {
    state: FeedState,
    index: ArticleIndex,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            state: FeedState::new(),
            index: ArticleIndex::new(),
        }
    }

    /// Apply one message, refresh the lookup index, render on change.
    /// Returns the effects for the runner.
    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        if self.state.consume_dirty() {
            let articles = self.state.articles();
            if !articles.is_empty() {
                self.index.register(articles.to_vec());
            }
            render::feed(&self.state.view());
        }
        effects
    }

    fn open(&self, raw_path: &str) {
        match routes::parse_route(raw_path) {
            Ok(Route::Feed) => render::feed(&self.state.view()),
            Ok(Route::Article { url }) => match self.index.lookup(&url) {
                Some(article) => render::detail(article),
                None => render::not_found(&url),
            },
            Err(err) => render::route_error(&err),
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let settings = config::search_settings_from_env();
    let runner = EffectRunner::new(settings);
    let mut session = Session::new();

    render::welcome();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        drain_pending(&runner, &mut session);
        render::prompt()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match commands::parse(&line) {
            Ok(Command::Dispatch(msg)) => {
                let effects = session.dispatch(msg);
                let awaiting = !effects.is_empty();
                runner.run(effects);
                if awaiting {
                    wait_for_page(&runner, &mut session);
                }
            }
            Ok(Command::Open(path)) => session.open(&path),
            Ok(Command::Help) => render::help(),
            Ok(Command::Quit) => break,
            Err(message) => println!("{message}"),
        }
    }

    client_info!("session ended");
    Ok(())
}

/// Apply any completions that arrived while the prompt was idle, e.g.
/// a page that outlived its RESPONSE_WAIT window.
fn drain_pending(runner: &EffectRunner, session: &mut Session) {
    while let Some(msg) = runner.poll() {
        let effects = session.dispatch(msg);
        runner.run(effects);
    }
}

/// Block until the in-flight page resolves or the wait expires.
fn wait_for_page(runner: &EffectRunner, session: &mut Session) {
    let deadline = Instant::now() + RESPONSE_WAIT;
    while Instant::now() < deadline {
        if let Some(msg) = runner.poll() {
            let effects = session.dispatch(msg);
            runner.run(effects);
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    println!("still loading; results will appear before the next prompt");
}
