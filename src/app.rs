//! Main loop.
//!
//! ```text
//! loop {
//!     draw(state)
//!     drain finished background work  -> update
//!     poll keyboard (50 ms)           -> handle_event -> update
//!     spawn returned effects on the tokio runtime
//! }
//! ```
//!
//! All state changes happen on this thread. Backend calls and poster loads
//! run on the runtime and report back as messages over a channel.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::event;
use crate::message::{AppMessage, Effect};
use crate::services::{PosterLoader, RecommendationProvider};
use crate::state::{AppState, SearchController};
use crate::terminal::Term;
use crate::update;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs effects on the tokio runtime and reports back through a channel
pub struct EffectRunner {
    runtime: Handle,
    provider: Arc<dyn RecommendationProvider>,
    posters: Arc<dyn PosterLoader>,
    tx: UnboundedSender<AppMessage>,
}

impl EffectRunner {
    pub fn new(
        runtime: Handle,
        provider: Arc<dyn RecommendationProvider>,
        posters: Arc<dyn PosterLoader>,
    ) -> (Self, UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runner = Self {
            runtime,
            provider,
            posters,
            tx,
        };
        (runner, rx)
    }

    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::Search(pending) => {
                let provider = self.provider.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let outcome = SearchController::execute(provider.as_ref(), &pending).await;
                    // Receiver gone means the UI already quit
                    let _ = tx.send(AppMessage::SearchResolved {
                        token: pending.token,
                        outcome,
                    });
                });
            }
            Effect::LoadPosters { token, posters } => {
                for (index, url) in posters {
                    let loader = self.posters.clone();
                    let tx = self.tx.clone();
                    self.runtime.spawn(async move {
                        if !loader.load(&url).await {
                            let _ = tx.send(AppMessage::PosterFailed { token, index });
                        }
                    });
                }
            }
        }
    }
}

/// Apply one message and start whatever work it produced
pub fn dispatch(state: &mut AppState, msg: AppMessage, runner: &EffectRunner) {
    for effect in update::update(state, msg) {
        runner.run(effect);
    }
}

pub fn run(
    terminal: &mut Term,
    state: &mut AppState,
    runner: &EffectRunner,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view::render(state, frame))?;

        if state.should_quit {
            break;
        }

        while let Ok(msg) = rx.try_recv() {
            dispatch(state, msg, runner);
        }

        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, state);
            dispatch(state, msg, runner);
        }
    }

    Ok(())
}
