use std::sync::mpsc;

use tracing::debug;

use crate::quote::QuoteClient;
use crate::ui::events::AppEvent;

/// Executes `FetchQuote` effects as fire-and-forget tokio tasks.
///
/// Each request spawns an independent task; there is no cancellation and no
/// de-duplication. Overlapping fetches race, and whichever completion is
/// delivered last wins. Completions re-enter the UI through the same
/// serialized event channel as key input, so the reducer never runs
/// concurrently with itself.
pub struct QuoteFetcher {
    handle: tokio::runtime::Handle,
    client: QuoteClient,
    events: mpsc::Sender<AppEvent>,
}

impl QuoteFetcher {
    pub fn new(
        handle: tokio::runtime::Handle,
        client: QuoteClient,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            handle,
            client,
            events,
        }
    }

    /// Start one fetch for `number`. Errors are stringified at this boundary;
    /// the reducer only distinguishes success from failure.
    pub fn request(&self, number: i64) {
        let client = self.client.clone();
        let events = self.events.clone();
        debug!(number, "fetching number trivia");
        self.handle.spawn(async move {
            let result = client.trivia(number).await.map_err(|err| err.to_string());
            match &result {
                Ok(_) => debug!(number, "number trivia fetched"),
                Err(reason) => debug!(number, reason, "number trivia fetch failed"),
            }
            // Send failure means the UI loop is gone; nothing left to do.
            let _ = events.send(AppEvent::Quote(result));
        });
    }
}
