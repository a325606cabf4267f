use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, instrument, warn};

use crate::config::StoreConfig;
use crate::error::{ConfigError, FetchError};
use crate::event::{ListEvent, ListIntent};
use crate::metrics::{MetricsSnapshot, StoreMetrics};
use crate::model::ListState;
use crate::reducer::{self, PendingFetch};
use crate::remote::{Business, RemoteSource};

/// Sole owner of the list state and the only caller of the remote source.
///
/// State is published on a `watch` channel (latest value, new subscribers
/// see the current snapshot). Error events go out on a `broadcast` channel
/// and reach only receivers that exist when they are sent.
pub struct ListStore<S: RemoteSource> {
    inner: Arc<Inner<S>>,
}

impl<S: RemoteSource> Clone for ListStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<S: RemoteSource> {
    source: Arc<S>,
    config: StoreConfig,
    state: watch::Sender<ListState>,
    events: broadcast::Sender<ListEvent>,
    metrics: StoreMetrics,
}

impl<S: RemoteSource + 'static> ListStore<S> {
    pub fn new(source: Arc<S>, config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (state, _) = watch::channel(ListState::default());
        let (events, _) = broadcast::channel(config.event_capacity);

        info!(
            location = %config.search.location,
            term = %config.search.term,
            page_size = config.search.page_size,
            "List store initialized"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                source,
                config,
                state,
                events,
                metrics: StoreMetrics::new(),
            }),
        })
    }

    /// Apply the intent's guard now and run its fetch on the ambient tokio
    /// runtime. Returns immediately.
    pub fn dispatch(&self, intent: ListIntent) {
        let Some(fetch) = self.inner.begin(intent) else {
            return;
        };

        match Handle::try_current() {
            Ok(handle) => {
                let inner = Arc::clone(&self.inner);
                handle.spawn(async move { inner.run(fetch).await });
            }
            Err(e) => {
                // Without a runtime the fetch can never run; settle it as failed
                // so the in-flight flag does not stick.
                error!(intent = intent.name(), error = %e, "No async runtime for dispatch");
                self.inner
                    .finish(fetch, Err(FetchError::Other(Some(e.to_string()))));
            }
        }
    }

    /// Same reducer step as [`dispatch`](Self::dispatch), but awaits the fetch
    /// inline. For hosts that drive their own executor.
    #[instrument(skip(self))]
    pub async fn process(&self, intent: ListIntent) {
        if let Some(fetch) = self.inner.begin(intent) {
            self.inner.run(fetch).await;
        }
    }
}

impl<S: RemoteSource> ListStore<S> {
    #[must_use]
    pub fn state(&self) -> ListState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.inner.state.subscribe()
    }

    pub fn events(&self) -> broadcast::Receiver<ListEvent> {
        self.inner.events.subscribe()
    }

    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.metrics.snapshot()
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Text to show for an event, falling back to the configured default.
    #[must_use]
    pub fn error_text<'a>(&'a self, event: &'a ListEvent) -> &'a str {
        event.message_or(&self.inner.config.default_error_message)
    }
}

impl<S: RemoteSource> Inner<S> {
    fn begin(&self, intent: ListIntent) -> Option<PendingFetch> {
        StoreMetrics::incr(&self.metrics.intents_received);

        let mut accepted = None;
        let mut dropped = None;
        self.state
            .send_if_modified(|state| match reducer::begin(state, intent) {
                Ok((next, fetch)) => {
                    *state = next;
                    accepted = Some(fetch);
                    true
                }
                Err(reason) => {
                    dropped = Some(reason);
                    false
                }
            });

        if let Some(reason) = dropped {
            StoreMetrics::incr(&self.metrics.intents_dropped);
            debug!(intent = intent.name(), reason = reason.as_str(), "Intent dropped");
        }

        accepted
    }

    #[instrument(skip_all, fields(kind = %fetch.kind, offset = fetch.offset))]
    async fn run(&self, fetch: PendingFetch) {
        StoreMetrics::incr(&self.metrics.fetches_started);
        info!("Fetch started");

        let query = self.config.search.query(fetch.offset);
        let outcome = self.source.fetch_page(&query).await;

        self.finish(fetch, outcome);
    }

    fn finish(&self, fetch: PendingFetch, outcome: Result<Vec<Business>, FetchError>) {
        match &outcome {
            Ok(page) => {
                StoreMetrics::incr(&self.metrics.fetches_succeeded);
                info!(kind = %fetch.kind, count = page.len(), "Fetch completed");
            }
            Err(e) => {
                StoreMetrics::incr(&self.metrics.fetches_failed);
                warn!(kind = %fetch.kind, error = %e, "Fetch failed");
            }
        }

        let mut event = None;
        self.state.send_modify(|state| {
            let (next, emitted) = reducer::complete(state, fetch.kind, outcome);
            *state = next;
            event = emitted;
        });

        if let Some(event) = event {
            self.emit(event);
        }
    }

    fn emit(&self, event: ListEvent) {
        if self.events.send(event).is_err() {
            StoreMetrics::incr(&self.metrics.events_undelivered);
            debug!("Event emitted with no subscribers");
        }
    }
}
