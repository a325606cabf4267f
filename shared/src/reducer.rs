//! Pure transitions of [`ListState`].
//!
//! A dispatched intent goes through two steps. [`begin`] runs against the
//! state at dispatch time: it applies the per-kind guard and sets the
//! in-flight flag, returning the fetch to perform. [`complete`] runs once
//! that fetch resolves and folds the outcome into whatever the state is by
//! then. The store applies each step atomically; nothing here does I/O.

use crate::error::FetchError;
use crate::event::{FetchKind, ListEvent, ListIntent};
use crate::mapper::map_page;
use crate::model::ListState;
use crate::remote::Business;

/// A fetch the store must perform after [`begin`] accepted an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    pub kind: FetchKind,
    pub offset: usize,
}

/// Why an intent was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropped {
    AlreadyLoading,
    AlreadyLoadingMore,
    NoMorePages,
}

impl Dropped {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyLoading => "already_loading",
            Self::AlreadyLoadingMore => "already_loading_more",
            Self::NoMorePages => "no_more_pages",
        }
    }
}

/// Guard and flag-set step. Dropped intents are not queued.
///
/// `Refresh` has no guard and may overlap any other fetch, including
/// another refresh.
pub fn begin(state: &ListState, intent: ListIntent) -> Result<(ListState, PendingFetch), Dropped> {
    match intent {
        ListIntent::LoadInitial => {
            if state.is_loading {
                return Err(Dropped::AlreadyLoading);
            }
            Ok((
                state.loading(),
                PendingFetch {
                    kind: FetchKind::Initial,
                    offset: 0,
                },
            ))
        }
        ListIntent::Refresh => Ok((
            state.refreshing(),
            PendingFetch {
                kind: FetchKind::Refresh,
                offset: 0,
            },
        )),
        ListIntent::LoadMore => {
            if state.is_loading_more {
                return Err(Dropped::AlreadyLoadingMore);
            }
            if !state.has_more_pages {
                return Err(Dropped::NoMorePages);
            }
            Ok((
                state.loading_more(),
                PendingFetch {
                    kind: FetchKind::More,
                    offset: state.current_offset,
                },
            ))
        }
    }
}

/// Fold a resolved fetch into the current state. Failures leave items,
/// offset and `has_more_pages` untouched and produce an error event.
#[must_use]
pub fn complete(
    state: &ListState,
    kind: FetchKind,
    outcome: Result<Vec<Business>, FetchError>,
) -> (ListState, Option<ListEvent>) {
    match outcome {
        Ok(page) => {
            let items = map_page(&page);
            let next = match kind {
                FetchKind::Initial | FetchKind::Refresh => state.loaded(items),
                FetchKind::More => state.loaded_more(items),
            };
            (next, None)
        }
        Err(e) => {
            let next = match kind {
                FetchKind::Initial => state.load_failed(),
                FetchKind::Refresh => state.refresh_failed(),
                FetchKind::More => state.load_more_failed(),
            };
            (next, Some(ListEvent::Error { message: e.message() }))
        }
    }
}
