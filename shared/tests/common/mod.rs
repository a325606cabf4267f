#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use coffee_nearby_shared::remote::{Business, BusinessLocation, Coordinates};
use coffee_nearby_shared::{FetchError, ListState, ListStore, PageQuery, RemoteSource, StoreConfig};
use tokio::sync::Semaphore;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory source answering by offset. Unscripted offsets return an empty
/// page. While held, every fetch parks until [`ScriptedSource::release`].
pub struct ScriptedSource {
    responses: Mutex<HashMap<usize, Result<Vec<Business>, FetchError>>>,
    calls: Mutex<Vec<PageQuery>>,
    held: AtomicBool,
    gate: Semaphore,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            held: AtomicBool::new(false),
            gate: Semaphore::new(0),
        })
    }

    pub fn respond(&self, offset: usize, result: Result<Vec<Business>, FetchError>) {
        self.responses.lock().unwrap().insert(offset, result);
    }

    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.add_permits(64);
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.calls.lock().unwrap().iter().map(|q| q.offset).collect()
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub async fn wait_for_calls(&self, n: usize) {
        tokio::time::timeout(SETTLE_TIMEOUT, async {
            while self.calls.lock().unwrap().len() < n {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("fetch was never issued");
    }
}

#[async_trait::async_trait]
impl RemoteSource for ScriptedSource {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<Business>, FetchError> {
        self.calls.lock().unwrap().push(query.clone());

        if self.held.load(Ordering::SeqCst) {
            self.gate
                .acquire()
                .await
                .expect("gate closed")
                .forget();
        }

        self.responses
            .lock()
            .unwrap()
            .get(&query.offset)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn new_store(source: &Arc<ScriptedSource>) -> ListStore<ScriptedSource> {
    ListStore::new(Arc::clone(source), StoreConfig::default()).expect("default config is valid")
}

/// Wait until no fetch is in flight and return that state.
pub async fn settle(store: &ListStore<ScriptedSource>) -> ListState {
    let mut rx = store.subscribe();
    let settled = tokio::time::timeout(SETTLE_TIMEOUT, rx.wait_for(|s| !s.is_busy()))
        .await
        .expect("store did not settle")
        .expect("store dropped");
    ListState::clone(&settled)
}

pub fn business(id: &str, name: &str) -> Business {
    Business {
        id: id.to_string(),
        alias: Some(format!("alias-{id}")),
        name: name.to_string(),
        image_url: Some("https://example.com/image.jpg".to_string()),
        is_closed: false,
        url: Some("https://example.com".to_string()),
        review_count: 100,
        categories: Vec::new(),
        rating: 4.5,
        coordinates: Coordinates {
            latitude: Some(45.0),
            longitude: Some(-93.0),
        },
        transactions: Vec::new(),
        price: Some("$$".to_string()),
        location: Some(BusinessLocation {
            address1: Some("123 Main St".to_string()),
            city: Some("Minneapolis".to_string()),
            state: Some("MN".to_string()),
            display_address: vec!["123 Main St".to_string()],
            ..BusinessLocation::default()
        }),
        phone: None,
        display_phone: None,
        distance: 1.5,
    }
}

pub fn names(state: &ListState) -> Vec<&str> {
    state.items.iter().map(|item| item.name.as_str()).collect()
}
