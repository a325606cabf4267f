// lib.rs - Coffee Nearby client core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod event;
pub mod mapper;
pub mod metrics;
pub mod model;
pub mod reducer;
pub mod remote;
pub mod store;

pub use config::{SearchConfig, StoreConfig};
pub use error::{ConfigError, FetchError};
pub use event::{FetchKind, ListEvent, ListIntent};
pub use mapper::{map_business, map_page};
pub use metrics::MetricsSnapshot;
pub use model::{Item, ItemId, ListState};
pub use remote::{Business, BusinessLocation, PageQuery, RemoteSource, SearchResponse};
pub use store::ListStore;

pub const PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 50;
pub const DEFAULT_SORT: &str = "distance";
pub const DEFAULT_TERM: &str = "coffee";
pub const DEFAULT_LOCATION: &str = "Plymouth, MN, U.S.A.";
