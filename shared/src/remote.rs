//! Contract with the remote search API.
//!
//! The transport lives outside this crate. A shell (or a test double)
//! implements [`RemoteSource`], decodes the API's JSON into [`Business`]
//! records, and reports any failure as a [`FetchError`].

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub location: String,
    pub term: String,
    pub limit: usize,
    pub sort_by: String,
    pub offset: usize,
}

#[async_trait::async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch one page of raw records starting at `query.offset`.
    ///
    /// An empty page means the result set is exhausted.
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<Business>, FetchError>;
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub region: Option<Region>,
}

impl SearchResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub alias: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessLocation {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub display_address: Vec<String>,
}

/// Raw business record as returned by the search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub rating: f64,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub transactions: Vec<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub location: Option<BusinessLocation>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub display_phone: Option<String>,
    pub distance: f64,
}
