use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::remote::PageQuery;
use crate::{DEFAULT_LOCATION, DEFAULT_SORT, DEFAULT_TERM, MAX_PAGE_SIZE, PAGE_SIZE};

pub const DEFAULT_EVENT_CAPACITY: usize = 16;
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Fixed search parameters sent with every page fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub location: String,
    pub term: String,
    pub page_size: usize,
    pub sort_by: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            term: DEFAULT_TERM.to_string(),
            page_size: PAGE_SIZE,
            sort_by: DEFAULT_SORT.to_string(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn query(&self, offset: usize) -> PageQuery {
        PageQuery {
            location: self.location.clone(),
            term: self.term.clone(),
            limit: self.page_size,
            sort_by: self.sort_by.clone(),
            offset,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.location.trim().is_empty() {
            return Err(ConfigError::Empty { field: "location" });
        }
        if self.term.trim().is_empty() {
            return Err(ConfigError::Empty { field: "term" });
        }
        if self.sort_by.trim().is_empty() {
            return Err(ConfigError::Empty { field: "sort_by" });
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::PageSize {
                size: self.page_size,
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub search: SearchConfig,
    /// Buffer of the event channel. A subscriber that falls this far behind
    /// skips the oldest events.
    pub event_capacity: usize,
    /// Shown when a failure carries no text of its own.
    pub default_error_message: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            default_error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        if self.event_capacity == 0 {
            return Err(ConfigError::EventCapacity);
        }
        if self.default_error_message.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "default_error_message",
            });
        }
        Ok(())
    }
}
