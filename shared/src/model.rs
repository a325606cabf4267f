use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display-ready coffee shop.
///
/// `price` and `address` are never absent: unknown values are empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub price: String,
    /// Meters from the search location, as reported by the server.
    pub distance: f64,
    pub address: String,
}

/// Snapshot of the paginated list. Owned by [`crate::ListStore`] and replaced
/// wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState {
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub is_refreshing: bool,
    pub has_more_pages: bool,
    pub current_offset: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            is_loading_more: false,
            is_refreshing: false,
            has_more_pages: true,
            current_offset: 0,
        }
    }
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn loading(&self) -> Self {
        Self {
            is_loading: true,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn refreshing(&self) -> Self {
        Self {
            is_refreshing: true,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn loading_more(&self) -> Self {
        Self {
            is_loading_more: true,
            ..self.clone()
        }
    }

    /// First page arrived, either from an initial load or a refresh. Both
    /// first-page flags are cleared since the page they were waiting on is here.
    #[must_use]
    pub fn loaded(&self, items: Vec<Item>) -> Self {
        let current_offset = items.len();
        let has_more_pages = !items.is_empty();
        Self {
            items,
            is_loading: false,
            is_refreshing: false,
            current_offset,
            has_more_pages,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn loaded_more(&self, new_items: Vec<Item>) -> Self {
        let has_more_pages = !new_items.is_empty();
        let mut items = Vec::with_capacity(self.items.len() + new_items.len());
        items.extend_from_slice(&self.items);
        items.extend(new_items);
        Self {
            current_offset: items.len(),
            items,
            is_loading_more: false,
            has_more_pages,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn load_failed(&self) -> Self {
        Self {
            is_loading: false,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn refresh_failed(&self) -> Self {
        Self {
            is_refreshing: false,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn load_more_failed(&self) -> Self {
        Self {
            is_loading_more: false,
            ..self.clone()
        }
    }

    /// True while any fetch is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.is_loading || self.is_loading_more || self.is_refreshing
    }

    #[must_use]
    pub const fn can_load_more(&self) -> bool {
        self.has_more_pages && !self.is_loading_more
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn item(id: &str, name: &str) -> Item {
        Item {
            id: ItemId::new(id),
            name: name.to_string(),
            image_url: Some("https://example.com/image.jpg".to_string()),
            rating: 4.5,
            price: "$$".to_string(),
            distance: 1.5,
            address: "123 Main St".to_string(),
        }
    }

    pub fn items(ids: std::ops::Range<usize>) -> Vec<Item> {
        ids.map(|i| item(&i.to_string(), &format!("Coffee {i}")))
            .collect()
    }
}
