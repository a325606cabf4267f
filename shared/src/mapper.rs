use crate::model::{Item, ItemId};
use crate::remote::Business;

/// Normalize one raw record into a display item. Total: absent optional
/// fields become `None` (image) or an empty string (price, address).
#[must_use]
pub fn map_business(business: &Business) -> Item {
    Item {
        id: ItemId::new(business.id.clone()),
        name: business.name.clone(),
        image_url: business
            .image_url
            .as_ref()
            .filter(|url| !url.is_empty())
            .cloned(),
        rating: business.rating,
        price: business.price.clone().unwrap_or_default(),
        distance: business.distance,
        address: business
            .location
            .as_ref()
            .and_then(|location| location.address1.clone())
            .unwrap_or_default(),
    }
}

#[must_use]
pub fn map_page(page: &[Business]) -> Vec<Item> {
    page.iter().map(map_business).collect()
}

impl From<&Business> for Item {
    fn from(business: &Business) -> Self {
        map_business(business)
    }
}
