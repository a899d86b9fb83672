//! Order line item

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// One (item, quantity) pairing within a draft or order
///
/// `name` and `price` are snapshots taken from the catalog at add-time;
/// later edits to the referenced [`MenuItem`] do not flow through.
/// A draft or order holds at most one line per `item_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Referenced menu item (not owned)
    pub item_id: String,
    /// Name snapshot
    pub name: String,
    /// Unit price snapshot (non-negative)
    pub price: f64,
    /// Quantity (positive)
    pub quantity: i32,
}

impl OrderLineItem {
    /// Snapshot a menu item into a line
    pub fn snapshot(item: &MenuItem, quantity: i32) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
        }
    }

    /// Line total (`price * quantity`), cents-rounded
    pub fn total(&self) -> f64 {
        super::money::line_total(std::slice::from_ref(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuCategory;

    #[test]
    fn test_snapshot_copies_name_and_price() {
        let mut item = MenuItem {
            id: "item-3".to_string(),
            name: "Chicken Biryani".to_string(),
            description: "Fragrant rice dish".to_string(),
            price: 16.99,
            category: MenuCategory::NonVeg,
            image: None,
        };

        let line = OrderLineItem::snapshot(&item, 2);

        // Catalog edits after the snapshot must not leak into the line
        item.price = 99.99;
        item.name = "Renamed".to_string();

        assert_eq!(line.item_id, "item-3");
        assert_eq!(line.name, "Chicken Biryani");
        assert_eq!(line.price, 16.99);
        assert_eq!(line.total(), 33.98);
    }
}
