//! Domain models
//!
//! Catalog and presentation entities managed from the admin dashboard.
//! Order types live in [`crate::order`].

pub mod menu_item;
pub mod settings;

pub use menu_item::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use settings::{RestaurantSettings, RestaurantSettingsUpdate};
