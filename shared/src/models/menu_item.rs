//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MenuCategory {
    Veg,
    NonVeg,
    Dry,
    Drinks,
}

impl MenuCategory {
    /// All categories in display order
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Veg,
        MenuCategory::NonVeg,
        MenuCategory::Dry,
        MenuCategory::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Veg => "veg",
            MenuCategory::NonVeg => "non-veg",
            MenuCategory::Dry => "dry",
            MenuCategory::Drinks => "drinks",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Menu item entity
///
/// Never mutated by the ordering flow. Orders snapshot `name`/`price`
/// at add-time, so catalog edits do not touch historical orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price (non-negative)
    pub price: f64,
    pub category: MenuCategory,
    /// Image reference (URL or path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub image: Option<String>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<MenuCategory>,
    pub image: Option<String>,
}

impl MenuItem {
    /// Apply an update payload, returning the changed entity
    pub fn apply(mut self, update: MenuItemUpdate) -> Self {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        self
    }
}
