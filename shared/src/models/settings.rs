//! Restaurant Settings Model

use serde::{Deserialize, Serialize};

/// Restaurant display settings (singleton)
///
/// Presentation configuration for the customer-facing menu. Plain
/// color/text strings, no invariants beyond being well-formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSettings {
    pub menu_title: String,
    pub background_color: String,
    pub title_color: String,
    pub font_color: String,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            menu_title: "Spice Garden Restaurant".to_string(),
            background_color: "#ffffff".to_string(),
            title_color: "#4a2c2a".to_string(),
            font_color: "#333333".to_string(),
        }
    }
}

/// Update settings payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSettingsUpdate {
    pub menu_title: Option<String>,
    pub background_color: Option<String>,
    pub title_color: Option<String>,
    pub font_color: Option<String>,
}

impl RestaurantSettings {
    pub fn apply(mut self, update: RestaurantSettingsUpdate) -> Self {
        if let Some(menu_title) = update.menu_title {
            self.menu_title = menu_title;
        }
        if let Some(background_color) = update.background_color {
            self.background_color = background_color;
        }
        if let Some(title_color) = update.title_color {
            self.title_color = title_color;
        }
        if let Some(font_color) = update.font_color {
            self.font_color = font_color;
        }
        self
    }
}
