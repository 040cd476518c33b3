//! Frontend Models
//!
//! Data structures matching the menu REST API.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::category::Category;

/// Item id as sent by the backend (number or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Any JSON number, including negative and fractional ids
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n.into())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// Price as sent by the backend (number or string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl Price {
    /// Numeric text becomes a number, anything else stays text
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<serde_json::Number>() {
            Ok(n) => Price::Number(n),
            Err(_) => Price::Text(text.to_string()),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// Menu item (matches backend)
///
/// Categories disagree on field names (`title` vs `name`,
/// `composition` vs `description`); both are kept as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Item {
    /// Card heading: title, else name
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).or(non_empty(&self.name)).unwrap_or("")
    }

    /// Card text: composition, else description
    pub fn display_description(&self) -> &str {
        non_empty(&self.composition)
            .or(non_empty(&self.description))
            .unwrap_or("")
    }
}

/// Navigation entry from `GET /category`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub slug: String,
    pub category: String,
}

/// The five-field create/edit form, also the request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub img: String,
    pub category: String,
    pub composition: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: String,
}

fn serialize_price<S: Serializer>(price: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if price.trim().is_empty() {
        return serializer.serialize_str(price);
    }
    Price::parse(price).serialize(serializer)
}

impl ItemForm {
    /// Pre-fill from a stored item for editing
    pub fn from_item(item: &Item, category: Category) -> Self {
        Self {
            name: non_empty(&item.name)
                .or(non_empty(&item.title))
                .unwrap_or("")
                .to_string(),
            img: item.img.clone().unwrap_or_default(),
            category: category.key().to_string(),
            composition: item.display_description().to_string(),
            price: item.price.as_ref().map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    /// Blank category field falls back to the current category
    pub fn with_category_fallback(mut self, current: Category) -> Self {
        if self.category.trim().is_empty() {
            self.category = current.key().to_string();
        }
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
