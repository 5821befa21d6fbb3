//! Build Model
//!
//! A named, persisted selection of at most one product per category. The
//! total price is caller-computed; the store never re-derives it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Category → selected product id. Categories with no selection are
/// simply absent from the map.
pub type ComponentSelection = BTreeMap<Category, String>;

/// Saved build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub components: ComponentSelection,
    pub total_price: i64,
    /// Set once at creation, immutable thereafter
    pub created_at: DateTime<Utc>,
}

/// Create build payload (id and creation timestamp are store-assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildCreate {
    pub name: String,
    #[serde(default)]
    pub components: ComponentSelection,
    pub total_price: i64,
}

/// Update build payload
///
/// Provided fields are shallow-merged over the stored record; `None`
/// leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildUpdate {
    pub name: Option<String>,
    pub components: Option<ComponentSelection>,
    pub total_price: Option<i64>,
}
