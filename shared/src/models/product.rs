//! Product Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Category;

/// Per-kind product specification
///
/// Tagged by component kind so each shape is checked at compile time.
/// Categories without a dedicated shape (cases, mice, ...) fall back to
/// the free-form `Other` map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductSpecs {
    #[serde(rename_all = "camelCase")]
    Cpu {
        cores: u32,
        threads: u32,
        base_freq: String,
        boost_freq: String,
        cache: String,
        tdp: String,
    },
    #[serde(rename_all = "camelCase")]
    Gpu {
        memory: String,
        core_clock: String,
        memory_bus: String,
        ports: String,
    },
    #[serde(rename_all = "camelCase")]
    Mainboard {
        chipset: String,
        memory_type: String,
        max_memory: String,
        slots: String,
        expansion: String,
    },
    Psu {
        /// Rated output capacity in watts
        wattage: Option<u32>,
        efficiency: Option<String>,
        modular: Option<String>,
    },
    Other(BTreeMap<String, String>),
}

impl ProductSpecs {
    /// Rated PSU capacity in watts, if this is a PSU spec with one declared
    pub fn psu_capacity(&self) -> Option<u32> {
        match self {
            ProductSpecs::Psu { wattage, .. } => *wattage,
            _ => None,
        }
    }
}

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub brand: String,
    /// Minor-unit-free currency amount, never negative
    pub price: i64,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specs: Option<ProductSpecs>,
    /// CPU/mainboard interface identifier, meaningful for those two kinds
    #[serde(default)]
    pub socket: Option<String>,
    /// Power draw in watts
    #[serde(default)]
    pub wattage: Option<u32>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

fn default_true() -> bool {
    true
}

/// Create product payload (the store assigns the id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub category: Category,
    pub brand: String,
    pub price: i64,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specs: Option<ProductSpecs>,
    #[serde(default)]
    pub socket: Option<String>,
    #[serde(default)]
    pub wattage: Option<u32>,
    pub in_stock: Option<bool>,
}
