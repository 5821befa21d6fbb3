//! Product Store
//!
//! Catalog of component products. Seeded once at process start and
//! otherwise immutable; there is no update or delete path.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use uuid::Uuid;

use shared::models::{Category, Product, ProductCreate};

/// Conjunctive listing filter; every supplied criterion must match
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Product brand must be one of these
    pub brand: Option<Vec<String>>,
    /// Product socket must be set and one of these
    pub socket: Option<Vec<String>>,
    /// Inclusive lower price bound
    pub min_price: Option<i64>,
    /// Inclusive upper price bound
    pub max_price: Option<i64>,
    /// Case-insensitive substring match against name or brand
    pub search: Option<String>,
}

struct StoredProduct {
    /// Insertion sequence; listings come back in this order
    seq: u64,
    product: Product,
}

/// In-memory product catalog
pub struct ProductStore {
    entries: DashMap<String, StoredProduct>,
    next_seq: AtomicU64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Create a product, assigning a fresh unique id
    pub fn create(&self, data: ProductCreate) -> Product {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            category: data.category,
            brand: data.brand,
            price: data.price,
            image: data.image,
            description: data.description,
            specs: data.specs,
            socket: data.socket,
            wattage: data.wattage,
            in_stock: data.in_stock.unwrap_or(true),
        };
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.entries.insert(
            product.id.clone(),
            StoredProduct {
                seq,
                product: product.clone(),
            },
        );
        product
    }

    /// Single lookup by id
    pub fn get(&self, id: &str) -> Option<Product> {
        self.entries.get(id).map(|e| e.product.clone())
    }

    /// Filtered listing in insertion order
    ///
    /// No pagination, sorting or ranking beyond insertion order; paging
    /// is a client concern.
    pub fn list(&self, category: Option<Category>, filter: &ProductFilter) -> Vec<Product> {
        let mut matches: Vec<(u64, Product)> = self
            .entries
            .iter()
            .filter(|e| Self::matches(&e.product, category, filter))
            .map(|e| (e.seq, e.product.clone()))
            .collect();
        matches.sort_by_key(|(seq, _)| *seq);
        matches.into_iter().map(|(_, p)| p).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn matches(product: &Product, category: Option<Category>, filter: &ProductFilter) -> bool {
        if let Some(cat) = category
            && product.category != cat
        {
            return false;
        }

        if let Some(brands) = &filter.brand
            && !brands.iter().any(|b| *b == product.brand)
        {
            return false;
        }

        if let Some(sockets) = &filter.socket {
            match &product.socket {
                Some(socket) if sockets.iter().any(|s| s == socket) => {}
                _ => return false,
            }
        }

        if let Some(min) = filter.min_price
            && product.price < min
        {
            return false;
        }

        if let Some(max) = filter.max_price
            && product.price > max
        {
            return false;
        }

        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !product.name.to_lowercase().contains(&needle)
                && !product.brand.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
