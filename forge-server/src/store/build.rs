//! Build Store
//!
//! Named component selections. Builds are created by explicit user
//! action and may be partially updated by id; there is no delete path.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use shared::models::{Build, BuildCreate, BuildUpdate};

/// In-memory build store
pub struct BuildStore {
    entries: DashMap<String, Build>,
}

impl BuildStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Single lookup by id
    pub fn get(&self, id: &str) -> Option<Build> {
        self.entries.get(id).map(|e| e.value().clone())
    }

    /// Create a build, assigning id and creation timestamp
    pub fn create(&self, data: BuildCreate) -> Build {
        let build = Build {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            components: data.components,
            total_price: data.total_price,
            created_at: Utc::now(),
        };
        self.entries.insert(build.id.clone(), build.clone());
        build
    }

    /// Shallow-merge the provided fields over the stored record
    ///
    /// The total price is never recomputed, even when the components map
    /// changed; the caller is responsible for consistency. Returns `None`
    /// on a missing id without creating a record.
    pub fn update(&self, id: &str, data: BuildUpdate) -> Option<Build> {
        let mut entry = self.entries.get_mut(id)?;
        if let Some(name) = data.name {
            entry.name = name;
        }
        if let Some(components) = data.components {
            entry.components = components;
        }
        if let Some(total_price) = data.total_price {
            entry.total_price = total_price;
        }
        Some(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BuildStore {
    fn default() -> Self {
        Self::new()
    }
}
