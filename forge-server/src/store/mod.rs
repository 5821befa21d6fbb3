//! In-memory stores
//!
//! The catalog and build stores back the whole service. Both are plain
//! concurrent maps with single-writer mutation; there is no persistence
//! and no delete path. Stores are constructed at startup and handed to
//! request handlers through [`crate::core::ServerState`].

pub mod build;
pub mod product;
pub mod seed;

pub use build::BuildStore;
pub use product::{ProductFilter, ProductStore};

#[cfg(test)]
mod tests;
