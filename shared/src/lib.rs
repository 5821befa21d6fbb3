//! Shared types for the Forge configurator
//!
//! Common types used across the server and client crates: the component
//! catalog model, saved builds, and the compatibility report returned by
//! the evaluator.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Build, BuildCreate, BuildUpdate, Category, CompatibilityReport, ComponentSelection, Product,
    ProductCreate, ProductSpecs, WattageStatus,
};
