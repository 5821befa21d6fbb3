//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`products`] - catalog listing and lookup
//! - [`builds`] - saved build management
//! - [`compatibility`] - selection compatibility check
//! - [`woocommerce`] - remote order submission

pub mod builds;
pub mod compatibility;
pub mod health;
pub mod products;
pub mod woocommerce;
