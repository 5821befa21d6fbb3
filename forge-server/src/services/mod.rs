//! External service adapters

pub mod woocommerce;

pub use woocommerce::{CustomerInfo, WooCommerceClient, WooCommerceConfig};
