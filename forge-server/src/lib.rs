//! Forge Server - PC component configurator backend
//!
//! # Overview
//!
//! The server exposes a small REST surface over an in-memory component
//! catalog:
//!
//! - **Catalog** (`store::ProductStore`): seeded once at startup, answers
//!   filtered listings and id lookups
//! - **Builds** (`store::BuildStore`): named component selections with a
//!   caller-computed total price
//! - **Compatibility** (`compat`): pairwise socket/wattage feedback for a
//!   component selection
//! - **WooCommerce** (`services::woocommerce`): submits a selection as a
//!   remote order when credentials are configured
//!
//! # Module structure
//!
//! ```text
//! forge-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── store/         # in-memory catalog and build stores
//! ├── compat/        # compatibility evaluator
//! ├── services/      # WooCommerce order adapter
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod compat;
pub mod core;
pub mod services;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging from the environment
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______
   / ____/___  _________ ____
  / /_  / __ \/ ___/ __ `/ _ \
 / __/ / /_/ / /  / /_/ /  __/
/_/    \____/_/   \__, /\___/
                 /____/
    "#
    );
}
