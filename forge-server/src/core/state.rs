use std::sync::Arc;

use crate::core::Config;
use crate::services::woocommerce::WooCommerceClient;
use crate::store::{BuildStore, ProductStore, seed};

/// Shared handler state
///
/// Holds the stores and the optional order adapter behind `Arc`s so a
/// clone per request is cheap. Constructed once at startup and injected
/// into every handler; there is no module-level singleton.
///
/// | Field | Meaning |
/// |-------------|---------------------------------------------|
/// | config | configuration (immutable) |
/// | products | in-memory catalog, seeded at startup |
/// | builds | in-memory build store, starts empty |
/// | woocommerce | order adapter, `None` when unconfigured |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub products: Arc<ProductStore>,
    pub builds: Arc<BuildStore>,
    pub woocommerce: Option<Arc<WooCommerceClient>>,
}

impl ServerState {
    /// Manual construction, mostly for tests
    pub fn new(
        config: Config,
        products: Arc<ProductStore>,
        builds: Arc<BuildStore>,
        woocommerce: Option<Arc<WooCommerceClient>>,
    ) -> Self {
        Self {
            config,
            products,
            builds,
            woocommerce,
        }
    }

    /// Initialize the server state
    ///
    /// Seeds the catalog and constructs the order adapter when
    /// credentials are configured.
    pub fn initialize(config: &Config) -> Self {
        let products = Arc::new(ProductStore::new());
        seed::seed_catalog(&products);

        let builds = Arc::new(BuildStore::new());

        let woocommerce = config
            .woocommerce
            .clone()
            .map(|cfg| Arc::new(WooCommerceClient::new(cfg)));

        match &woocommerce {
            Some(client) => {
                tracing::info!(base_url = client.base_url(), "WooCommerce adapter configured")
            }
            None => tracing::info!("WooCommerce adapter not configured"),
        }

        Self::new(config.clone(), products, builds, woocommerce)
    }

    /// The order adapter, when configured
    pub fn woocommerce(&self) -> Option<&Arc<WooCommerceClient>> {
        self.woocommerce.as_ref()
    }
}
