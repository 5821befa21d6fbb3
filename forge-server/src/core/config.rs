use crate::services::woocommerce::WooCommerceConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |------------------------------|-------------|--------------------------------|
/// | HTTP_PORT | 3000 | HTTP service port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | WOOCOMMERCE_URL | unset | order adapter base URL |
/// | WOOCOMMERCE_CONSUMER_KEY | unset | order adapter consumer key |
/// | WOOCOMMERCE_CONSUMER_SECRET | unset | order adapter consumer secret |
///
/// The WooCommerce credentials are optional; with any of them absent the
/// order endpoints answer as unconfigured.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Order adapter credentials, present only when fully configured
    pub woocommerce: Option<WooCommerceConfig>,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            woocommerce: WooCommerceConfig::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
