//! WooCommerce order adapter
//!
//! Translates a component selection into a remote WooCommerce order via
//! the store's REST API (`/wp-json/wc/v3`). The adapter needs three
//! credentials; when any is absent the client is simply never
//! constructed and the API surface reports the unconfigured state.
//!
//! No retries anywhere: a slow or failing remote call propagates as a
//! single error to the caller.

use std::collections::BTreeMap;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use validator::Validate;

use shared::models::{Category, Product, ProductCreate, ProductSpecs};

/// Remote order-creation credentials
///
/// | Environment variable | Meaning |
/// |------------------------------|--------------------------|
/// | WOOCOMMERCE_URL | store base URL |
/// | WOOCOMMERCE_CONSUMER_KEY | REST API consumer key |
/// | WOOCOMMERCE_CONSUMER_SECRET | REST API consumer secret |
#[derive(Debug, Clone)]
pub struct WooCommerceConfig {
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl WooCommerceConfig {
    /// Load the credentials from the environment
    ///
    /// Returns `None` unless all three are present and non-empty; a
    /// partial set is logged and treated as unconfigured.
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let base_url = var("WOOCOMMERCE_URL");
        let consumer_key = var("WOOCOMMERCE_CONSUMER_KEY");
        let consumer_secret = var("WOOCOMMERCE_CONSUMER_SECRET");

        match (base_url, consumer_key, consumer_secret) {
            (Some(base_url), Some(consumer_key), Some(consumer_secret)) => Some(Self {
                base_url,
                consumer_key,
                consumer_secret,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "Partial WooCommerce credentials in environment; integration stays disabled"
                );
                None
            }
        }
    }
}

/// Adapter errors
#[derive(Debug, thiserror::Error)]
pub enum WooError {
    #[error("WooCommerce request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("WooCommerce API error: {status} {body}")]
    Api { status: StatusCode, body: String },
}

pub type WooResult<T> = Result<T, WooError>;

/// Customer billing/shipping details for an order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
struct OrderLineItem {
    product_id: String,
    quantity: u32,
    name: String,
    price: i64,
}

#[derive(Debug, Serialize)]
struct OrderMetaData {
    key: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct OrderPayload<'a> {
    payment_method: &'static str,
    payment_method_title: &'static str,
    set_paid: bool,
    billing: &'a CustomerInfo,
    shipping: &'a CustomerInfo,
    line_items: Vec<OrderLineItem>,
    meta_data: Vec<OrderMetaData>,
}

/// Created order as reported by the remote store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WooOrder {
    pub id: i64,
    pub status: String,
    pub total: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub line_items: Vec<WooOrderLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WooOrderLine {
    #[serde(default)]
    pub product_id: Option<i64>,
    pub quantity: u32,
    pub name: String,
}

/// Remote catalog product (subset of the WooCommerce product schema)
#[derive(Debug, Clone, Deserialize)]
pub struct WooProduct {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub regular_price: String,
    #[serde(default)]
    pub images: Vec<WooImage>,
    #[serde(default)]
    pub meta_data: Vec<WooMetaData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WooImage {
    pub src: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WooMetaData {
    pub key: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WooCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// HTTP client for the WooCommerce REST API
#[derive(Debug, Clone)]
pub struct WooCommerceClient {
    client: Client,
    config: WooCommerceConfig,
    /// Precomputed Basic credential (base64 of key:secret)
    auth: String,
}

impl WooCommerceClient {
    pub fn new(config: WooCommerceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        let auth = BASE64.encode(format!(
            "{}:{}",
            config.consumer_key, config.consumer_secret
        ));

        Self {
            client,
            config,
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/wp-json/wc/v3/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        )
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> WooResult<T> {
        let response = self
            .client
            .get(self.endpoint(path))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", self.auth),
            )
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> WooResult<T> {
        let response = self
            .client
            .post(self.endpoint(path))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", self.auth),
            )
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> WooResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WooError::Api { status, body });
        }
        response.json().await.map_err(Into::into)
    }

    /// Create an order for a configured PC build
    ///
    /// One line item per product, quantity 1; the full configuration is
    /// attached as order metadata.
    pub async fn create_build_order(
        &self,
        products: &[Product],
        customer: &CustomerInfo,
    ) -> WooResult<WooOrder> {
        #[derive(Serialize)]
        struct BuildConfiguration<'a> {
            components: &'a [Product],
            total_price: i64,
            build_date: String,
            builder_version: &'static str,
        }

        let configuration = BuildConfiguration {
            components: products,
            total_price: products.iter().map(|p| p.price).sum(),
            build_date: Utc::now().to_rfc3339(),
            builder_version: env!("CARGO_PKG_VERSION"),
        };

        let payload = OrderPayload {
            payment_method: "bacs",
            payment_method_title: "Bank transfer",
            set_paid: false,
            billing: customer,
            shipping: customer,
            line_items: products
                .iter()
                .map(|p| OrderLineItem {
                    product_id: p.id.clone(),
                    quantity: 1,
                    name: p.name.clone(),
                    price: p.price,
                })
                .collect(),
            meta_data: vec![
                OrderMetaData {
                    key: "pc_build_configuration".to_string(),
                    value: serde_json::to_string(&configuration).unwrap_or_default(),
                },
                OrderMetaData {
                    key: "order_type".to_string(),
                    value: "pc_build".to_string(),
                },
            ],
        };

        tracing::info!(
            line_items = products.len(),
            customer = %customer.email,
            "Submitting WooCommerce order"
        );

        self.post("orders", &payload).await
    }

    /// Fetch published products for a remote category slug
    pub async fn fetch_products(&self, category_slug: &str) -> WooResult<Vec<WooProduct>> {
        self.get(&format!(
            "products?category={category_slug}&per_page=50&status=publish"
        ))
        .await
    }

    /// Fetch the remote product category list
    pub async fn fetch_categories(&self) -> WooResult<Vec<WooCategory>> {
        self.get("products/categories?per_page=100").await
    }
}

/// Convert a remote product into a catalog create payload
///
/// Brand, socket, wattage and specs travel as WooCommerce meta_data
/// entries; the brand falls back to the first word of the product name.
pub fn into_product_create(remote: WooProduct, category: Category) -> ProductCreate {
    let meta = |key: &str| {
        remote
            .meta_data
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.clone())
    };

    let brand = meta("brand")
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            remote
                .name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string()
        });

    let socket = meta("socket").and_then(|v| v.as_str().map(str::to_string));

    let wattage = meta("wattage").and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64().map(|w| w as u32),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    });

    let specs = meta("specs")
        .and_then(|v| v.as_str().map(str::to_string))
        .and_then(|raw| serde_json::from_str::<BTreeMap<String, String>>(&raw).ok())
        .map(ProductSpecs::Other);

    let price = remote
        .regular_price
        .parse::<f64>()
        .or_else(|_| remote.price.parse::<f64>())
        .unwrap_or(0.0) as i64;

    let description = if remote.short_description.is_empty() {
        remote.description
    } else {
        remote.short_description
    };

    ProductCreate {
        name: remote.name,
        category,
        brand,
        price,
        image: remote
            .images
            .first()
            .map(|i| i.src.clone())
            .unwrap_or_else(|| "/placeholder-product.jpg".to_string()),
        description: (!description.is_empty()).then_some(description),
        specs,
        socket,
        wattage,
        in_stock: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_all_credentials() {
        // No variables set in the test environment
        unsafe {
            std::env::remove_var("WOOCOMMERCE_URL");
            std::env::remove_var("WOOCOMMERCE_CONSUMER_KEY");
            std::env::remove_var("WOOCOMMERCE_CONSUMER_SECRET");
        }
        assert!(WooCommerceConfig::from_env().is_none());
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = WooCommerceClient::new(WooCommerceConfig {
            base_url: "https://shop.example.com/".to_string(),
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
        });
        assert_eq!(
            client.endpoint("orders"),
            "https://shop.example.com/wp-json/wc/v3/orders"
        );
    }

    #[test]
    fn test_into_product_create_reads_meta_data() {
        let remote = WooProduct {
            id: 42,
            name: "ASUS Prime B650M".to_string(),
            description: "Long description".to_string(),
            short_description: "Short".to_string(),
            price: "".to_string(),
            regular_price: "4500000".to_string(),
            images: vec![WooImage {
                src: "https://cdn.example.com/b650m.jpg".to_string(),
            }],
            meta_data: vec![
                WooMetaData {
                    key: "brand".to_string(),
                    value: serde_json::json!("ASUS"),
                },
                WooMetaData {
                    key: "socket".to_string(),
                    value: serde_json::json!("am5"),
                },
                WooMetaData {
                    key: "wattage".to_string(),
                    value: serde_json::json!("45"),
                },
            ],
        };

        let created = into_product_create(remote, Category::Mainboard);
        assert_eq!(created.brand, "ASUS");
        assert_eq!(created.socket.as_deref(), Some("am5"));
        assert_eq!(created.wattage, Some(45));
        assert_eq!(created.price, 4_500_000);
        assert_eq!(created.description.as_deref(), Some("Short"));
    }

    #[test]
    fn test_brand_falls_back_to_first_name_word() {
        let remote = WooProduct {
            id: 1,
            name: "Corsair RM650e".to_string(),
            description: String::new(),
            short_description: String::new(),
            price: "2190000".to_string(),
            regular_price: String::new(),
            images: vec![],
            meta_data: vec![],
        };

        let created = into_product_create(remote, Category::Psu);
        assert_eq!(created.brand, "Corsair");
        assert_eq!(created.price, 2_190_000);
        assert_eq!(created.image, "/placeholder-product.jpg");
    }
}
