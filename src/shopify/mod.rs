//! Shopify proxy collaborator client.
//!
//! The proxy itself is an external serverless function; this module only
//! implements the typed client the front-end core uses to reach it.

pub mod proxy;

pub use proxy::{
    ProxyAction, ProxyRequest, ProxyResponse, SHOPIFY_API_VERSION, ShopifyProxyClient,
    normalize_shop_domain, proxy_error_message,
};
