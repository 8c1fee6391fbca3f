//! Async data layer: snapshot fetching, caching, and billing launchers.
//!
//! Suspension points live exclusively here — the entitlement core is
//! synchronous and consumes whatever snapshot this layer last produced.
//! Concurrent fetches are independent and unordered; a surface that needs
//! both subscription and usage state issues both reads and gates on
//! whatever has arrived, treating anything not yet loaded as absent.

pub mod backend;
pub mod billing;
pub mod cache;
pub mod config;
pub mod http;

pub use backend::GateBackend;
pub use billing::{CheckoutSession, PortalSession, create_checkout_session, open_customer_portal};
pub use cache::SnapshotCache;
pub use config::{AuthConfig, BackendConfig, SnapshotConfig};
pub use http::validate_shop_id;
