//! Shared, non-UI logic for the storefront: the product catalog, order
//! types and validation, and everything that crosses the HTTP boundary.

pub mod analytics;
pub mod chat;
pub mod network;
pub mod order;
pub mod product;
pub mod submit;

pub use network::Network;
pub use order::{Field, OrderDraft, OrderRequest, PayloadFieldMap};
pub use product::{Product, ProductKind};
pub use submit::{submit_order, OrderSink, SubmitError, WebhookSink};
