//! Typed HTTP client for the sales API.
//!
//! Every endpoint the app talks to lives here: quotations (orders),
//! customers, the product catalog, and received payments. The client owns
//! the bearer session and translates transport/remote failures into
//! [`ApiError`], whose `user_message` is safe to show directly.

pub mod catalog;
pub mod config;
pub mod customers;
pub mod error;
pub mod gateway;
pub mod http;
pub mod payments;
pub mod quotations;
pub mod session;

pub use catalog::ProductsResponse;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::ApiClient;
pub use payments::{PaidInvoice, PaymentDetail, PaymentSummary};
pub use quotations::{OrderDetail, OrderLine, QuotationSummary};
pub use session::Session;
