//! # woobridge-core
//!
//! The dispatch core of the gateway: a static registry mapping method
//! names to WooCommerce/WordPress REST calls, per-request credential
//! resolution with environment fallback, and the upstream HTTP client.
//!
//! Everything here is request-scoped and stateless; the only side
//! effects of a dispatch land on the upstream store.

pub mod client;
pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod meta;
pub mod registry;
pub mod request;

pub use client::StoreClient;
pub use credentials::{Auth, Credentials, StoreDefaults};
pub use dispatch::{Dispatcher, MutationSink};
pub use error::{CredentialError, DiagnosticError, DispatchError};
