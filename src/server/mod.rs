//! Server module for building the purchase generator HTTP server
//!
//! `ServerBuilder` loads the catalog once, builds the transport-agnostic
//! `ServerHost`, and exposes it over REST.

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use handlers::AppState;
pub use host::ServerHost;
