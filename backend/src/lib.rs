//! User records backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface for the REST endpoints.
pub use doc::ApiDoc;
