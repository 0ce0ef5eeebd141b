//! HTTP server module.
//!
//! An axum-based REST API over the service layer. Handlers parse and
//! validate requests, delegate to services, and serialize responses;
//! CORS, compression, and request tracing are middleware concerns.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
