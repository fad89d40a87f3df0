//! HTTP API for the dialogue engine.
//!
//! Exposes the engine over three JSON endpoints nested under `/api/`:
//! a health check, message analysis, and the symptom vocabulary the
//! engine recognizes (clients poll it and fall back to their own
//! built-in list when unreachable).
//!
//! The router is composable — `api_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;

pub use error::ApiError;
pub use router::api_router;
