//! HTTP API layer for the shipment service.
//!
//! Provides REST endpoints for shipment management and health checks.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
