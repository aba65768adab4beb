//! Storage layer for the shipment service.
//!
//! Shipments live in memory only; nothing survives a restart.

mod repository;

pub use repository::ShipmentRepository;
