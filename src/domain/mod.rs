//! Domain types for the shipment service.

mod shipment;

pub use shipment::*;
