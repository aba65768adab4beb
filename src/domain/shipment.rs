//! Shipment domain model.
//!
//! A shipment is a parcel on its way to a recipient. Its identifier is always
//! assigned by the service; clients only ever supply the mutable fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ShipmentResult;

/// Status given to every newly created shipment.
pub const DEFAULT_STATUS: &str = "Pending";

/// A shipment record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Shipment {
    /// Unique identifier, generated on creation.
    pub id: String,
    /// Who receives the parcel.
    pub recipient: String,
    /// Delivery address.
    pub address: String,
    /// Free-form delivery status, e.g. "Pending", "In transit", "Delivered".
    pub status: String,
}

impl Shipment {
    /// Create a new shipment from a draft.
    ///
    /// A fresh id is generated and the status is forced to [`DEFAULT_STATUS`],
    /// whatever the draft carried.
    pub fn create(draft: ShipmentDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipient: draft.recipient,
            address: draft.address,
            status: DEFAULT_STATUS.to_string(),
        }
    }

    /// Overwrite the mutable fields with those of `draft`. The id never changes.
    pub fn apply(&mut self, draft: ShipmentDraft) {
        self.recipient = draft.recipient;
        self.address = draft.address;
        self.status = draft.status;
    }
}

/// Mutable shipment fields as sent by a client.
///
/// Decoding is permissive: unknown fields (including `id`) are ignored and
/// missing fields fall back to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct ShipmentDraft {
    /// Who receives the parcel.
    pub recipient: String,
    /// Delivery address.
    pub address: String,
    /// Requested status. Ignored on create.
    pub status: String,
}

impl ShipmentDraft {
    /// Decode a draft from a raw JSON request body.
    ///
    /// The body must be a JSON object; arrays are not read positionally.
    pub fn decode(body: &[u8]) -> ShipmentResult<Self> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}
