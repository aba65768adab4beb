//! API request and response types.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status, always `UP` while the process serves requests.
    pub status: String,
}

impl HealthResponse {
    /// Response reported while the service is running.
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}
