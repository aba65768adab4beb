//! HTTP request handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, OriginalUri, Path, State},
    http::{Method, StatusCode},
    Json,
};

use crate::api::types::HealthResponse;
use crate::domain::{Shipment, ShipmentDraft};
use crate::error::{ErrorResponse, ShipmentError, ShipmentResult};
use crate::AppState;

/// List all shipments.
///
/// GET /shipments
#[utoipa::path(
    get,
    path = "/shipments",
    responses(
        (status = 200, description = "All stored shipments", body = [Shipment])
    ),
    tag = "shipments"
)]
pub async fn list_shipments(State(state): State<AppState>) -> Json<Vec<Shipment>> {
    let shipments = state.repository.list().await;

    tracing::info!(count = shipments.len(), "Listing shipments");

    Json(shipments)
}

/// Register a new shipment.
///
/// POST /shipments
///
/// The id is always generated and the status always starts as `Pending`.
#[utoipa::path(
    post,
    path = "/shipments",
    request_body(content = ShipmentDraft, content_type = "application/json"),
    responses(
        (status = 201, description = "Shipment created", body = Shipment),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "shipments"
)]
pub async fn create_shipment(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ShipmentResult<(StatusCode, Json<Shipment>)> {
    let draft = ShipmentDraft::decode(&body?)?;

    tracing::info!(
        recipient = %draft.recipient,
        address = %draft.address,
        "New shipment received"
    );

    let shipment = Shipment::create(draft);
    state.repository.insert(shipment.clone()).await;
    let total = state.repository.count().await;

    tracing::info!(shipment_id = %shipment.id, total, "Shipment registered");

    Ok((StatusCode::CREATED, Json(shipment)))
}

/// Get a shipment by id.
///
/// GET /shipments/{id}
#[utoipa::path(
    get,
    path = "/shipments/{id}",
    params(("id" = String, Path, description = "Shipment ID")),
    responses(
        (status = 200, description = "Shipment details", body = Shipment),
        (status = 404, description = "Shipment not found", body = ErrorResponse)
    ),
    tag = "shipments"
)]
pub async fn get_shipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ShipmentResult<Json<Shipment>> {
    tracing::info!(shipment_id = %id, "Fetching shipment");

    let shipment = state.repository.get(&id).await?;

    Ok(Json(shipment))
}

/// Replace the recipient, address and status of a shipment.
///
/// PUT /shipments/{id}
#[utoipa::path(
    put,
    path = "/shipments/{id}",
    params(("id" = String, Path, description = "Shipment ID")),
    request_body(content = ShipmentDraft, content_type = "application/json"),
    responses(
        (status = 200, description = "Shipment updated", body = Shipment),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Shipment not found", body = ErrorResponse)
    ),
    tag = "shipments"
)]
pub async fn update_shipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ShipmentResult<Json<Shipment>> {
    let draft = ShipmentDraft::decode(&body?)?;

    let shipment = state.repository.update(&id, draft).await?;

    tracing::info!(
        shipment_id = %id,
        status = %shipment.status,
        "Shipment updated"
    );

    Ok(Json(shipment))
}

/// Delete a shipment.
///
/// DELETE /shipments/{id}
#[utoipa::path(
    delete,
    path = "/shipments/{id}",
    params(("id" = String, Path, description = "Shipment ID")),
    responses(
        (status = 204, description = "Shipment deleted"),
        (status = 404, description = "Shipment not found", body = ErrorResponse)
    ),
    tag = "shipments"
)]
pub async fn delete_shipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ShipmentResult<StatusCode> {
    state.repository.delete(&id).await?;

    tracing::info!(shipment_id = %id, "Shipment deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> ShipmentError {
    ShipmentError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

/// Fallback for paths that match no route.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ShipmentError {
    ShipmentError::RouteNotFound(uri.path().to_string())
}
