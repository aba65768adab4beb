//! Route definitions for the API.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::config::ApiConfig;
use crate::error::panic_response;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_shipments,
        handlers::create_shipment,
        handlers::get_shipment,
        handlers::update_shipment,
        handlers::delete_shipment,
        handlers::health_check,
    ),
    components(schemas(
        crate::domain::Shipment,
        crate::domain::ShipmentDraft,
        crate::api::types::HealthResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "shipments", description = "Shipment management"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Shipments API",
        description = "Register, track and manage shipments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// Every route is mounted under the configured context path; the OpenAPI
/// document and Swagger UI live under the docs path inside it.
pub fn build_router(state: AppState, api: &ApiConfig) -> Router {
    let context_path = normalize_prefix(&api.context_path);
    let docs_path = format!("{}{}", context_path, normalize_prefix(&api.docs_path));

    let resources = Router::new()
        .route(
            "/shipments",
            get(handlers::list_shipments)
                .post(handlers::create_shipment)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/shipments/:id",
            get(handlers::get_shipment)
                .put(handlers::update_shipment)
                .delete(handlers::delete_shipment)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        )
        .with_state(state);

    let router = if context_path.is_empty() {
        resources
    } else {
        Router::new().nest(&context_path, resources)
    };

    let mut openapi = ApiDoc::openapi();
    if !context_path.is_empty() {
        openapi.servers = Some(vec![Server::new(context_path.clone())]);
    }

    router
        .merge(
            SwaggerUi::new(format!("{docs_path}/swagger-ui"))
                .url(format!("{docs_path}/openapi.json"), openapi),
        )
        .fallback(handlers::route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(api))
}

/// Build the CORS layer from the configured origins.
fn cors_layer(api: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if api.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = api
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Turn a configured path into a nestable prefix: leading slash, no trailing
/// slash, empty for the root.
fn normalize_prefix(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
