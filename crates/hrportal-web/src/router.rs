//! Route definitions for the HR Portal HTTP surface.
//!
//! Page routes sit behind the access-control middleware; action routes are
//! mounted under `/api` and authenticate through the session extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.uploads.max_size_bytes as usize;

    let cors = build_cors_layer(&state);

    Router::new()
        .merge(page_routes(state.clone()))
        .merge(auth_routes())
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Navigable pages, gated by the route policy on every request.
fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::entry))
        .route("/empleados", get(handlers::pages::roster))
        .route("/mi-perfil", get(handlers::pages::profile))
        .layer(axum_middleware::from_fn_with_state(
            state,
            middleware::access::gate_pages,
        ))
}

/// Session endpoints: login, logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// JSON action endpoints.
fn api_routes() -> Router<AppState> {
    Router::new()
        // The caller's own profile with reconciled slots
        .route("/profile", get(handlers::pages::profile))
        // Roster management (HR)
        .route("/empleados", get(handlers::empleados::list))
        .route("/empleados", post(handlers::empleados::create))
        .route("/empleados/{id}", patch(handlers::empleados::update))
        .route("/empleados/{id}", delete(handlers::empleados::delete))
        // Documents
        .route("/document-types", get(handlers::documents::list_types))
        .route(
            "/employees/{id}/documents",
            get(handlers::documents::employee_documents),
        )
        .route("/documents/upload", post(handlers::documents::upload))
        .route("/documents/{id}", delete(handlers::documents::delete))
        // Health (no auth)
        .route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
