use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::gate::gate;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the application router with the allow-list gate in front of every route
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HELLO, get(handlers::hello_handler))
        .route(routes::SET, post(handlers::set_handler))
        .route(routes::GET_ITEM, get(handlers::get_handler))
        .route(routes::DIVIDE, post(handlers::divide_handler))
        .route(routes::DOCS, get(handlers::docs_handler))
        .route(routes::OPENAPI, get(handlers::openapi_handler))
        .fallback(|| async { ApiError::MethodNotAllowed })
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn_with_state(state.clone(), gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
