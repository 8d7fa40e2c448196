use crate::data;
use crate::http::cors::{self, CorsPolicy};
use crate::http::middleware;
use axum::{routing::get, Router};
use tower_cookies::CookieManagerLayer;

pub fn new(cors_policy: &CorsPolicy) -> Router {
    let api_routes = Router::new().route("/data", get(data::handlers::data));

    Router::new()
        .nest("/api", api_routes)
        .layer(CookieManagerLayer::new())
        .layer(cors_policy.layer())
        .layer(axum::middleware::from_fn_with_state(
            cors_policy.clone(),
            cors::complete_headers,
        ))
        .layer(axum::middleware::from_fn(middleware::trace_requests))
}
