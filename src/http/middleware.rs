use axum::{extract::Request, middleware::Next, response::Response};
use http::header::ORIGIN;
use std::time::Instant;

pub async fn trace_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed().as_micros();

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        origin = %origin,
        status = response.status().as_u16(),
        processing_time_us = u64::try_from(elapsed_time).unwrap_or(u64::MAX),
    );

    response
}
