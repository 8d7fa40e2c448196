use crate::cli::Args;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS, ACCESS_CONTROL_MAX_AGE, ORIGIN,
};
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

const WILDCARD: &str = "*";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InvalidOrigin {
    #[error("the wildcard origin `*` can't be combined with credentials, list origins explicitly")]
    Wildcard,
    #[error("`{0}` is not a valid header value")]
    NotAHeaderValue(String),
    #[error("at least one allowed origin is required")]
    Empty,
}

/// Parses a single `--allowed-origin` value.
pub fn parse_origin(origin: &str) -> Result<HeaderValue, InvalidOrigin> {
    let origin = origin.trim();
    if origin == WILDCARD {
        return Err(InvalidOrigin::Wildcard);
    }
    if origin.is_empty() {
        return Err(InvalidOrigin::Empty);
    }
    HeaderValue::from_str(origin).map_err(|_| InvalidOrigin::NotAHeaderValue(origin.to_string()))
}

/// Which origins may read responses and whether they may send cookies along.
///
/// Built once at start-up and never mutated. Origins are matched exactly
/// against the request's `Origin` header and echoed back when allowed.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    allowed_origins: Vec<HeaderValue>,
    allow_credentials: bool,
}

impl CorsPolicy {
    pub fn new(
        allowed_origins: Vec<HeaderValue>,
        allow_credentials: bool,
    ) -> Result<Self, InvalidOrigin> {
        if allowed_origins.is_empty() {
            return Err(InvalidOrigin::Empty);
        }
        // `AllowOrigin::list` panics on `*` even without credentials.
        if allowed_origins.iter().any(|origin| origin == WILDCARD) {
            return Err(InvalidOrigin::Wildcard);
        }
        Ok(Self {
            allowed_origins,
            allow_credentials,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, InvalidOrigin> {
        Self::new(args.allowed_origins.clone(), true)
    }

    pub fn allowed_origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed_origins.iter().cloned()))
            .allow_methods([
                Method::GET,
                Method::HEAD,
                Method::POST,
                Method::OPTIONS,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(self.allow_credentials)
    }
}

const GRANTING_HEADERS: [HeaderName; 5] = [
    ACCESS_CONTROL_ALLOW_CREDENTIALS,
    ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_EXPOSE_HEADERS,
    ACCESS_CONTROL_MAX_AGE,
];

/// Runs outside [`CorsPolicy::layer`] and fills the gaps left by tower-http.
///
/// Requests without an `Origin` still get every allowed origin advertised.
/// Requests from an origin that isn't allowed get no CORS grants at all.
pub async fn complete_headers(
    State(cors_policy): State<CorsPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let has_origin = request.headers().contains_key(ORIGIN);
    let mut response = next.run(request).await;
    if response.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN) {
        return response;
    }

    let headers = response.headers_mut();
    if has_origin {
        for name in GRANTING_HEADERS {
            headers.remove(name);
        }
    } else {
        for origin in cors_policy.allowed_origins() {
            headers.append(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        }
    }
    response
}
