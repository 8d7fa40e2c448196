use crate::data::cookies::{token_cookie, TOKEN_COOKIE_NAME};
use crate::data::responses::{DataResponse, SUCCESS_MESSAGE};
use axum::response::Json;
use tower_cookies::Cookies;

#[axum::debug_handler]
pub async fn data(jar: Cookies) -> Json<DataResponse> {
    jar.add(token_cookie());
    tracing::debug!(cookie = TOKEN_COOKIE_NAME, "Set cookie.");
    Json(DataResponse {
        message: SUCCESS_MESSAGE.to_string(),
    })
}
