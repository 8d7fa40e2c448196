use crate::data::cookies::token_cookie;
use crate::data::responses::{DataResponse, SUCCESS_MESSAGE};
use crate::http::tests::{test_server, ALLOWED_ORIGIN};
use http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN, SET_COOKIE,
};
use http::HeaderValue;

#[test]
fn test_token_cookie_attributes() {
    assert_eq!(token_cookie().to_string(), "token=123456; SameSite=Lax");
}

#[tokio::test]
async fn test_data_for_allowed_origin() {
    let server = test_server();

    let response = server
        .get("/api/data")
        .add_header(ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN))
        .await;

    response.assert_status_ok();
    response.assert_json(&DataResponse {
        message: String::from(SUCCESS_MESSAGE),
    });
    let headers = response.headers();
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), ALLOWED_ORIGIN);
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn test_data_body_has_a_single_message_key() {
    let server = test_server();

    let body = server.get("/api/data").await.json::<serde_json::Value>();

    let object = body.as_object().expect("Body is not a JSON object.");
    assert_eq!(object.len(), 1);
    assert!(object["message"].is_string());
}

#[tokio::test]
async fn test_data_for_foreign_origin() {
    let server = test_server();

    let response = server
        .get("/api/data")
        .add_header(ORIGIN, HeaderValue::from_static("http://evil.example.com"))
        .await;

    response.assert_status_ok();
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    assert!(response.headers().get(SET_COOKIE).is_some());
}

#[tokio::test]
async fn test_data_without_origin() {
    let server = test_server();

    let response = server.get("/api/data").await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), ALLOWED_ORIGIN);
    assert_eq!(headers.get_all(ACCESS_CONTROL_ALLOW_ORIGIN).iter().count(), 1);
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn test_data_sets_script_readable_cookie() {
    let server = test_server();

    let response = server.get("/api/data").await;

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("No `Set-Cookie` header.")
        .to_str()
        .expect("`Set-Cookie` is not ASCII.")
        .to_string();
    assert!(cookie.contains("token=123456"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("HttpOnly"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_data_is_idempotent() {
    let server = test_server();

    let first = server.get("/api/data").await;
    let second = server.get("/api/data").await;

    assert_eq!(first.text(), second.text());
    assert_eq!(
        first.headers().get_all(SET_COOKIE).iter().collect::<Vec<_>>(),
        second.headers().get_all(SET_COOKIE).iter().collect::<Vec<_>>()
    );
    assert_eq!(first.headers().get_all(SET_COOKIE).iter().count(), 1);
}
