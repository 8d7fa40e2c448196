use tower_cookies::cookie::SameSite;
use tower_cookies::Cookie;

pub const TOKEN_COOKIE_NAME: &str = "token";
// Placeholder, not a session token.
pub const TOKEN_COOKIE_VALUE: &str = "123456";

/// Session cookie readable from client-side script: no `HttpOnly`, no
/// `Secure`, no expiry.
pub fn token_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE_NAME, TOKEN_COOKIE_VALUE))
        .http_only(false)
        .same_site(SameSite::Lax)
        .build()
}
