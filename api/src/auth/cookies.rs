//! Session cookie helpers

use axum::http::{header, HeaderMap};

use crate::domain::ports::TokenPair;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

fn session_cookie(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        name, value, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` values for a freshly issued token pair
pub fn session_cookies(tokens: &TokenPair, secure: bool) -> [String; 2] {
    [
        session_cookie(
            ACCESS_TOKEN_COOKIE,
            &tokens.access_token,
            tokens.access_ttl_secs,
            secure,
        ),
        session_cookie(
            REFRESH_TOKEN_COOKIE,
            &tokens.refresh_token,
            tokens.refresh_ttl_secs,
            secure,
        ),
    ]
}

/// Value of the named cookie from the request's `Cookie` headers
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Token from `Authorization: Bearer ...`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}
