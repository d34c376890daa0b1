//! The session cookie: a boolean capability token, not a per-user session.
//!
//! Anyone holding `auth=authenticated` is treated as logged in until the
//! cookie expires or logout clears it. Only the login handler creates it and
//! only the logout handlers destroy it; the gate just reads it.

use axum::http::{header::COOKIE, HeaderMap};

pub const COOKIE_NAME: &str = "auth";
pub const COOKIE_VALUE: &str = "authenticated";

/// 7 days
pub const COOKIE_MAX_AGE_SECONDS: u64 = 60 * 60 * 24 * 7;

/// Build the `Set-Cookie` value issued on successful login. The `Secure`
/// attribute is only added in production so local HTTP still works.
#[must_use]
pub fn issue(secure: bool) -> String {
    let secure_flag = if secure { "; Secure" } else { "" };
    format!(
        "{COOKIE_NAME}={COOKIE_VALUE}; HttpOnly; SameSite=Lax; Path=/; \
         Max-Age={COOKIE_MAX_AGE_SECONDS}{secure_flag}"
    )
}

/// Build the `Set-Cookie` value that clears the session cookie.
#[must_use]
pub fn revoke() -> String {
    format!("{COOKIE_NAME}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// True if the request carries the session cookie with the exact expected
/// value. Presence and equality are the only authentication signal.
#[must_use]
pub fn is_authenticated(headers: &HeaderMap) -> bool {
    headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|cookies| {
            cookies.split(';').any(|pair| {
                let mut parts = pair.trim().splitn(2, '=');
                parts.next() == Some(COOKIE_NAME) && parts.next() == Some(COOKIE_VALUE)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_issue_production() {
        let cookie = issue(true);
        assert!(cookie.starts_with("auth=authenticated; "));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn test_issue_development() {
        let cookie = issue(false);
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_revoke() {
        assert_eq!(revoke(), "auth=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    }

    #[test]
    fn test_is_authenticated() {
        assert!(is_authenticated(&headers_with_cookie("auth=authenticated")));
        assert!(is_authenticated(&headers_with_cookie(
            "theme=dark; auth=authenticated; lang=nl"
        )));
    }

    #[test]
    fn test_is_not_authenticated() {
        assert!(!is_authenticated(&HeaderMap::new()));
        assert!(!is_authenticated(&headers_with_cookie("auth=wrong")));
        assert!(!is_authenticated(&headers_with_cookie("auth=")));
        assert!(!is_authenticated(&headers_with_cookie("other=authenticated")));
        // Value must match exactly, prefixes do not count
        assert!(!is_authenticated(&headers_with_cookie(
            "auth=authenticated-not"
        )));
    }
}
