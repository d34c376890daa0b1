//! The request gate: decides, before any handler runs, whether a request
//! passes through or is redirected to the login page.

use crate::cli::globals::Environment;
use crate::toegang::cookie;
use axum::{
    extract::{Request, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub const LOGIN_PATH: &str = "/login";

/// Paths allowed through without the session cookie: the login page itself
/// and the static-form helper.
const EXEMPT_PATHS: &[&str] = &[LOGIN_PATH, "/__forms.html"];

/// Path prefixes allowed through without the session cookie: the API
/// namespace, static assets, favicons and uploaded media.
const EXEMPT_PREFIXES: &[&str] = &["/api/", "/assets/", "/favicon", "/uploads/"];

/// Immutable gate configuration, built once at startup and shared across
/// requests. The gate never mutates it.
#[derive(Debug)]
pub struct GateState {
    password: Option<SecretString>,
    environment: Environment,
    force_auth: bool,
    site_url: Url,
}

impl GateState {
    #[must_use]
    pub const fn new(
        password: Option<SecretString>,
        environment: Environment,
        force_auth: bool,
        site_url: Url,
    ) -> Self {
        Self {
            password,
            environment,
            force_auth,
            site_url,
        }
    }

    #[must_use]
    pub const fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    #[must_use]
    pub const fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    /// Absolute URL of the login page, for redirects that leave the request
    /// path behind (the GET logout entry point).
    #[must_use]
    pub fn login_url(&self) -> String {
        self.site_url
            .join(LOGIN_PATH)
            .map_or_else(|_| LOGIN_PATH.to_string(), String::from)
    }
}

/// Outcome of the gate for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
}

/// True for paths reachable without authentication.
#[must_use]
pub fn is_exempt(path: &str) -> bool {
    EXEMPT_PATHS.contains(&path)
        || EXEMPT_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

/// Classify one request. First match wins:
///
/// 1. no password configured, the gate is disabled entirely
/// 2. development without the force-auth override
/// 3. valid session cookie
/// 4. exempt path
/// 5. otherwise redirect to the login page
#[must_use]
pub fn decide(gate: &GateState, path: &str, authenticated: bool) -> Decision {
    if gate.password.is_none() {
        return Decision::Allow;
    }

    if !gate.environment.is_production() && !gate.force_auth {
        return Decision::Allow;
    }

    if authenticated {
        return Decision::Allow;
    }

    if is_exempt(path) {
        return Decision::Allow;
    }

    Decision::RedirectToLogin
}

/// Gate middleware, evaluated once per request before any handler. Produces
/// an Allow (pass-through) or a 302 to the login page, nothing else: it
/// never issues or mutates the cookie, and the redirect carries no request
/// state.
pub async fn enforce(
    State(gate): State<Arc<GateState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let authenticated = cookie::is_authenticated(request.headers());

    match decide(&gate, &path, authenticated) {
        Decision::Allow => next.run(request).await,
        Decision::RedirectToLogin => {
            debug!(path, "Redirecting unauthenticated request to login");
            (
                StatusCode::FOUND,
                [(LOCATION, HeaderValue::from_static(LOGIN_PATH))],
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(password: Option<&str>, environment: Environment, force_auth: bool) -> GateState {
        GateState::new(
            password.map(|p| SecretString::from(p.to_string())),
            environment,
            force_auth,
            Url::parse("https://praktijk.example").unwrap(),
        )
    }

    #[test]
    fn test_unconfigured_allows_everything() {
        let gate = gate(None, Environment::Production, false);
        assert_eq!(decide(&gate, "/", false), Decision::Allow);
        assert_eq!(decide(&gate, "/about", false), Decision::Allow);
        assert_eq!(decide(&gate, "/login", false), Decision::Allow);
    }

    #[test]
    fn test_development_skips_gate() {
        let gate = gate(Some("hunter2"), Environment::Development, false);
        assert_eq!(decide(&gate, "/about", false), Decision::Allow);
    }

    #[test]
    fn test_force_auth_enforces_in_development() {
        let gate = gate(Some("hunter2"), Environment::Development, true);
        assert_eq!(decide(&gate, "/about", false), Decision::RedirectToLogin);
        assert_eq!(decide(&gate, "/about", true), Decision::Allow);
    }

    #[test]
    fn test_cookie_allows() {
        let gate = gate(Some("hunter2"), Environment::Production, false);
        assert_eq!(decide(&gate, "/", true), Decision::Allow);
        assert_eq!(decide(&gate, "/about", true), Decision::Allow);
    }

    #[test]
    fn test_exempt_paths_allow_without_cookie() {
        let gate = gate(Some("hunter2"), Environment::Production, false);
        for path in [
            "/login",
            "/__forms.html",
            "/api/login",
            "/api/health",
            "/assets/css/site.css",
            "/favicon.ico",
            "/favicon-32x32.png",
            "/uploads/hero.jpg",
        ] {
            assert_eq!(decide(&gate, path, false), Decision::Allow, "path {path}");
        }
    }

    #[test]
    fn test_protected_paths_redirect() {
        let gate = gate(Some("hunter2"), Environment::Production, false);
        for path in ["/", "/about", "/posts", "/loginx", "/apiary"] {
            assert_eq!(
                decide(&gate, path, false),
                Decision::RedirectToLogin,
                "path {path}"
            );
        }
    }

    #[test]
    fn test_login_url() {
        let gate = gate(Some("hunter2"), Environment::Production, false);
        assert_eq!(gate.login_url(), "https://praktijk.example/login");
    }
}
