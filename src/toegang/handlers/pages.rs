use axum::{extract::Query, response::Html};
use serde::Deserialize;
use tracing::instrument;

const LOGIN_TEMPLATE: &str = include_str!("login.html");

const ERROR_BANNER: &str =
    r#"<div class="error" role="alert">Onjuist wachtwoord. Probeer het opnieuw.</div>"#;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    error: Option<String>,
}

/// The login page. `?error=1` (set by the submission script after a rejected
/// or failed attempt) renders the failure banner; anything else does not.
#[instrument]
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    let banner = if query.error.as_deref() == Some("1") {
        ERROR_BANNER
    } else {
        ""
    };

    Html(LOGIN_TEMPLATE.replace("<!--error-->", banner))
}
