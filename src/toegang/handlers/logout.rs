use crate::toegang::{cookie, gate, gate::GateState};
use axum::{
    extract::Extension,
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

fn clear_cookie(response: &mut Response) {
    // Clearing is unconditional: an absent cookie is not an error.
    if let Ok(header) = HeaderValue::from_str(&cookie::revoke()) {
        response.headers_mut().append(SET_COOKIE, header);
    }
}

#[utoipa::path(
    get,
    path = "/api/logout",
    responses(
        (status = 302, description = "Session cookie cleared, redirect to the login page"),
    ),
    tag = "auth"
)]
// link-style logout: clear the cookie and send the browser to the login page
#[instrument(skip(gate))]
pub async fn logout_redirect(gate: Extension<Arc<GateState>>) -> Response {
    let location = HeaderValue::from_str(&gate.login_url())
        .unwrap_or_else(|_| HeaderValue::from_static(gate::LOGIN_PATH));

    let mut response = (StatusCode::FOUND, [(LOCATION, location)]).into_response();
    clear_cookie(&mut response);

    response
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Session cookie cleared"),
    ),
    tag = "auth"
)]
// programmatic logout for form-style calls
#[instrument]
pub async fn logout() -> Response {
    let mut response = (StatusCode::OK, Json(json!({ "success": true }))).into_response();
    clear_cookie(&mut response);

    response
}
