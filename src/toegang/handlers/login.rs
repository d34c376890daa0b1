use crate::toegang::{cookie, gate::GateState, handlers::AuthError};
use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument, warn};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Credentials {
    password: String,
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login successful, session cookie issued"),
        (status = 401, description = "Invalid password"),
        (status = 500, description = "Password protection not configured or malformed request"),
    ),
    tag = "auth"
)]
// axum handler for login; payload is skipped from the span so the submitted
// password never reaches the logs
#[instrument(skip(gate, payload))]
pub async fn login(
    gate: Extension<Arc<GateState>>,
    payload: Option<Json<Credentials>>,
) -> Response {
    let Some(Json(credentials)) = payload else {
        error!("Malformed login payload");
        return AuthError::RequestMalformed.into_response();
    };

    let Some(password) = gate.password() else {
        error!("Login attempted while no password is configured");
        return AuthError::ConfigurationMissing.into_response();
    };

    if credentials.password != password.expose_secret() {
        warn!("Rejected login with invalid password");
        return AuthError::InvalidCredential.into_response();
    }

    let Ok(header) = HeaderValue::from_str(&cookie::issue(gate.is_production())) else {
        error!("Failed to build session cookie header");
        return AuthError::RequestMalformed.into_response();
    };

    let mut response = (StatusCode::OK, Json(json!({ "success": true }))).into_response();
    response.headers_mut().append(SET_COOKIE, header);

    response
}
