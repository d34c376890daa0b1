use crate::toegang::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "toegang",
        description = "Password gate API for the praktijk brochure site"
    ),
    paths(
        handlers::health::health,
        handlers::login::login,
        handlers::logout::logout,
        handlers::logout::logout_redirect,
    ),
    components(schemas(handlers::login::Credentials)),
    tags(
        (name = "auth", description = "Login, logout and the session cookie"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;
