// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{json, Value};
use validator::Validate;

use crate::auth::{
    error::AuthError,
    models::{AuthResponse, LoginRequest, RegisterRequest},
    token::REFRESH_TOKEN_TTL_SECS,
};
use crate::config::Environment;
use crate::AppState;

const REFRESH_COOKIE: &str = "refreshToken";

/// Build the refresh token cookie
/// Cross-site delivery in production needs Secure + SameSite=None; local
/// development keeps Lax so plain-http frontends still receive it
fn refresh_cookie(token: String, env: Environment) -> Cookie<'static> {
    let mut cookie = Cookie::new(REFRESH_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(REFRESH_TOKEN_TTL_SECS));
    cookie.set_secure(env.is_production());
    cookie.set_same_site(if env.is_production() {
        SameSite::None
    } else {
        SameSite::Lax
    });
    cookie
}

/// Handler for POST /api/auth/register
/// Creates a user, sets the refresh cookie and returns an access token
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = AuthResponse),
        (status = 400, description = "Missing fields or email already registered")
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthError> {
    request
        .validate()
        .map_err(|_| AuthError::ValidationError("Please add all fields".to_string()))?;

    let session = state
        .auth
        .register(&request.name, &request.email, &request.password)
        .await?;

    let jar = jar.add(refresh_cookie(session.refresh_token, state.env));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            access_token: session.access_token,
            user: session.user,
        }),
    ))
}

/// Handler for POST /api/auth/login
/// Verifies credentials, sets the refresh cookie and returns an access token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    request
        .validate()
        .map_err(|_| AuthError::ValidationError("Please add all fields".to_string()))?;

    let session = state.auth.login(&request.email, &request.password).await?;

    let jar = jar.add(refresh_cookie(session.refresh_token, state.env));

    Ok((
        jar,
        Json(AuthResponse {
            access_token: session.access_token,
            user: session.user,
        }),
    ))
}

/// Handler for POST /api/auth/logout
/// Clears the refresh cookie unconditionally; succeeds even with no session.
/// Outstanding tokens stay valid until natural expiry - nothing is revoked
/// server-side.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Refresh cookie cleared")
    ),
    tag = "auth"
)]
pub async fn logout_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    // The removal cookie must match the attributes it was set with
    let mut removal = Cookie::new(REFRESH_COOKIE, "");
    removal.set_http_only(true);
    removal.set_path("/");
    removal.set_secure(state.env.is_production());
    removal.set_same_site(if state.env.is_production() {
        SameSite::None
    } else {
        SameSite::Lax
    });

    let jar = jar.remove(removal);

    (jar, Json(json!({ "message": "Logout success" })))
}

/// Handler for POST /api/auth/refresh
/// Exchanges the refresh cookie for a new access token; the cookie itself is
/// left untouched
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    responses(
        (status = 200, description = "New access token issued", body = AuthResponse),
        (status = 401, description = "Missing, invalid or expired refresh token")
    ),
    tag = "auth"
)]
pub async fn refresh_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<AuthResponse>, AuthError> {
    let token = jar
        .get(REFRESH_COOKIE)
        .ok_or(AuthError::MissingToken)?
        .value()
        .to_string();

    let (access_token, user) = state.auth.refresh(&token).await?;

    Ok(Json(AuthResponse { access_token, user }))
}
