//! Authentication route handlers.
//!
//! Credentials go straight to the booking API; on success the issued
//! bearer token is stored in an `access_token` cookie. No account state
//! is kept locally.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::instrument;

use steppe_core::Language;

use crate::backend::types::RegisterRequest;
use crate::filters;
use crate::middleware::Lang;
use crate::state::AppState;

/// Cookie holding the booking API bearer token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

// =============================================================================
// Form and Query Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
    pub lang: Language,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub lang: Language,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>, Lang(lang): Lang) -> impl IntoResponse {
    LoginTemplate {
        error: query.error,
        success: query.success,
        lang,
    }
}

/// Handle login form submission.
#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.backend().login(&form.email, &form.password).await {
        Ok(token) => {
            let jar = jar.add(access_token_cookie(token.access_token));
            (jar, Redirect::to("/")).into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            Redirect::to("/auth/login?error=credentials").into_response()
        }
    }
}

/// Display the registration page.
pub async fn register_page(
    Query(query): Query<MessageQuery>,
    Lang(lang): Lang,
) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error,
        lang,
    }
}

/// Handle registration form submission.
#[instrument(skip(state, form))]
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    if form.password != form.password_confirm {
        return Redirect::to("/auth/register?error=password_mismatch").into_response();
    }

    let request = RegisterRequest {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        password: form.password,
    };

    match state.backend().register(&request).await {
        Ok(()) => Redirect::to("/auth/login?success=registered").into_response(),
        Err(e) => {
            tracing::warn!("Registration failed: {e}");
            Redirect::to("/auth/register?error=failed").into_response()
        }
    }
}

/// Handle logout: drop the token cookie.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::from(ACCESS_TOKEN_COOKIE));
    (jar, Redirect::to("/"))
}

fn access_token_cookie(token: String) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .build()
}
