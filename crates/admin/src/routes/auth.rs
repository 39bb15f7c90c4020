//! Operator login and logout.

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

use crate::middleware::ACCESS_TOKEN_COOKIE;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate { error: query.error }
}

/// Build the token cookie. Secure only when the console is served over
/// HTTPS, so local development over plain HTTP still works.
fn access_token_cookie(token: String, base_url: &str) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .secure(base_url.starts_with("https://"))
        .build()
}

/// Handle login form submission.
///
/// Exchanges credentials for a bearer token at the booking API and
/// stores it in the `access_token` cookie.
#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.backend().login(&form.email, &form.password).await {
        Ok(token) => {
            let cookie = access_token_cookie(token.access_token, &state.config().base_url);
            (jar.add(cookie), Redirect::to("/")).into_response()
        }
        Err(e) => {
            tracing::warn!("Admin login failed: {e}");
            Redirect::to("/login?error=credentials").into_response()
        }
    }
}

/// Handle logout: drop the token cookie.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::from(ACCESS_TOKEN_COOKIE));
    (jar, Redirect::to("/login"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_secure_over_https() {
        let cookie = access_token_cookie("tok".to_string(), "https://admin.steppe.example");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_token_cookie_plain_over_http() {
        let cookie = access_token_cookie("tok".to_string(), "http://localhost:3001");
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.name(), ACCESS_TOKEN_COOKIE);
    }
}
