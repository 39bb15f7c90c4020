//! Authentication extractor for the admin console.
//!
//! The console holds no account state of its own: login stores the
//! booking API's bearer token in a cookie, and this extractor gates every
//! management route on that cookie's presence. Whether the token is still
//! valid is the API's call - a rejected request sends the operator back
//! to the login form.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use secrecy::SecretString;

/// Cookie holding the booking API bearer token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Extractor that requires the admin access token cookie.
///
/// Presence-only check: the token is forwarded to the booking API, which
/// is the actual authority.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminToken(token): RequireAdminToken,
/// ) -> impl IntoResponse {
///     // forward `token` as a Bearer header
/// }
/// ```
pub struct RequireAdminToken(pub SecretString);

/// Rejection when the access token cookie is absent.
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdminToken
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        jar.get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| Self(SecretString::from(cookie.value().to_string())))
            .ok_or(RedirectToLogin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use secrecy::ExposeSecret;

    async fn extract(request: Request<()>) -> Result<RequireAdminToken, RedirectToLogin> {
        let (mut parts, ()) = request.into_parts();
        RequireAdminToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_missing_cookie_rejects() {
        let request = Request::builder().uri("/catalogs").body(()).expect("request");
        assert!(extract(request).await.is_err());
    }

    #[tokio::test]
    async fn test_cookie_presence_is_enough() {
        let request = Request::builder()
            .uri("/catalogs")
            .header("cookie", "access_token=tok123")
            .body(())
            .expect("request");

        let RequireAdminToken(token) = extract(request).await.ok().expect("token extracted");
        assert_eq!(token.expose_secret(), "tok123");
    }
}
