//! Language preference extractor and cookie writer.
//!
//! The preference lives in the `lang` cookie, readable by both client and
//! server. The extractor is the only reader and [`set_language_cookie`]
//! the only writer, so resolution stays in one place instead of ambient
//! shared state.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use steppe_core::{LANG_COOKIE_MAX_AGE_DAYS, LANG_COOKIE_NAME, Language};

/// Extractor resolving the display language for a request.
///
/// Never fails: an absent or unrecognized cookie value resolves to the
/// default language.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Lang(lang): Lang) -> impl IntoResponse {
///     format!("lang={lang}")
/// }
/// ```
pub struct Lang(pub Language);

impl<S> FromRequestParts<S> for Lang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let lang = Language::resolve(jar.get(LANG_COOKIE_NAME).map(Cookie::value));
        Ok(Self(lang))
    }
}

/// Write the language cookie with its fixed multi-day expiry.
///
/// Not http-only: the original contract is that the preference is
/// readable client-side as well as at render time.
#[must_use]
pub fn set_language_cookie(jar: CookieJar, lang: Language) -> CookieJar {
    let cookie = Cookie::build((LANG_COOKIE_NAME, lang.code()))
        .path("/")
        .max_age(time::Duration::days(LANG_COOKIE_MAX_AGE_DAYS))
        .same_site(SameSite::Lax)
        .http_only(false)
        .build();

    jar.add(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_language_cookie_value_and_expiry() {
        let jar = set_language_cookie(CookieJar::new(), Language::En);
        let cookie = jar.get(LANG_COOKIE_NAME).expect("cookie present");
        assert_eq!(cookie.value(), "en");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(
            cookie.max_age(),
            Some(time::Duration::days(LANG_COOKIE_MAX_AGE_DAYS))
        );
    }
}
