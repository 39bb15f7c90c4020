//! Language selection endpoint.

use axum::{
    Form,
    http::header::REFERER,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use steppe_core::Language;

use crate::middleware::set_language_cookie;

/// Language selection form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
}

/// Set the display language cookie and return to the submitting page.
///
/// Unknown codes fall back to the default language rather than erroring.
pub async fn set(
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> impl IntoResponse {
    let lang = Language::resolve(Some(&form.lang));
    let jar = set_language_cookie(jar, lang);

    let back = headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/")
        .to_string();

    (jar, Redirect::to(&back))
}
