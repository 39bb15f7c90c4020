//! Static content pages (about, contact).

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use steppe_core::Language;

use crate::filters;
use crate::middleware::Lang;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub lang: Language,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub lang: Language,
}

/// Display the about page.
pub async fn about(Lang(lang): Lang) -> impl IntoResponse {
    AboutTemplate { lang }
}

/// Display the contact page.
pub async fn contact(Lang(lang): Lang) -> impl IntoResponse {
    ContactTemplate { lang }
}
