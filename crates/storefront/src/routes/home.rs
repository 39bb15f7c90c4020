//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use steppe_core::Language;

use crate::filters;
use crate::middleware::Lang;
use crate::routes::catalogs::CatalogView;
use crate::state::AppState;

/// Testimonial display data for templates.
#[derive(Clone)]
pub struct FavoriteView {
    pub name: String,
    pub text: String,
    pub rating: f32,
    pub photo_url: Option<String>,
}

/// Number of catalog items featured on the home page.
const FEATURED_CATALOGS: usize = 6;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured tours for the landing grid.
    pub catalogs: Vec<CatalogView>,
    /// Customer testimonials.
    pub favorites: Vec<FavoriteView>,
    pub lang: Language,
}

/// Display the home page.
///
/// Each section degrades to empty on a fetch failure so the page always
/// renders.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, Lang(lang): Lang) -> impl IntoResponse {
    let catalogs = state.backend().list_catalogs().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch catalogs for home page: {e}");
            Vec::new()
        },
        |items| {
            items
                .iter()
                .take(FEATURED_CATALOGS)
                .map(|item| CatalogView::build(item, &state))
                .collect()
        },
    );

    let favorites = state.backend().list_favorites().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch testimonials for home page: {e}");
            Vec::new()
        },
        |favorites| {
            favorites
                .iter()
                .map(|favorite| FavoriteView {
                    name: favorite.name.clone(),
                    text: favorite.text.clone(),
                    rating: favorite.rating,
                    photo_url: favorite
                        .photo
                        .as_deref()
                        .map(|path| state.image_url(path)),
                })
                .collect()
        },
    );

    HomeTemplate {
        catalogs,
        favorites,
        lang,
    }
}
