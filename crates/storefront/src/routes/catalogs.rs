//! Catalog (tour) route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use tracing::instrument;

use steppe_core::{CatalogId, CatalogItem, Language};

use crate::error::Result;
use crate::filters;
use crate::middleware::Lang;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// Catalog display data for templates.
#[derive(Clone)]
pub struct CatalogView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    pub rating: f32,
    pub information: Vec<String>,
    pub image_url: Option<String>,
}

impl CatalogView {
    pub fn build(item: &CatalogItem, state: &AppState) -> Self {
        Self {
            id: item.id.as_i32(),
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price,
            location: item.location.clone(),
            rating: item.rating,
            information: item.information.clone(),
            image_url: item.image.as_deref().map(|path| state.image_url(path)),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Catalog listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalogs/index.html")]
pub struct CatalogIndexTemplate {
    pub catalogs: Vec<CatalogView>,
    pub lang: Language,
}

/// Catalog detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalogs/show.html")]
pub struct CatalogShowTemplate {
    pub catalog: CatalogView,
    pub lang: Language,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the catalog listing.
///
/// Degrades to an empty list when the fetch fails so the page still
/// renders.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, Lang(lang): Lang) -> impl IntoResponse {
    let catalogs = state.backend().list_catalogs().await.map_or_else(
        |e| {
            tracing::warn!("Failed to fetch catalog listing: {e}");
            Vec::new()
        },
        |items| {
            items
                .iter()
                .map(|item| CatalogView::build(item, &state))
                .collect()
        },
    );

    CatalogIndexTemplate { catalogs, lang }
}

/// Display a single catalog item with its "Book now" action.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Lang(lang): Lang,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let item = state.backend().get_catalog(CatalogId::new(id)).await?;

    Ok(CatalogShowTemplate {
        catalog: CatalogView::build(&item, &state),
        lang,
    })
}
