//! Admin dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdminToken;
use crate::state::AppState;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub catalog_count: usize,
    pub favorite_count: usize,
}

/// Display the dashboard with current content counts.
#[instrument(skip(state, _token))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminToken(_token): RequireAdminToken,
) -> Result<DashboardTemplate> {
    let catalogs = state.backend().list_catalogs().await?;
    let favorites = state.backend().list_favorites().await?;

    Ok(DashboardTemplate {
        catalog_count: catalogs.len(),
        favorite_count: favorites.len(),
    })
}
