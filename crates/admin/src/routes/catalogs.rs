//! Catalog (tour) management routes.
//!
//! Mutations follow POST-redirect-GET: after a successful create, update
//! or delete the operator lands back on the listing, refetched from the
//! booking API so the table shows confirmed state rather than an
//! optimistic local copy.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect},
};
use rust_decimal::Decimal;
use tracing::instrument;

use steppe_core::{CatalogId, CatalogItem};

use crate::backend::types::{CatalogFields, FileUpload};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdminToken;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// Catalog row for the management table.
#[derive(Clone)]
pub struct CatalogRow {
    pub id: i32,
    pub title: String,
    pub price: Decimal,
    pub location: String,
    pub rating: f32,
}

impl From<&CatalogItem> for CatalogRow {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.as_i32(),
            title: item.title.clone(),
            price: item.price,
            location: item.location.clone(),
            rating: item.rating,
        }
    }
}

/// Pre-filled form values for the edit page.
#[derive(Clone)]
pub struct CatalogFormValues {
    pub id: Option<i32>,
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub rating: String,
    /// One information entry per line.
    pub information: String,
    pub image_url: Option<String>,
}

impl CatalogFormValues {
    fn empty() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            price: String::new(),
            location: String::new(),
            rating: String::new(),
            information: String::new(),
            image_url: None,
        }
    }

    fn from_item(item: &CatalogItem, state: &AppState) -> Self {
        Self {
            id: Some(item.id.as_i32()),
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            location: item.location.clone(),
            rating: item.rating.to_string(),
            information: item.information.join("\n"),
            image_url: item.image.as_deref().map(|path| state.image_url(path)),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Catalog listing template.
#[derive(Template, WebTemplate)]
#[template(path = "catalogs/index.html")]
pub struct CatalogIndexTemplate {
    pub catalogs: Vec<CatalogRow>,
}

/// Catalog create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "catalogs/form.html")]
pub struct CatalogFormTemplate {
    pub values: CatalogFormValues,
}

// =============================================================================
// Form Parsing
// =============================================================================

/// Parse the catalog multipart form into typed fields plus an optional
/// image upload. An image part with an empty body means "keep the
/// current image" and is dropped.
async fn parse_catalog_form(
    mut multipart: Multipart,
) -> Result<(CatalogFields, Option<FileUpload>)> {
    let mut title = None;
    let mut description = None;
    let mut price = None;
    let mut location = None;
    let mut rating = None;
    let mut information = Vec::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == "image" {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;
            if !bytes.is_empty() {
                image = Some(FileUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read field {name}: {e}")))?;

        match name.as_str() {
            "title" => title = Some(value),
            "description" => description = Some(value),
            "price" => {
                let parsed: Decimal = value
                    .trim()
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid price: {value}")))?;
                price = Some(parsed);
            }
            "location" => location = Some(value),
            "rating" => {
                let parsed: f32 = value
                    .trim()
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid rating: {value}")))?;
                rating = Some(parsed);
            }
            "information" => {
                information = value
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(ToString::to_string)
                    .collect();
            }
            _ => {}
        }
    }

    let fields = CatalogFields {
        title: title.ok_or_else(|| AppError::BadRequest("missing title".to_string()))?,
        description: description.unwrap_or_default(),
        price: price.ok_or_else(|| AppError::BadRequest("missing price".to_string()))?,
        location: location.unwrap_or_default(),
        rating: rating.unwrap_or_default(),
        information,
    };

    Ok((fields, image))
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the catalog management table.
#[instrument(skip(state, _token))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminToken(_token): RequireAdminToken,
) -> Result<CatalogIndexTemplate> {
    let items = state.backend().list_catalogs().await?;

    Ok(CatalogIndexTemplate {
        catalogs: items.iter().map(CatalogRow::from).collect(),
    })
}

/// Display the empty create form.
pub async fn new(RequireAdminToken(_token): RequireAdminToken) -> impl IntoResponse {
    CatalogFormTemplate {
        values: CatalogFormValues::empty(),
    }
}

/// Handle catalog creation.
#[instrument(skip(state, token, multipart))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdminToken(token): RequireAdminToken,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (fields, image) = parse_catalog_form(multipart).await?;
    state.backend().create_catalog(&token, &fields, image).await?;

    Ok(Redirect::to("/catalogs"))
}

/// Display the edit form, pre-filled from the API.
#[instrument(skip(state, _token))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAdminToken(_token): RequireAdminToken,
    Path(id): Path<i32>,
) -> Result<CatalogFormTemplate> {
    let item = state.backend().get_catalog(CatalogId::new(id)).await?;

    Ok(CatalogFormTemplate {
        values: CatalogFormValues::from_item(&item, &state),
    })
}

/// Handle catalog update.
#[instrument(skip(state, token, multipart))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdminToken(token): RequireAdminToken,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (fields, image) = parse_catalog_form(multipart).await?;
    state
        .backend()
        .update_catalog(&token, CatalogId::new(id), &fields, image)
        .await?;

    Ok(Redirect::to("/catalogs"))
}

/// Handle catalog deletion.
#[instrument(skip(state, token))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminToken(token): RequireAdminToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state
        .backend()
        .delete_catalog(&token, CatalogId::new(id))
        .await?;

    Ok(Redirect::to("/catalogs"))
}
