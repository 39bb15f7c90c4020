//! Testimonial (favorites) management routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use steppe_core::{FavoriteId, FavoriteTestimonial};

use crate::backend::types::{FavoriteFields, FileUpload};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminToken;
use crate::state::AppState;

/// Testimonial row for the management table.
#[derive(Clone)]
pub struct FavoriteRow {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub rating: f32,
    pub photo_url: Option<String>,
}

/// Pre-filled form values for the edit page.
#[derive(Clone)]
pub struct FavoriteFormValues {
    pub id: Option<i32>,
    pub name: String,
    pub text: String,
    pub rating: String,
    pub photo_url: Option<String>,
}

impl FavoriteFormValues {
    fn empty() -> Self {
        Self {
            id: None,
            name: String::new(),
            text: String::new(),
            rating: String::new(),
            photo_url: None,
        }
    }

    fn from_item(item: &FavoriteTestimonial, state: &AppState) -> Self {
        Self {
            id: Some(item.id.as_i32()),
            name: item.name.clone(),
            text: item.text.clone(),
            rating: item.rating.to_string(),
            photo_url: item.photo.as_deref().map(|path| state.image_url(path)),
        }
    }
}

/// Testimonial listing template.
#[derive(Template, WebTemplate)]
#[template(path = "favorites/index.html")]
pub struct FavoriteIndexTemplate {
    pub favorites: Vec<FavoriteRow>,
}

/// Testimonial create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "favorites/form.html")]
pub struct FavoriteFormTemplate {
    pub values: FavoriteFormValues,
}

/// Parse the testimonial multipart form.
async fn parse_favorite_form(
    mut multipart: Multipart,
) -> Result<(FavoriteFields, Option<FileUpload>)> {
    let mut name = None;
    let mut text = None;
    let mut rating = None;
    let mut photo = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let Some(field_name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if field_name == "photo" {
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
                photo = Some(FileUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field.text().await.map_err(|e| {
            AppError::BadRequest(format!("failed to read field {field_name}: {e}"))
        })?;

        match field_name.as_str() {
            "name" => name = Some(value),
            "text" => text = Some(value),
            "rating" => {
                let parsed: f32 = value
                    .trim()
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid rating: {value}")))?;
                rating = Some(parsed);
            }
            _ => {}
        }
    }

    let fields = FavoriteFields {
        name: name.ok_or_else(|| AppError::BadRequest("missing name".to_string()))?,
        text: text.ok_or_else(|| AppError::BadRequest("missing text".to_string()))?,
        rating: rating.unwrap_or_default(),
    };

    Ok((fields, photo))
}

/// Display the testimonial management table.
#[instrument(skip(state, _token))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminToken(_token): RequireAdminToken,
) -> Result<FavoriteIndexTemplate> {
    let items = state.backend().list_favorites().await?;

    Ok(FavoriteIndexTemplate {
        favorites: items
            .iter()
            .map(|favorite: &FavoriteTestimonial| FavoriteRow {
                id: favorite.id.as_i32(),
                name: favorite.name.clone(),
                text: favorite.text.clone(),
                rating: favorite.rating,
                photo_url: favorite
                    .photo
                    .as_deref()
                    .map(|path| state.image_url(path)),
            })
            .collect(),
    })
}

/// Display the create form.
pub async fn new(RequireAdminToken(_token): RequireAdminToken) -> impl IntoResponse {
    FavoriteFormTemplate {
        values: FavoriteFormValues::empty(),
    }
}

/// Handle testimonial creation.
#[instrument(skip(state, token, multipart))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdminToken(token): RequireAdminToken,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (fields, photo) = parse_favorite_form(multipart).await?;
    state.backend().create_favorite(&token, &fields, photo).await?;

    Ok(Redirect::to("/favorites"))
}

/// Display the edit form, pre-filled from the listing.
///
/// The booking API has no single-testimonial read, so the entry is
/// looked up in the full list.
#[instrument(skip(state, _token))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAdminToken(_token): RequireAdminToken,
    Path(id): Path<i32>,
) -> Result<FavoriteFormTemplate> {
    let wanted = FavoriteId::new(id);
    let items = state.backend().list_favorites().await?;
    let item = items
        .iter()
        .find(|favorite| favorite.id == wanted)
        .ok_or_else(|| AppError::NotFound(format!("Testimonial not found: {id}")))?;

    Ok(FavoriteFormTemplate {
        values: FavoriteFormValues::from_item(item, &state),
    })
}

/// Handle testimonial update.
#[instrument(skip(state, token, multipart))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdminToken(token): RequireAdminToken,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (fields, photo) = parse_favorite_form(multipart).await?;
    state
        .backend()
        .update_favorite(&token, FavoriteId::new(id), &fields, photo)
        .await?;

    Ok(Redirect::to("/favorites"))
}

/// Handle testimonial deletion.
#[instrument(skip(state, token))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdminToken(token): RequireAdminToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state
        .backend()
        .delete_favorite(&token, FavoriteId::new(id))
        .await?;

    Ok(Redirect::to("/favorites"))
}
