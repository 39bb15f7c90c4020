//! HTTP route handlers for the admin console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /login                  - Login page (the only unguarded page)
//! POST /login                  - Login action
//! POST /logout                 - Logout action
//!
//! # Guarded by the access token cookie
//! GET  /                       - Dashboard
//! GET  /catalogs               - Catalog management table
//! GET  /catalogs/new           - Create form
//! POST /catalogs               - Create action (multipart)
//! GET  /catalogs/{id}/edit     - Edit form
//! POST /catalogs/{id}          - Update action (multipart)
//! POST /catalogs/{id}/delete   - Delete action
//! GET  /favorites              - Testimonial management table
//! GET  /favorites/new          - Create form
//! POST /favorites              - Create action (multipart)
//! GET  /favorites/{id}/edit    - Edit form
//! POST /favorites/{id}         - Update action (multipart)
//! POST /favorites/{id}/delete  - Delete action
//! ```

pub mod auth;
pub mod catalogs;
pub mod dashboard;
pub mod favorites;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog management router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalogs::index).post(catalogs::create))
        .route("/new", get(catalogs::new))
        .route("/{id}", post(catalogs::update))
        .route("/{id}/edit", get(catalogs::edit))
        .route("/{id}/delete", post(catalogs::delete))
}

/// Create the testimonial management router.
pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::index).post(favorites::create))
        .route("/new", get(favorites::new))
        .route("/{id}", post(favorites::update))
        .route("/{id}/edit", get(favorites::edit))
        .route("/{id}/delete", post(favorites::delete))
}

/// Create all routes for the admin console.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .nest("/catalogs", catalog_routes())
        .nest("/favorites", favorite_routes())
}
