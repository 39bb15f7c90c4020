//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The whole cart is persisted in the session under a single key and
//! rewritten after every mutation; every mutation response carries an
//! `HX-Trigger: cart-updated` header so the count badge refreshes without
//! any polling.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use steppe_core::{Cart, CartLine, CatalogId, ClientInfo, Language};

use crate::filters;
use crate::middleware::Lang;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: i32,
    pub title: String,
    pub quantity: u32,
    pub price: Decimal,
    pub line_total: Decimal,
    pub image_url: Option<String>,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub count: u32,
}

impl CartView {
    fn build(cart: &Cart, state: &AppState) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    id: line.id.as_i32(),
                    title: line.title.clone(),
                    quantity: line.quantity,
                    price: line.price,
                    line_total: line.subtotal(),
                    image_url: line.image.as_deref().map(|path| state.image_url(path)),
                })
                .collect(),
            total: cart.total(),
            count: cart.item_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session.
///
/// Returns an empty cart when the key is absent or unreadable.
async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Vec<CartLine>>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .map(Cart::from_lines)
        .unwrap_or_default()
}

/// Persist the full cart line list back to the session.
///
/// Session writes are local and assumed non-failing; a failure is logged
/// and the response still reflects the in-memory cart.
async fn store_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(session_keys::CART, cart.lines()).await {
        tracing::error!("Failed to persist cart to session: {e}");
    }
}

/// Clear the cart from the session.
async fn clear_cart(session: &Session) {
    if let Err(e) = session.remove::<Vec<CartLine>>(session_keys::CART).await {
        tracing::error!("Failed to clear cart from session: {e}");
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub catalog_id: i32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub catalog_id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub catalog_id: i32,
}

/// Checkout form data (the client info modal).
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone_number: String,
    pub purchase_date: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub lang: Language,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Cart lines fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Lang(lang): Lang,
) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::build(&cart, &state),
        lang,
        error: None,
        success: None,
    }
}

/// Add a catalog item to the cart (HTMX).
///
/// Increments the quantity of an existing line, or inserts a new line
/// with quantity 1. Returns an HTMX trigger to update the count badge.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let item = match state.backend().get_catalog(CatalogId::new(form.catalog_id)).await {
        Ok(item) => item,
        Err(e) => {
            tracing::error!("Failed to fetch catalog for booking: {e}");
            return (
                StatusCode::BAD_GATEWAY,
                Html("<span class=\"text-red-500\">Error adding to cart</span>"),
            )
                .into_response();
        }
    };

    let mut cart = load_cart(&session).await;
    cart.upsert(&item);
    store_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response()
}

/// Set a cart line quantity (HTMX).
///
/// The quantity is clamped to zero minimum; a clamp result of zero
/// removes the line.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    let mut cart = load_cart(&session).await;
    cart.set_quantity(CatalogId::new(form.catalog_id), form.quantity);
    store_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart, &state),
        },
    )
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let mut cart = load_cart(&session).await;
    cart.remove(CatalogId::new(form.catalog_id));
    store_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart, &state),
        },
    )
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartCountTemplate {
        count: cart.item_count(),
    }
}

/// Submit checkout.
///
/// Builds one payload pairing every cart line with a copy of the client
/// info and submits it once. On success the cart is cleared; on any
/// failure the cart is left untouched and a single notice is shown.
#[instrument(skip(state, session, form))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Lang(lang): Lang,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return CartShowTemplate {
            cart: CartView::build(&cart, &state),
            lang,
            error: Some("Your cart is empty".to_string()),
            success: None,
        }
        .into_response();
    }

    let client_info = ClientInfo {
        name: form.name,
        phone_number: form.phone_number,
        purchase_date: form.purchase_date,
    };
    let request = cart.checkout_request(&client_info);

    match state.backend().checkout(&request).await {
        Ok(()) => {
            clear_cart(&session).await;
            let empty = Cart::default();
            CartShowTemplate {
                cart: CartView::build(&empty, &state),
                lang,
                error: None,
                success: Some("Booking submitted successfully".to_string()),
            }
            .into_response()
        }
        Err(e) => {
            tracing::error!("Checkout submission failed: {e}");
            CartShowTemplate {
                cart: CartView::build(&cart, &state),
                lang,
                error: Some("Checkout failed, please try again".to_string()),
                success: None,
            }
            .into_response()
        }
    }
}
