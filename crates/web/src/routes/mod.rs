//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                   - Home page (catalog navigation)
//! GET  /pricing                            - Signup / upgrade form
//!
//! # Listing pages (cached: public, s-maxage, stale-while-revalidate)
//! GET  /names/{gender}                     - boy | girl | unisex
//! GET  /names/{kind}/{slug}                - origin | letter | syllables | length | characteristic | meaning
//! GET  /names/{kind}/{slug}/{gender}       - Same, narrowed to one gender
//!
//! # Checkout
//! POST /api/checkout                       - {email, mode} -> {url}
//! GET  /checkout/success?session_id=...    - Confirm session, sign the subscriber in
//!
//! # Shortlist (premium)
//! GET    /api/shortlist
//! POST   /api/shortlist
//! DELETE /api/shortlist/{name}
//!
//! # Misc
//! POST /auth/logout
//! GET  /api/test-db                        - Database diagnostic
//! GET  /sitemap.xml
//! GET  /robots.txt
//! ```

pub mod api;
pub mod auth;
pub mod checkout;
pub mod names;
pub mod pages;
pub mod seo;
pub mod shortlist;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::middleware::{api_rate_limiter, checkout_rate_limiter};
use crate::state::AppState;

/// Create the listing routes router.
pub fn name_routes() -> Router<AppState> {
    Router::new()
        .route("/{gender}", get(names::by_gender))
        .route("/{kind}/{slug}", get(names::by_category))
        .route("/{kind}/{slug}/{gender}", get(names::by_category_and_gender))
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    let checkout = Router::new()
        .route("/checkout", post(checkout::create))
        .layer(checkout_rate_limiter());

    Router::new()
        .route("/shortlist", get(shortlist::list).post(shortlist::add))
        .route("/shortlist/{name}", delete(shortlist::remove))
        .route("/test-db", get(api::test_db))
        .layer(api_rate_limiter())
        .merge(checkout)
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/pricing", get(pages::pricing))
        .nest("/names", name_routes())
        .nest("/api", api_routes())
        .route("/checkout/success", get(checkout::success))
        .route("/auth/logout", post(auth::logout))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/robots.txt", get(seo::robots_txt))
        .fallback(pages::fallback)
}
