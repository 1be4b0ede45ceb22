//! Listing page handlers under `/names`.
//!
//! Every segment is checked against the catalogs before the store is
//! touched; unknown kinds, slugs or genders render the 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderValue, header::CACHE_CONTROL},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use namenest_core::NameRecord;
use namenest_core::seo::{FaqItem, ListingKind, PageMeta};

use crate::db::NameStore;
use crate::filters;
use crate::routes::pages::not_found_page;
use crate::services::listing::{ListingRoute, ListingService, ListingView, VariantLink};
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "names/listing.html")]
pub struct ListingTemplate {
    pub meta: PageMeta,
    pub canonical_url: String,
    pub intro: &'static str,
    pub names: Vec<NameRecord>,
    pub faq: Vec<FaqItem>,
    pub structured_data: String,
    pub variants: Vec<VariantLink>,
}

impl ListingTemplate {
    fn from_view(view: ListingView, base_url: &str) -> Self {
        Self {
            canonical_url: view.meta.canonical_url(base_url),
            intro: view.page.entry().description,
            meta: view.meta,
            names: view.names,
            faq: view.faq,
            structured_data: view.structured_data,
            variants: view.variants,
        }
    }
}

/// `Cache-Control` for listing pages: shared caches keep a page for
/// `revalidate_seconds` and may serve it stale while refetching.
#[must_use]
pub fn listing_cache_control(revalidate_seconds: u64) -> String {
    format!("public, s-maxage={revalidate_seconds}, stale-while-revalidate")
}

/// Load and render one listing page, or the 404 page when the route does
/// not resolve.
async fn render<S: NameStore>(
    store: &S,
    base_url: &str,
    revalidate_seconds: u64,
    route: ListingRoute<'_>,
) -> Response {
    let service = ListingService::new(store, base_url);

    let Some(view) = service.load(&route).await else {
        return not_found_page(base_url);
    };

    let mut response = ListingTemplate::from_view(view, base_url).into_response();
    if let Ok(value) = HeaderValue::from_str(&listing_cache_control(revalidate_seconds)) {
        response.headers_mut().insert(CACHE_CONTROL, value);
    }
    response
}

/// `GET /names/{gender}`
#[instrument(skip(state))]
pub async fn by_gender(State(state): State<AppState>, Path(gender): Path<String>) -> Response {
    let config = state.config();
    render(
        &state.names(),
        &config.base_url,
        config.revalidate_seconds,
        ListingRoute::Gender(&gender),
    )
    .await
}

/// `GET /names/{kind}/{slug}`
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path((kind, slug)): Path<(String, String)>,
) -> Response {
    let config = state.config();
    category(&state.names(), &config.base_url, config.revalidate_seconds, &kind, &slug, None).await
}

/// `GET /names/{kind}/{slug}/{gender}`
#[instrument(skip(state))]
pub async fn by_category_and_gender(
    State(state): State<AppState>,
    Path((kind, slug, gender)): Path<(String, String, String)>,
) -> Response {
    let config = state.config();
    category(
        &state.names(),
        &config.base_url,
        config.revalidate_seconds,
        &kind,
        &slug,
        Some(&gender),
    )
    .await
}

async fn category<S: NameStore>(
    store: &S,
    base_url: &str,
    revalidate_seconds: u64,
    kind: &str,
    slug: &str,
    gender: Option<&str>,
) -> Response {
    let Some(kind) = ListingKind::from_segment(kind) else {
        return not_found_page(base_url);
    };
    render(
        store,
        base_url,
        revalidate_seconds,
        ListingRoute::Category { kind, slug, gender },
    )
    .await
}
