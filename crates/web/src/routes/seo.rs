//! `sitemap.xml` and `robots.txt`.

use askama::Template;
use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use tracing::instrument;

use namenest_core::sitemap::{self, SitemapEntry};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate {
    pub entries: Vec<SitemapEntry>,
}

/// `GET /sitemap.xml`
///
/// # Errors
///
/// Returns 500 if the template fails to render.
#[instrument(skip(state))]
pub async fn sitemap_xml(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let today = chrono::Utc::now().date_naive();
    let entries = sitemap::entries(&state.config().base_url, today);

    let body = SitemapTemplate { entries }
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render sitemap: {e}")))?;

    Ok(([(CONTENT_TYPE, "application/xml; charset=utf-8")], body))
}

/// Contents of `robots.txt`.
#[must_use]
pub fn robots_body(base_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /api/\n\
         Disallow: /checkout/\n\
         \n\
         Sitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

/// `GET /robots.txt`
#[instrument(skip(state))]
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_body(&state.config().base_url),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_robots_body() {
        let body = robots_body("https://namenest.app/");
        assert!(body.starts_with("User-agent: *\n"));
        assert!(body.contains("Disallow: /api/\n"));
        assert!(body.ends_with("Sitemap: https://namenest.app/sitemap.xml\n"));
    }

    #[test]
    fn test_sitemap_renders_every_entry() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let entries = sitemap::entries("https://namenest.app", date);
        let xml = SitemapTemplate { entries }.render().unwrap();

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), sitemap::ENTRY_COUNT);
        assert!(xml.contains("<loc>https://namenest.app/names/origin/irish/girl</loc>"));
        assert!(xml.contains("<lastmod>2026-01-15</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
    }
}
