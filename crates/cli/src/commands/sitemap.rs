//! Render `sitemap.xml` offline, with the same template the server uses.

use std::path::Path;

use askama::Template;
use thiserror::Error;

use namenest_core::sitemap;
use namenest_web::routes::seo::SitemapTemplate;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Failed to render sitemap: {0}")]
    Render(#[from] askama::Error),

    #[error("Failed to write sitemap: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the sitemap for `base_url` dated today.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(base_url: &str) -> Result<String, SitemapError> {
    let today = chrono::Utc::now().date_naive();
    let entries = sitemap::entries(base_url.trim_end_matches('/'), today);
    Ok(SitemapTemplate { entries }.render()?)
}

/// Write the sitemap to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub async fn write(base_url: &str, output: Option<&Path>) -> Result<(), SitemapError> {
    let xml = render(base_url)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &xml).await?;
            tracing::info!(
                path = %path.display(),
                entries = sitemap::ENTRY_COUNT,
                "Sitemap written"
            );
        }
        None => {
            #[allow(clippy::print_stdout)]
            {
                println!("{xml}");
            }
        }
    }
    Ok(())
}
