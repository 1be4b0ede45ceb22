//! Page metadata: titles, descriptions, canonical paths and breadcrumbs.

use serde::Serialize;

use super::listing::ListingPage;

/// Site name appended to document titles.
pub const SITE_NAME: &str = "NameNest";

/// One step in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

impl Breadcrumb {
    fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Metadata for a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Page heading; also the final breadcrumb.
    pub title: String,
    pub description: String,
    /// Canonical path, absolute from the site root.
    pub path: String,
    pub keywords: Vec<String>,
    /// Trail from the home page to this page, inclusive.
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl PageMeta {
    /// Metadata for a listing page.
    #[must_use]
    pub fn for_listing(page: &ListingPage) -> Self {
        let title = page.title();
        let path = page.path();

        let mut breadcrumbs = vec![Breadcrumb::new("Home", "/")];
        if let Some(parent) = page.parent() {
            breadcrumbs.push(Breadcrumb::new(parent.title(), parent.path()));
        }
        breadcrumbs.push(Breadcrumb::new(title.clone(), path.clone()));

        let mut keywords: Vec<String> = page
            .entry()
            .keywords
            .iter()
            .map(|k| (*k).to_owned())
            .collect();
        if page.gender.is_some() {
            keywords.push(title.to_lowercase());
        }

        Self {
            title,
            description: page.description(),
            path,
            keywords,
            breadcrumbs,
        }
    }

    /// Metadata for a fixed page outside the catalogs (home, pricing).
    #[must_use]
    pub fn simple(title: &str, description: &str, path: &str) -> Self {
        let mut breadcrumbs = vec![Breadcrumb::new("Home", "/")];
        if path != "/" {
            breadcrumbs.push(Breadcrumb::new(title, path));
        }
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            path: path.to_owned(),
            keywords: Vec::new(),
            breadcrumbs,
        }
    }

    /// Contents of the `<title>` element.
    #[must_use]
    pub fn document_title(&self) -> String {
        format!("{} | {SITE_NAME}", self.title)
    }

    /// Comma-separated keywords for the `keywords` meta tag.
    #[must_use]
    pub fn keywords_csv(&self) -> String {
        self.keywords.join(", ")
    }

    /// Absolute canonical URL.
    #[must_use]
    pub fn canonical_url(&self, base_url: &str) -> String {
        absolute_url(base_url, &self.path)
    }
}

/// Join a base URL and a root-relative path without doubling slashes.
#[must_use]
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path == "/" {
        return format!("{base}/");
    }
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seo::listing::ListingKind;

    #[test]
    fn test_breadcrumbs_end_with_title() {
        let page = ListingPage::resolve(ListingKind::Origin, "irish", Some("boy")).unwrap();
        let meta = PageMeta::for_listing(&page);

        let names: Vec<&str> = meta.breadcrumbs.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Home", "Irish Names", "Irish Boy Names"]);
        assert_eq!(meta.breadcrumbs.last().unwrap().path, meta.path);
        assert!(meta.keywords.contains(&"irish boy names".to_owned()));
    }

    #[test]
    fn test_base_page_breadcrumbs() {
        let page = ListingPage::resolve(ListingKind::Letter, "m", None).unwrap();
        let meta = PageMeta::for_listing(&page);
        assert_eq!(meta.breadcrumbs.len(), 2);
        assert_eq!(meta.document_title(), "Names Starting with M | NameNest");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("https://namenest.app/", "/"), "https://namenest.app/");
        assert_eq!(
            absolute_url("https://namenest.app", "/names/boy"),
            "https://namenest.app/names/boy"
        );
        assert_eq!(
            absolute_url("https://namenest.app/", "/names/boy"),
            "https://namenest.app/names/boy"
        );
    }

    #[test]
    fn test_simple_page() {
        let meta = PageMeta::simple("Pricing", "Plans", "/pricing");
        assert_eq!(meta.breadcrumbs.last().unwrap().name, "Pricing");
        let home = PageMeta::simple("Home", "Welcome", "/");
        assert_eq!(home.breadcrumbs.len(), 1);
    }
}
