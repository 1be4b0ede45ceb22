//! Listing page resolution.
//!
//! A route is resolved against the catalogs first. Only a resolved page
//! reaches the store, with exactly one query.

use namenest_core::catalog::GENDERS;
use namenest_core::seo::{FaqItem, ListingKind, ListingPage, PageMeta, faq, structured_data};
use namenest_core::NameRecord;

use crate::db::NameStore;

/// The URL segments of a listing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingRoute<'a> {
    /// `/names/{gender}`
    Gender(&'a str),
    /// `/names/{kind}/{slug}[/{gender}]`
    Category {
        kind: ListingKind,
        slug: &'a str,
        gender: Option<&'a str>,
    },
}

impl ListingRoute<'_> {
    #[must_use]
    pub fn resolve(&self) -> Option<ListingPage> {
        match *self {
            Self::Gender(slug) => ListingPage::for_gender(slug),
            Self::Category { kind, slug, gender } => ListingPage::resolve(kind, slug, gender),
        }
    }
}

/// Link to a sibling page in the gender switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantLink {
    pub label: String,
    pub path: String,
    pub active: bool,
}

/// Everything a listing template needs.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub page: ListingPage,
    pub meta: PageMeta,
    pub names: Vec<NameRecord>,
    pub faq: Vec<FaqItem>,
    /// JSON-LD array, escaped for a `<script>` element.
    pub structured_data: String,
    pub variants: Vec<VariantLink>,
}

/// Loads listing pages from a [`NameStore`].
pub struct ListingService<'a, S> {
    store: &'a S,
    base_url: &'a str,
}

impl<'a, S: NameStore> ListingService<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S, base_url: &'a str) -> Self {
        Self { store, base_url }
    }

    /// Resolve and load a page. `None` means the route names an unknown
    /// slug or gender; the store is not queried in that case.
    ///
    /// A store failure is logged and rendered as an empty result set.
    pub async fn load(&self, route: &ListingRoute<'_>) -> Option<ListingView> {
        let page = route.resolve()?;

        let names = match self.store.search(&page.query()).await {
            Ok(names) => names,
            Err(e) => {
                tracing::error!(error = %e, path = %page.path(), "Failed to load names");
                Vec::new()
            }
        };

        Some(self.build(page, names))
    }

    fn build(&self, page: ListingPage, names: Vec<NameRecord>) -> ListingView {
        let meta = PageMeta::for_listing(&page);
        let faq = faq::for_listing(&page, &names);
        let structured_data = structured_data::to_script_json(&structured_data::for_listing(
            &meta,
            &names,
            &faq,
            self.base_url,
        ));

        ListingView {
            variants: variant_links(&page),
            page,
            meta,
            names,
            faq,
            structured_data,
        }
    }
}

/// Gender switcher links: the three gender pages from a gender page, otherwise
/// "All" plus one link per gender.
fn variant_links(page: &ListingPage) -> Vec<VariantLink> {
    let current = page.path();
    let siblings: Vec<(String, String)> = if page.category.kind().is_none() {
        GENDERS
            .iter()
            .filter_map(|g| ListingPage::for_gender(g.entry.slug))
            .map(|p| (p.title(), p.path()))
            .collect()
    } else {
        page.variants()
            .into_iter()
            .map(|p| {
                let label = p.gender.map_or("All", |g| g.label());
                (label.to_owned(), p.path())
            })
            .collect()
    };

    siblings
        .into_iter()
        .map(|(label, path)| VariantLink {
            active: path == current,
            label,
            path,
        })
        .collect()
}
