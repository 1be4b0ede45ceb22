//! Constant catalogs of the URL segments the site publishes pages for.
//!
//! Every catalog is a static slice defined at build time. A page route only
//! queries the store after its slug resolves against one of these slices.
//!
//! | Catalog | Route segment | Entries |
//! |---------|---------------|---------|
//! | [`genders`] | `/names/{gender}` | 3 |
//! | [`origins`] | `/names/origin/{slug}` | 16 (top 10 in the sitemap) |
//! | [`letters`] | `/names/letter/{slug}` | 26 |
//! | [`measures::SYLLABLES`] | `/names/syllables/{slug}` | 4 |
//! | [`measures::LENGTHS`] | `/names/length/{slug}` | 3 |
//! | [`traits::CHARACTERISTICS`] | `/names/characteristic/{slug}` | 14 (top 10) |
//! | [`traits::MEANINGS`] | `/names/meaning/{slug}` | 8 (top 5) |

pub mod genders;
pub mod letters;
pub mod measures;
pub mod origins;
pub mod traits;

pub use genders::{GENDERS, GenderEntry};
pub use letters::{LETTER_COUNT, LETTERS};
pub use measures::{LENGTHS, MeasureEntry, SYLLABLES};
pub use origins::{ORIGINS, TOP_ORIGINS};
pub use traits::{CHARACTERISTICS, MEANINGS, TOP_CHARACTERISTICS, TOP_MEANINGS};

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// URL segment, lowercase ASCII.
    pub slug: &'static str,
    /// Human-readable label ("Irish", "A", "Strong").
    pub label: &'static str,
    /// One-sentence description used in page copy and meta descriptions.
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Anything that wraps a [`CatalogEntry`].
pub trait HasEntry {
    fn entry(&self) -> &CatalogEntry;
}

impl HasEntry for CatalogEntry {
    fn entry(&self) -> &CatalogEntry {
        self
    }
}

/// Find an entry by slug, ignoring ASCII case.
#[must_use]
pub fn find<'a, T: HasEntry>(catalog: &'a [T], slug: &str) -> Option<&'a T> {
    catalog
        .iter()
        .find(|item| item.entry().slug.eq_ignore_ascii_case(slug))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_well_formed<T: HasEntry>(catalog: &[T]) {
        let mut seen = HashSet::new();
        for item in catalog {
            let entry = item.entry();
            assert!(!entry.slug.is_empty());
            assert!(
                entry
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not URL-safe lowercase",
                entry.slug
            );
            assert!(!entry.label.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.slug);
            assert!(seen.insert(entry.slug), "duplicate slug {}", entry.slug);
        }
    }

    #[test]
    fn test_catalogs_are_well_formed() {
        assert_well_formed(&GENDERS);
        assert_well_formed(&ORIGINS);
        assert_well_formed(&LETTERS);
        assert_well_formed(&SYLLABLES);
        assert_well_formed(&LENGTHS);
        assert_well_formed(&CHARACTERISTICS);
        assert_well_formed(&MEANINGS);
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(GENDERS.len(), 3);
        assert_eq!(LETTERS.len(), 26);
        assert_eq!(SYLLABLES.len(), 4);
        assert_eq!(LENGTHS.len(), 3);
        assert!(ORIGINS.len() >= TOP_ORIGINS);
        assert!(CHARACTERISTICS.len() >= TOP_CHARACTERISTICS);
        assert!(MEANINGS.len() >= TOP_MEANINGS);
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find(&ORIGINS, "IRISH").map(|e| e.label), Some("Irish"));
        assert_eq!(find(&LETTERS, "Q").map(|e| e.label), Some("Q"));
        assert!(find(&ORIGINS, "atlantean").is_none());
        assert!(find(&LETTERS, "").is_none());
    }
}
