//! Listing pages: one catalog entry, optionally narrowed to a gender.

use crate::catalog::{
    self, CHARACTERISTICS, CatalogEntry, GENDERS, GenderEntry, LENGTHS, LETTERS, MEANINGS,
    MeasureEntry, ORIGINS, SYLLABLES,
};
use crate::types::{Gender, NameQuery};

/// Route family under `/names/{kind}/{slug}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Origin,
    Letter,
    Syllables,
    Length,
    Characteristic,
    Meaning,
}

impl ListingKind {
    pub const ALL: [Self; 6] = [
        Self::Origin,
        Self::Letter,
        Self::Syllables,
        Self::Length,
        Self::Characteristic,
        Self::Meaning,
    ];

    /// Parse the `{kind}` segment of `/names/{kind}/{slug}`. Exact match only.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path_segment() == segment)
    }

    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Letter => "letter",
            Self::Syllables => "syllables",
            Self::Length => "length",
            Self::Characteristic => "characteristic",
            Self::Meaning => "meaning",
        }
    }
}

/// The catalog entry a listing page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Gender(&'static GenderEntry),
    Origin(&'static CatalogEntry),
    Letter(&'static CatalogEntry),
    Syllables(&'static MeasureEntry),
    Length(&'static MeasureEntry),
    Characteristic(&'static CatalogEntry),
    Meaning(&'static CatalogEntry),
}

impl Category {
    #[must_use]
    pub const fn entry(&self) -> &'static CatalogEntry {
        match *self {
            Self::Gender(g) => &g.entry,
            Self::Syllables(m) | Self::Length(m) => &m.entry,
            Self::Origin(e) | Self::Letter(e) | Self::Characteristic(e) | Self::Meaning(e) => e,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Option<ListingKind> {
        match self {
            Self::Gender(_) => None,
            Self::Origin(_) => Some(ListingKind::Origin),
            Self::Letter(_) => Some(ListingKind::Letter),
            Self::Syllables(_) => Some(ListingKind::Syllables),
            Self::Length(_) => Some(ListingKind::Length),
            Self::Characteristic(_) => Some(ListingKind::Characteristic),
            Self::Meaning(_) => Some(ListingKind::Meaning),
        }
    }
}

/// A resolved listing page.
///
/// Construction only succeeds for slugs present in the catalogs, so holding a
/// `ListingPage` means the route is valid and a store query may be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPage {
    pub category: Category,
    /// Gender narrowing; always `None` for gender pages themselves.
    pub gender: Option<Gender>,
}

impl ListingPage {
    /// Resolve `/names/{gender}`.
    #[must_use]
    pub fn for_gender(slug: &str) -> Option<Self> {
        catalog::find(&GENDERS, slug).map(|entry| Self {
            category: Category::Gender(entry),
            gender: None,
        })
    }

    /// Resolve `/names/{kind}/{slug}[/{gender}]`.
    ///
    /// Returns `None` when the slug is not in the catalog or the gender
    /// segment is present but unknown.
    #[must_use]
    pub fn resolve(kind: ListingKind, slug: &str, gender: Option<&str>) -> Option<Self> {
        let gender = match gender {
            Some(segment) => Some(Gender::from_slug(segment)?),
            None => None,
        };

        let category = match kind {
            ListingKind::Origin => Category::Origin(catalog::find(&ORIGINS, slug)?),
            ListingKind::Letter => Category::Letter(catalog::find(&LETTERS, slug)?),
            ListingKind::Syllables => Category::Syllables(catalog::find(&SYLLABLES, slug)?),
            ListingKind::Length => Category::Length(catalog::find(&LENGTHS, slug)?),
            ListingKind::Characteristic => {
                Category::Characteristic(catalog::find(&CHARACTERISTICS, slug)?)
            }
            ListingKind::Meaning => Category::Meaning(catalog::find(&MEANINGS, slug)?),
        };

        Some(Self { category, gender })
    }

    /// Build a page directly from a catalog category.
    #[must_use]
    pub const fn new(category: Category, gender: Option<Gender>) -> Self {
        let gender = match category {
            Category::Gender(_) => None,
            _ => gender,
        };
        Self { category, gender }
    }

    #[must_use]
    pub const fn entry(&self) -> &'static CatalogEntry {
        self.category.entry()
    }

    /// Gender the results are restricted to, from either the page itself or
    /// the gender segment.
    #[must_use]
    pub const fn effective_gender(&self) -> Option<Gender> {
        match self.category {
            Category::Gender(entry) => Some(entry.gender),
            _ => self.gender,
        }
    }

    /// The store filter this page renders.
    #[must_use]
    pub fn query(&self) -> NameQuery {
        let query = NameQuery::new().gender(self.effective_gender());
        match self.category {
            Category::Gender(_) => query,
            Category::Origin(e) => query.origin(e.label),
            Category::Letter(e) => query.starts_with(e.label),
            Category::Syllables(m) => query.syllables(m.range),
            Category::Length(m) => query.length(m.range),
            Category::Characteristic(e) => query.characteristic(e.slug),
            Category::Meaning(e) => query.meaning_contains(e.slug),
        }
    }

    /// Page title, e.g. "Irish Boy Names" or "Girl Names Starting with A".
    #[must_use]
    pub fn title(&self) -> String {
        let entry = self.entry();
        let names = self
            .gender
            .map_or_else(|| "Names".to_owned(), |g| format!("{} Names", g.label()));

        match self.category {
            Category::Gender(_) => format!("{} Names", entry.label),
            Category::Origin(_)
            | Category::Syllables(_)
            | Category::Length(_)
            | Category::Characteristic(_) => format!("{} {names}", entry.label),
            Category::Letter(_) => format!("{names} Starting with {}", entry.label),
            Category::Meaning(_) => format!("{names} That Mean {}", entry.label),
        }
    }

    /// Meta description.
    #[must_use]
    pub fn description(&self) -> String {
        let title = self.title();
        let entry = self.entry();
        match self.gender {
            Some(g) => format!(
                "{title} ranked by popularity. {} Showing {} names only.",
                entry.description,
                g.label().to_lowercase()
            ),
            None => format!("{title} ranked by popularity. {}", entry.description),
        }
    }

    /// Canonical path.
    #[must_use]
    pub fn path(&self) -> String {
        let entry = self.entry();
        let base = match self.category.kind() {
            Some(kind) => format!("/names/{}/{}", kind.path_segment(), entry.slug),
            None => format!("/names/{}", entry.slug),
        };
        match self.gender {
            Some(g) => format!("{base}/{}", g.slug()),
            None => base,
        }
    }

    /// The gender-less page this one narrows, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<Self> {
        match self.gender {
            Some(_) => Some(Self {
                category: self.category,
                gender: None,
            }),
            None => None,
        }
    }

    /// The base page followed by one page per gender. Empty for gender pages.
    #[must_use]
    pub fn variants(&self) -> Vec<Self> {
        if matches!(self.category, Category::Gender(_)) {
            return Vec::new();
        }
        std::iter::once(None)
            .chain(Gender::ALL.into_iter().map(Some))
            .map(|gender| Self {
                category: self.category,
                gender,
            })
            .collect()
    }
}
