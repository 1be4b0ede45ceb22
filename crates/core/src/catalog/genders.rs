//! Gender catalog.

use super::{CatalogEntry, HasEntry};
use crate::types::Gender;

/// A gender page entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderEntry {
    pub gender: Gender,
    pub entry: CatalogEntry,
}

impl HasEntry for GenderEntry {
    fn entry(&self) -> &CatalogEntry {
        &self.entry
    }
}

pub static GENDERS: [GenderEntry; 3] = [
    GenderEntry {
        gender: Gender::Male,
        entry: CatalogEntry {
            slug: "boy",
            label: "Boy",
            description: "Classic, modern and rare boy names ranked by popularity, each with its origin and meaning.",
            keywords: &["boy names", "baby boy names", "popular boy names", "unique boy names"],
        },
    },
    GenderEntry {
        gender: Gender::Female,
        entry: CatalogEntry {
            slug: "girl",
            label: "Girl",
            description: "Timeless, trendy and uncommon girl names ranked by popularity, each with its origin and meaning.",
            keywords: &["girl names", "baby girl names", "popular girl names", "unique girl names"],
        },
    },
    GenderEntry {
        gender: Gender::Unisex,
        entry: CatalogEntry {
            slug: "unisex",
            label: "Unisex",
            description: "Gender-neutral names that work for any child, ranked by popularity with origins and meanings.",
            keywords: &["unisex names", "gender neutral names", "unisex baby names"],
        },
    },
];

/// Catalog entry for a gender.
#[must_use]
pub fn for_gender(gender: Gender) -> &'static GenderEntry {
    match gender {
        Gender::Male => &GENDERS[0],
        Gender::Female => &GENDERS[1],
        Gender::Unisex => &GENDERS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_match_gender_slugs() {
        for gender in Gender::ALL {
            let entry = for_gender(gender);
            assert_eq!(entry.gender, gender);
            assert_eq!(entry.entry.slug, gender.slug());
        }
    }
}
