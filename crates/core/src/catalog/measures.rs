//! Syllable-count and name-length buckets.

use super::{CatalogEntry, HasEntry};
use crate::types::CountRange;

/// Catalog entry backed by a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureEntry {
    pub range: CountRange,
    pub entry: CatalogEntry,
}

impl HasEntry for MeasureEntry {
    fn entry(&self) -> &CatalogEntry {
        &self.entry
    }
}

/// Syllables are approximated as vowel groups (`a`, `e`, `i`, `o`, `u`, `y`).
pub static SYLLABLES: [MeasureEntry; 4] = [
    MeasureEntry {
        range: CountRange::exactly(1),
        entry: CatalogEntry {
            slug: "one",
            label: "One-Syllable",
            description: "Short, punchy one-syllable names that pair well with longer surnames.",
            keywords: &["one syllable names", "single syllable baby names"],
        },
    },
    MeasureEntry {
        range: CountRange::exactly(2),
        entry: CatalogEntry {
            slug: "two",
            label: "Two-Syllable",
            description: "Balanced two-syllable names, the most common rhythm for first names.",
            keywords: &["two syllable names", "2 syllable baby names"],
        },
    },
    MeasureEntry {
        range: CountRange::exactly(3),
        entry: CatalogEntry {
            slug: "three",
            label: "Three-Syllable",
            description: "Flowing three-syllable names with a lyrical sound.",
            keywords: &["three syllable names", "3 syllable baby names"],
        },
    },
    MeasureEntry {
        range: CountRange::at_least(4),
        entry: CatalogEntry {
            slug: "four-plus",
            label: "Four-Plus-Syllable",
            description: "Elaborate names of four or more syllables, often shortened to a nickname.",
            keywords: &["long names", "four syllable names", "elaborate baby names"],
        },
    },
];

/// Length buckets by character count.
pub static LENGTHS: [MeasureEntry; 3] = [
    MeasureEntry {
        range: CountRange::between(1, 4),
        entry: CatalogEntry {
            slug: "short",
            label: "Short",
            description: "Names of four letters or fewer, easy to spell and hard to shorten.",
            keywords: &["short names", "short baby names", "4 letter names"],
        },
    },
    MeasureEntry {
        range: CountRange::between(5, 6),
        entry: CatalogEntry {
            slug: "medium",
            label: "Medium-Length",
            description: "Names of five or six letters, the sweet spot for most parents.",
            keywords: &["medium length names", "5 letter names", "6 letter names"],
        },
    },
    MeasureEntry {
        range: CountRange::at_least(7),
        entry: CatalogEntry {
            slug: "long",
            label: "Long",
            description: "Names of seven letters or more with plenty of nickname options.",
            keywords: &["long names", "long baby names", "names with nicknames"],
        },
    },
];
