//! Origin catalog. Ordered by how often visitors browse each origin.

use super::CatalogEntry;

/// Number of origins that get sitemap entries.
pub const TOP_ORIGINS: usize = 10;

pub static ORIGINS: [CatalogEntry; 16] = [
    CatalogEntry {
        slug: "english",
        label: "English",
        description: "Names rooted in Old English and the traditions of the British Isles.",
        keywords: &["english names", "british baby names", "old english names"],
    },
    CatalogEntry {
        slug: "hebrew",
        label: "Hebrew",
        description: "Names from Hebrew scripture and tradition, many with deep spiritual meanings.",
        keywords: &["hebrew names", "biblical names", "jewish baby names"],
    },
    CatalogEntry {
        slug: "greek",
        label: "Greek",
        description: "Names drawn from Greek language, mythology and history.",
        keywords: &["greek names", "mythology names", "ancient greek names"],
    },
    CatalogEntry {
        slug: "latin",
        label: "Latin",
        description: "Names with Latin roots, favored for their classic and elegant sound.",
        keywords: &["latin names", "roman names", "classic baby names"],
    },
    CatalogEntry {
        slug: "irish",
        label: "Irish",
        description: "Gaelic names from Ireland, often tied to saints, legends and the landscape.",
        keywords: &["irish names", "gaelic names", "celtic baby names"],
    },
    CatalogEntry {
        slug: "french",
        label: "French",
        description: "Names from France, known for their soft sounds and romantic style.",
        keywords: &["french names", "french baby names"],
    },
    CatalogEntry {
        slug: "german",
        label: "German",
        description: "Names from Germanic languages, many meaning strength, courage or nobility.",
        keywords: &["german names", "germanic baby names"],
    },
    CatalogEntry {
        slug: "italian",
        label: "Italian",
        description: "Names from Italy, melodic and often ending in a vowel.",
        keywords: &["italian names", "italian baby names"],
    },
    CatalogEntry {
        slug: "spanish",
        label: "Spanish",
        description: "Names from Spain and the Spanish-speaking world.",
        keywords: &["spanish names", "latino baby names", "hispanic names"],
    },
    CatalogEntry {
        slug: "arabic",
        label: "Arabic",
        description: "Names from Arabic, frequently expressing virtues and faith.",
        keywords: &["arabic names", "muslim baby names"],
    },
    CatalogEntry {
        slug: "scottish",
        label: "Scottish",
        description: "Names from the Highlands, Lowlands and Scots Gaelic.",
        keywords: &["scottish names", "scots gaelic names"],
    },
    CatalogEntry {
        slug: "welsh",
        label: "Welsh",
        description: "Names from Wales and the Welsh language.",
        keywords: &["welsh names", "cymraeg baby names"],
    },
    CatalogEntry {
        slug: "norse",
        label: "Norse",
        description: "Names from Old Norse and Scandinavian sagas.",
        keywords: &["norse names", "viking names", "scandinavian baby names"],
    },
    CatalogEntry {
        slug: "japanese",
        label: "Japanese",
        description: "Names from Japan, often built from kanji with nature-inspired meanings.",
        keywords: &["japanese names", "japanese baby names"],
    },
    CatalogEntry {
        slug: "sanskrit",
        label: "Sanskrit",
        description: "Names from Sanskrit, common across India and South Asia.",
        keywords: &["sanskrit names", "indian baby names", "hindu names"],
    },
    CatalogEntry {
        slug: "african",
        label: "African",
        description: "Names from the many languages of the African continent.",
        keywords: &["african names", "african baby names", "swahili names", "yoruba names"],
    },
];
