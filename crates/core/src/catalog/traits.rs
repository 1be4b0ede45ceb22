//! Characteristic and meaning catalogs.
//!
//! Characteristic slugs are matched against the `characteristics` list of a
//! name; meaning slugs are matched as a substring of its `meaning`.

use super::CatalogEntry;

/// Number of characteristics that get sitemap entries.
pub const TOP_CHARACTERISTICS: usize = 10;

/// Number of meanings that get sitemap entries.
pub const TOP_MEANINGS: usize = 5;

pub static CHARACTERISTICS: [CatalogEntry; 14] = [
    CatalogEntry {
        slug: "strong",
        label: "Strong",
        description: "Names that carry a sense of strength and resilience.",
        keywords: &["strong names", "powerful baby names"],
    },
    CatalogEntry {
        slug: "gentle",
        label: "Gentle",
        description: "Soft-sounding names with tender, gentle meanings.",
        keywords: &["gentle names", "soft baby names"],
    },
    CatalogEntry {
        slug: "wise",
        label: "Wise",
        description: "Names associated with wisdom, knowledge and insight.",
        keywords: &["names meaning wise", "wisdom names"],
    },
    CatalogEntry {
        slug: "brave",
        label: "Brave",
        description: "Names for little ones with courage and a bold spirit.",
        keywords: &["brave names", "names meaning courage"],
    },
    CatalogEntry {
        slug: "joyful",
        label: "Joyful",
        description: "Cheerful names associated with happiness and delight.",
        keywords: &["happy names", "names meaning joy"],
    },
    CatalogEntry {
        slug: "noble",
        label: "Noble",
        description: "Names with aristocratic or royal associations.",
        keywords: &["noble names", "royal baby names"],
    },
    CatalogEntry {
        slug: "creative",
        label: "Creative",
        description: "Artistic names for imaginative spirits.",
        keywords: &["creative names", "artistic baby names"],
    },
    CatalogEntry {
        slug: "peaceful",
        label: "Peaceful",
        description: "Calm names associated with peace and serenity.",
        keywords: &["peaceful names", "names meaning peace"],
    },
    CatalogEntry {
        slug: "loving",
        label: "Loving",
        description: "Warm names associated with love and affection.",
        keywords: &["loving names", "names meaning beloved"],
    },
    CatalogEntry {
        slug: "bright",
        label: "Bright",
        description: "Radiant names associated with intelligence and light.",
        keywords: &["bright names", "clever baby names"],
    },
    CatalogEntry {
        slug: "spiritual",
        label: "Spiritual",
        description: "Names with religious or spiritual significance.",
        keywords: &["spiritual names", "religious baby names"],
    },
    CatalogEntry {
        slug: "adventurous",
        label: "Adventurous",
        description: "Names for explorers and free spirits.",
        keywords: &["adventurous names", "explorer names"],
    },
    CatalogEntry {
        slug: "elegant",
        label: "Elegant",
        description: "Refined, graceful names with timeless style.",
        keywords: &["elegant names", "sophisticated baby names"],
    },
    CatalogEntry {
        slug: "playful",
        label: "Playful",
        description: "Fun, spirited names with a lighthearted feel.",
        keywords: &["playful names", "cute baby names"],
    },
];

pub static MEANINGS: [CatalogEntry; 8] = [
    CatalogEntry {
        slug: "light",
        label: "Light",
        description: "Names whose meanings involve light, sunshine or radiance.",
        keywords: &["names meaning light", "names that mean sunshine"],
    },
    CatalogEntry {
        slug: "love",
        label: "Love",
        description: "Names whose meanings involve love and being beloved.",
        keywords: &["names meaning love", "names that mean beloved"],
    },
    CatalogEntry {
        slug: "strength",
        label: "Strength",
        description: "Names whose meanings involve strength and power.",
        keywords: &["names meaning strength", "names that mean strong"],
    },
    CatalogEntry {
        slug: "nature",
        label: "Nature",
        description: "Names whose meanings come from the natural world.",
        keywords: &["nature names", "names meaning nature"],
    },
    CatalogEntry {
        slug: "grace",
        label: "Grace",
        description: "Names whose meanings involve grace and favor.",
        keywords: &["names meaning grace", "graceful names"],
    },
    CatalogEntry {
        slug: "peace",
        label: "Peace",
        description: "Names whose meanings involve peace and calm.",
        keywords: &["names meaning peace"],
    },
    CatalogEntry {
        slug: "gift",
        label: "Gift",
        description: "Names whose meanings involve a gift or blessing.",
        keywords: &["names meaning gift", "names meaning blessing"],
    },
    CatalogEntry {
        slug: "star",
        label: "Star",
        description: "Names whose meanings involve stars and the heavens.",
        keywords: &["names meaning star", "celestial names"],
    },
];
