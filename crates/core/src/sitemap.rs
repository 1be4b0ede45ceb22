//! Sitemap generation.
//!
//! The sitemap covers a bounded set of pages: the core pages plus a
//! cartesian expansion of the top-N catalog entries over the gender
//! variants (base page + one per gender).

use chrono::NaiveDate;

use crate::catalog::{
    CHARACTERISTICS, LETTER_COUNT, LETTERS, MEANINGS, ORIGINS, TOP_CHARACTERISTICS, TOP_MEANINGS,
    TOP_ORIGINS,
};
use crate::seo::{Category, ListingPage, absolute_url};

/// `<changefreq>` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    /// Between 0.0 and 1.0.
    pub priority: f32,
}

impl SitemapEntry {
    /// Priority formatted with one decimal place.
    #[must_use]
    pub fn priority_str(&self) -> String {
        format!("{:.1}", self.priority)
    }
}

/// Pages that are always listed.
pub const CORE_PAGES: [(&str, ChangeFrequency, f32); 5] = [
    ("/", ChangeFrequency::Daily, 1.0),
    ("/pricing", ChangeFrequency::Monthly, 0.8),
    ("/names/boy", ChangeFrequency::Daily, 0.9),
    ("/names/girl", ChangeFrequency::Daily, 0.9),
    ("/names/unisex", ChangeFrequency::Daily, 0.9),
];

/// Number of entries [`entries`] returns.
pub const ENTRY_COUNT: usize =
    CORE_PAGES.len() + (TOP_ORIGINS + TOP_CHARACTERISTICS + TOP_MEANINGS) * 4 + LETTER_COUNT;

/// Build every sitemap entry.
#[must_use]
pub fn entries(base_url: &str, last_modified: NaiveDate) -> Vec<SitemapEntry> {
    let entry = |path: &str, change_frequency, priority| SitemapEntry {
        loc: absolute_url(base_url, path),
        last_modified,
        change_frequency,
        priority,
    };

    let mut out: Vec<SitemapEntry> = CORE_PAGES
        .iter()
        .map(|&(path, freq, priority)| entry(path, freq, priority))
        .collect();

    let expanded = ORIGINS
        .iter()
        .take(TOP_ORIGINS)
        .map(Category::Origin)
        .chain(
            CHARACTERISTICS
                .iter()
                .take(TOP_CHARACTERISTICS)
                .map(Category::Characteristic),
        )
        .chain(MEANINGS.iter().take(TOP_MEANINGS).map(Category::Meaning));

    for category in expanded {
        for page in ListingPage::new(category, None).variants() {
            let priority = if page.gender.is_some() { 0.6 } else { 0.7 };
            out.push(entry(&page.path(), ChangeFrequency::Weekly, priority));
        }
    }

    for letter in &LETTERS {
        let page = ListingPage::new(Category::Letter(letter), None);
        out.push(entry(&page.path(), ChangeFrequency::Weekly, 0.6));
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_entry_count_is_stable() {
        let first = entries("https://namenest.app", date());
        let second = entries("https://namenest.app", date());
        assert_eq!(first.len(), ENTRY_COUNT);
        assert_eq!(first.len(), 5 + 10 * 4 + 10 * 4 + 5 * 4 + 26);
        assert_eq!(first, second);
    }

    #[test]
    fn test_locations_are_unique_and_absolute() {
        let all = entries("https://namenest.app/", date());
        let unique: HashSet<&str> = all.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(unique.len(), all.len());
        assert!(all.iter().all(|e| e.loc.starts_with("https://namenest.app/")));
        assert!(!all.iter().any(|e| e.loc.contains("app//")));
    }

    #[test]
    fn test_expansion_contents() {
        let all = entries("https://namenest.app", date());
        let locs: Vec<&str> = all.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(locs[0], "https://namenest.app/");
        assert!(locs.contains(&"https://namenest.app/names/origin/english/girl"));
        assert!(locs.contains(&"https://namenest.app/names/characteristic/strong/unisex"));
        assert!(locs.contains(&"https://namenest.app/names/meaning/grace/boy"));
        assert!(locs.contains(&"https://namenest.app/names/letter/z"));
        // Outside the top-N sets.
        assert!(!locs.contains(&"https://namenest.app/names/origin/african"));
        assert!(!locs.contains(&"https://namenest.app/names/meaning/star"));
    }

    #[test]
    fn test_priority_formatting() {
        let all = entries("https://namenest.app", date());
        assert_eq!(all[0].priority_str(), "1.0");
        assert_eq!(all[0].change_frequency.as_str(), "daily");
        assert_eq!(all.last().unwrap().priority_str(), "0.6");
    }
}
