//! Name records and the filters used to look them up.

use serde::{Deserialize, Serialize};

use super::gender::Gender;

/// A baby name as stored in the reference data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub gender: Gender,
    pub origin: String,
    pub meaning: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
    pub popularity_score: i32,
}

/// Inclusive range with an optional upper bound ("4+ syllables").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountRange {
    pub min: u8,
    pub max: Option<u8>,
}

impl CountRange {
    #[must_use]
    pub const fn exactly(n: u8) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    #[must_use]
    pub const fn between(min: u8, max: u8) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    #[must_use]
    pub const fn at_least(min: u8) -> Self {
        Self { min, max: None }
    }

    /// Whether `n` falls inside the range.
    #[must_use]
    pub fn contains(self, n: usize) -> bool {
        n >= usize::from(self.min) && self.max.is_none_or(|max| n <= usize::from(max))
    }
}

/// Filter for a single read against the `names` relation.
///
/// Every populated field narrows the result set. Results are always ordered
/// by descending popularity and capped at [`NameQuery::limit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    /// Exact gender match.
    pub gender: Option<Gender>,
    /// Case-insensitive origin match.
    pub origin: Option<String>,
    /// Case-insensitive name prefix.
    pub starts_with: Option<String>,
    /// Number of vowel groups in the name.
    pub syllables: Option<CountRange>,
    /// Character count of the name.
    pub length: Option<CountRange>,
    /// Case-insensitive membership in the characteristics list.
    pub characteristic: Option<String>,
    /// Case-insensitive substring of the meaning.
    pub meaning_contains: Option<String>,
    pub limit: u32,
}

impl NameQuery {
    /// Maximum number of names shown on a listing page.
    pub const MAX_RESULTS: u32 = 100;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            gender: None,
            origin: None,
            starts_with: None,
            syllables: None,
            length: None,
            characteristic: None,
            meaning_contains: None,
            limit: Self::MAX_RESULTS,
        }
    }

    #[must_use]
    pub const fn gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    #[must_use]
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    #[must_use]
    pub const fn syllables(mut self, range: CountRange) -> Self {
        self.syllables = Some(range);
        self
    }

    #[must_use]
    pub const fn length(mut self, range: CountRange) -> Self {
        self.length = Some(range);
        self
    }

    #[must_use]
    pub fn characteristic(mut self, characteristic: impl Into<String>) -> Self {
        self.characteristic = Some(characteristic.into());
        self
    }

    #[must_use]
    pub fn meaning_contains(mut self, fragment: impl Into<String>) -> Self {
        self.meaning_contains = Some(fragment.into());
        self
    }
}

impl Default for NameQuery {
    fn default() -> Self {
        Self::new()
    }
}
