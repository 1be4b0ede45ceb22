//! Name gender classification.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a stored gender value is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown gender: {0}")]
pub struct UnknownGender(pub String);

/// Gender a name is traditionally given to.
///
/// The store uses `male`/`female`/`unisex`; URLs use `boy`/`girl`/`unisex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    /// All genders in display order.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Unisex];

    /// Value stored in the `names.gender` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unisex => "unisex",
        }
    }

    /// URL segment for this gender.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Male => "boy",
            Self::Female => "girl",
            Self::Unisex => "unisex",
        }
    }

    /// Word used in page titles ("Irish Boy Names").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Boy",
            Self::Female => "Girl",
            Self::Unisex => "Unisex",
        }
    }

    /// Resolve a URL segment (`boy`, `girl`, `unisex`), ignoring ASCII case.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGender(s.to_owned()))
    }
}
