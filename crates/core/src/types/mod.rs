//! Core domain types for NameNest.

pub mod email;
pub mod gender;
pub mod name;
pub mod profile;

pub use email::{Email, EmailError};
pub use gender::{Gender, UnknownGender};
pub use name::{CountRange, NameQuery, NameRecord};
pub use profile::{Profile, ProfileId};
