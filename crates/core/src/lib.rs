//! NameNest Core - shared types, catalogs and SEO generators.
//!
//! This crate is used by:
//! - `web` - Public site (listing pages, checkout, shortlist)
//! - `cli` - Migrations, seeding and sitemap tooling
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients.
//!
//! # Modules
//!
//! - [`types`] - Names, genders, emails and profiles
//! - [`catalog`] - Static catalogs of valid URL segments
//! - [`seo`] - Listing pages, metadata, FAQs and JSON-LD
//! - [`sitemap`] - Sitemap entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod seo;
pub mod sitemap;
pub mod types;

pub use types::*;
