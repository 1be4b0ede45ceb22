//! Programmatic SEO: listing pages, metadata, FAQs and structured data.
//!
//! All functions here are pure. Given the same catalog entry and result set
//! they produce identical output.

pub mod faq;
pub mod listing;
pub mod metadata;
pub mod structured_data;

pub use faq::FaqItem;
pub use listing::{Category, ListingKind, ListingPage};
pub use metadata::{Breadcrumb, PageMeta, SITE_NAME, absolute_url};
