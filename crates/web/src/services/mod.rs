//! Business logic services.
//!
//! - `listing` - Resolve listing routes and assemble page payloads
//! - `checkout` - Create Stripe checkout sessions and apply completed ones
//! - `stripe` - Stripe REST client

pub mod checkout;
pub mod listing;
pub mod stripe;
