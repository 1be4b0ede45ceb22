//! NameNest web library.
//!
//! Programmatic SEO name pages, Stripe subscription checkout and the
//! premium shortlist API, exposed as a library so the binary stays thin and
//! handlers can be tested.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
