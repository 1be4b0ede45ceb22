//! HTTP integration tests for NameNest.
//!
//! Every test is `#[ignore]`d: they need a migrated, seeded database and a
//! running server.
//!
//! ```bash
//! cargo run -p namenest-cli -- migrate
//! cargo run -p namenest-cli -- seed crates/cli/seeds/names.yaml
//! cargo run -p namenest-web &
//! NAMENEST_TEST_URL=http://localhost:3000 cargo test -p namenest-integration-tests -- --ignored
//! ```

use reqwest::Client;

/// Server under test, from `NAMENEST_TEST_URL`.
#[must_use]
pub fn base_url() -> String {
    std::env::var("NAMENEST_TEST_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Client with a cookie jar, so a session survives across requests.
///
/// # Panics
///
/// Panics if the TLS backend cannot be initialised.
#[must_use]
#[allow(clippy::expect_used)]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
