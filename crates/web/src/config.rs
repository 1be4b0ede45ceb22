//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `NAMENEST_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `NAMENEST_BASE_URL` - Public URL of the site, used for canonical links and Stripe redirects
//! - `STRIPE_SECRET_KEY` - Stripe secret API key
//! - `STRIPE_PRICE_ID` - Price id of the premium subscription
//!
//! ## Optional
//! - `NAMENEST_HOST` - Bind address (default: 127.0.0.1)
//! - `NAMENEST_PORT` - Listen port (default: 3000)
//! - `NAMENEST_REVALIDATE_SECONDS` - Shared-cache lifetime of name pages (default: 86400)
//! - `STRIPE_API_BASE` - Stripe API base URL (default: <https://api.stripe.com/v1>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` / `SENTRY_TRACES_SAMPLE_RATE` - Sentry sampling (default: 1.0 / 0.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// One day; name pages are revalidated daily.
const DEFAULT_REVALIDATE_SECONDS: u64 = 86_400;

const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    pub host: IpAddr,
    pub port: u16,
    /// Public base URL, without a trailing slash
    pub base_url: String,
    /// `s-maxage` for listing pages
    pub revalidate_seconds: u64,
    pub stripe: StripeConfig,
    pub sentry: SentryConfig,
}

/// Stripe configuration.
///
/// Implements `Debug` manually to redact the secret key.
#[derive(Clone)]
pub struct StripeConfig {
    pub secret_key: SecretString,
    /// Price id of the premium subscription (`price_...`)
    pub price_id: String,
    pub api_base: String,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[REDACTED]")
            .field("price_id", &self.price_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Sentry configuration. Error tracking is disabled without a DSN.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("NAMENEST_DATABASE_URL")?;
        let host = parse_env("NAMENEST_HOST", "127.0.0.1")?;
        let port = parse_env("NAMENEST_PORT", "3000")?;
        let base_url = normalize_base_url("NAMENEST_BASE_URL", &get_required_env("NAMENEST_BASE_URL")?)?;
        let revalidate_seconds =
            parse_env("NAMENEST_REVALIDATE_SECONDS", &DEFAULT_REVALIDATE_SECONDS.to_string())?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            revalidate_seconds,
            stripe: StripeConfig::from_env()?,
            sentry: SentryConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl StripeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let price_id = get_required_env("STRIPE_PRICE_ID")?;
        if !price_id.starts_with("price_") {
            return Err(ConfigError::InvalidEnvVar(
                "STRIPE_PRICE_ID".to_string(),
                "must start with 'price_'".to_string(),
            ));
        }

        Ok(Self {
            secret_key: get_validated_secret("STRIPE_SECRET_KEY")?,
            price_id,
            api_base: get_env_or_default("STRIPE_API_BASE", DEFAULT_STRIPE_API_BASE)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: parse_env("SENTRY_SAMPLE_RATE", "1.0")?,
            traces_sample_rate: parse_env("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    std::env::var(primary_key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Validate an absolute http(s) URL and strip any trailing slash.
fn normalize_base_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be an absolute http(s) URL".to_string(),
        ));
    }
    Ok(value.trim_end_matches('/').to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy("ab") - 1.0).abs() < 0.01);
        assert!(shannon_entropy("sk_live_51Hx9QaBcD7eFgH2iJkLmN") > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let err = validate_secret_strength("sk_test_your-key-here", "STRIPE_SECRET_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let err = validate_secret_strength("sk_aaaaaaaaaaaaaaaaaaaa", "STRIPE_SECRET_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        assert!(validate_secret_strength("sk_test_51Hx9QaBcD7eFgH2iJkLmN0pQ", "STRIPE_SECRET_KEY").is_ok());
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("K", "https://namenest.app/").unwrap(),
            "https://namenest.app"
        );
        assert!(normalize_base_url("K", "namenest.app").is_err());
        assert!(normalize_base_url("K", "ftp://namenest.app").is_err());
    }

    #[test]
    fn test_socket_addr_and_secure() {
        let config = SiteConfig {
            database_url: SecretString::from("postgres://localhost/namenest"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "https://namenest.app".to_string(),
            revalidate_seconds: DEFAULT_REVALIDATE_SECONDS,
            stripe: StripeConfig {
                secret_key: SecretString::from("sk_test_secret"),
                price_id: "price_123".to_string(),
                api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            },
            sentry: SentryConfig::default(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
        assert!(config.is_secure());
    }

    #[test]
    fn test_stripe_config_debug_redacts_secret() {
        let config = StripeConfig {
            secret_key: SecretString::from("sk_live_super_private_value"),
            price_id: "price_premium".to_string(),
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("price_premium"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_private_value"));
    }
}
