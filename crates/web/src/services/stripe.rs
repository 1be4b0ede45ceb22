//! Stripe REST client for hosted checkout.
//!
//! Only the three calls the site needs are implemented: create a checkout
//! session, create a customer, and read a checkout session back after the
//! redirect. Requests are form-encoded with bearer auth, as Stripe expects.

use std::collections::HashMap;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::StripeConfig;
use crate::services::checkout::PaymentProvider;

/// Errors that can occur when interacting with the Stripe API.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Parameters for a subscription-mode checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionParams {
    pub price_id: String,
    pub success_url: String,
    pub cancel_url: String,
    /// Existing customer to bill. Mutually exclusive with `customer_email`.
    pub customer: Option<String>,
    pub customer_email: Option<String>,
    pub metadata: Vec<(String, String)>,
}

impl CheckoutSessionParams {
    /// Form fields in Stripe's bracketed encoding.
    #[must_use]
    pub fn to_form(&self) -> Vec<(String, String)> {
        let mut form = vec![
            ("mode".to_string(), "subscription".to_string()),
            ("line_items[0][price]".to_string(), self.price_id.clone()),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("success_url".to_string(), self.success_url.clone()),
            ("cancel_url".to_string(), self.cancel_url.clone()),
        ];
        if let Some(customer) = &self.customer {
            form.push(("customer".to_string(), customer.clone()));
        }
        if let Some(email) = &self.customer_email {
            form.push(("customer_email".to_string(), email.clone()));
        }
        form.extend(metadata_fields(&self.metadata));
        form
    }
}

/// A checkout session as returned by Stripe (only the fields we read).
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Hosted payment page. Absent once the session has expired or completed.
    pub url: Option<String>,
    /// `open`, `complete` or `expired`.
    pub status: Option<String>,
    pub customer: Option<String>,
    pub customer_email: Option<String>,
    pub customer_details: Option<CustomerDetails>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl CheckoutSession {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("complete")
    }

    /// Email the session was paid with: our own metadata first, then what
    /// Stripe collected.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.metadata
            .get("email")
            .map(String::as_str)
            .or(self.customer_email.as_deref())
            .or_else(|| {
                self.customer_details
                    .as_ref()
                    .and_then(|d| d.email.as_deref())
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
    pub email: Option<String>,
}

/// A Stripe customer (only the id is needed).
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    api_base: String,
}

impl StripeClient {
    /// Create a new Stripe API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &StripeConfig) -> Result<Self, StripeError> {
        let mut headers = HeaderMap::new();

        let mut auth_value =
            HeaderValue::from_str(&format!("Bearer {}", config.secret_key.expose_secret()))
                .map_err(|e| StripeError::Parse(format!("Invalid API key format: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
        })
    }

    /// Read a checkout session back by id.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the response can't be parsed.
    pub async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, StripeError> {
        let url = format!("{}/checkout/sessions/{session_id}", self.api_base);
        let response = self.client.get(&url).send().await?;
        parse_response(response).await
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<T, StripeError> {
        let url = format!("{}{path}", self.api_base);
        let response = self.client.post(&url).form(form).send().await?;
        parse_response(response).await
    }
}

impl PaymentProvider for StripeClient {
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, StripeError> {
        self.post_form("/checkout/sessions", &params.to_form()).await
    }

    async fn create_customer(
        &self,
        email: &str,
        metadata: &[(String, String)],
    ) -> Result<Customer, StripeError> {
        let mut form = vec![("email".to_string(), email.to_string())];
        form.extend(metadata_fields(metadata));
        self.post_form("/customers", &form).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, StripeError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StripeError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    response
        .json()
        .await
        .map_err(|e| StripeError::Parse(e.to_string()))
}

/// Pull `error.message` out of a Stripe error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| body.to_string())
}

fn metadata_fields(metadata: &[(String, String)]) -> impl Iterator<Item = (String, String)> + '_ {
    metadata
        .iter()
        .map(|(key, value)| (format!("metadata[{key}]"), value.clone()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn params() -> CheckoutSessionParams {
        CheckoutSessionParams {
            price_id: "price_123".to_string(),
            success_url: "https://namenest.app/checkout/success?session_id={CHECKOUT_SESSION_ID}"
                .to_string(),
            cancel_url: "https://namenest.app/pricing".to_string(),
            customer: None,
            customer_email: Some("jane@example.com".to_string()),
            metadata: vec![("email".to_string(), "jane@example.com".to_string())],
        }
    }

    fn field<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
        form.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_session_form_encoding() {
        let form = params().to_form();
        assert_eq!(field(&form, "mode"), Some("subscription"));
        assert_eq!(field(&form, "line_items[0][price]"), Some("price_123"));
        assert_eq!(field(&form, "line_items[0][quantity]"), Some("1"));
        assert_eq!(field(&form, "customer_email"), Some("jane@example.com"));
        assert_eq!(field(&form, "metadata[email]"), Some("jane@example.com"));
        assert_eq!(field(&form, "customer"), None);
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"type":"invalid_request_error","message":"No such price: 'price_x'"}}"#;
        assert_eq!(error_message(body), "No such price: 'price_x'");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_session_email_fallbacks() {
        let json = r#"{
            "id": "cs_test_1",
            "url": null,
            "status": "complete",
            "customer": "cus_1",
            "customer_email": null,
            "customer_details": {"email": "paid@example.com"}
        }"#;
        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.email(), Some("paid@example.com"));

        let mut session = session;
        session
            .metadata
            .insert("email".to_string(), "meta@example.com".to_string());
        assert_eq!(session.email(), Some("meta@example.com"));
    }
}
