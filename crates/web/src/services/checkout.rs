//! Subscription checkout.
//!
//! Two flows share one endpoint. A signup creates a session for a bare email
//! address; the profile is created when the visitor returns from Stripe. An
//! upgrade bills the signed-in profile, provisioning its Stripe customer the
//! first time.

use std::future::Future;

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use namenest_core::{Email, EmailError, Profile, ProfileId};

use super::stripe::{CheckoutSession, CheckoutSessionParams, Customer, StripeError};
use crate::db::{ProfileStore, RepositoryError};

/// Placeholder Stripe substitutes with the real session id on redirect.
const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// The payment calls checkout depends on.
pub trait PaymentProvider {
    fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> impl Future<Output = Result<CheckoutSession, StripeError>> + Send;

    fn create_customer(
        &self,
        email: &str,
        metadata: &[(String, String)],
    ) -> impl Future<Output = Result<Customer, StripeError>> + Send;
}

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Not signed in")]
    Unauthorized,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Payment provider error: {0}")]
    Payment(#[from] StripeError),

    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Checkout session has no URL")]
    MissingUrl,

    #[error("Checkout session has no email address")]
    MissingEmail,

    #[error("Checkout session has an invalid profile id: {0}")]
    InvalidProfileId(String),
}

/// `POST /api/checkout` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    Signup,
    Upgrade,
}

impl CheckoutMode {
    /// `"signup"` selects a signup; anything else, including no mode, is an upgrade.
    #[must_use]
    pub fn from_request(mode: Option<&str>) -> Self {
        if mode == Some("signup") {
            Self::Signup
        } else {
            Self::Upgrade
        }
    }
}

/// Creates hosted checkout sessions.
pub struct CheckoutService<'a, P, S> {
    provider: &'a P,
    profiles: &'a S,
    price_id: &'a str,
    base_url: &'a str,
}

impl<'a, P: PaymentProvider, S: ProfileStore> CheckoutService<'a, P, S> {
    #[must_use]
    pub const fn new(provider: &'a P, profiles: &'a S, price_id: &'a str, base_url: &'a str) -> Self {
        Self {
            provider,
            profiles,
            price_id,
            base_url,
        }
    }

    /// Create a session and return the hosted checkout URL.
    ///
    /// # Errors
    ///
    /// - `EmailRequired` / `InvalidEmail` for a signup without a usable email
    /// - `Unauthorized` for an upgrade with no signed-in profile
    /// - `ProfileNotFound` when the signed-in profile no longer exists
    /// - `Payment` / `Repository` / `MissingUrl` for downstream failures
    pub async fn create_session(
        &self,
        request: &CheckoutRequest,
        user: Option<ProfileId>,
    ) -> Result<String, CheckoutError> {
        let params = match CheckoutMode::from_request(request.mode.as_deref()) {
            CheckoutMode::Signup => self.signup_params(request.email.as_deref())?,
            CheckoutMode::Upgrade => self.upgrade_params(user).await?,
        };

        let session = self.provider.create_checkout_session(&params).await?;
        tracing::info!(session_id = %session.id, "Created checkout session");

        session.url.ok_or(CheckoutError::MissingUrl)
    }

    fn signup_params(&self, email: Option<&str>) -> Result<CheckoutSessionParams, CheckoutError> {
        let raw = email.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(CheckoutError::EmailRequired);
        }
        let email = Email::parse(raw)?;

        Ok(CheckoutSessionParams {
            customer: None,
            customer_email: Some(email.to_string()),
            metadata: vec![("email".to_string(), email.into_inner())],
            ..self.base_params()
        })
    }

    async fn upgrade_params(
        &self,
        user: Option<ProfileId>,
    ) -> Result<CheckoutSessionParams, CheckoutError> {
        let profile_id = user.ok_or(CheckoutError::Unauthorized)?;
        let profile = self
            .profiles
            .get_profile(profile_id)
            .await?
            .ok_or(CheckoutError::ProfileNotFound)?;

        let customer_id = if let Some(existing) = profile.stripe_customer_id {
            existing
        } else {
            let metadata = [("profile_id".to_string(), profile.id.to_string())];
            let customer = self
                .provider
                .create_customer(profile.email.as_str(), &metadata)
                .await?;
            let stored = self
                .profiles
                .set_stripe_customer_id(profile.id, &customer.id)
                .await?;
            if stored == customer.id {
                tracing::info!(profile_id = %profile.id, customer_id = %customer.id, "Provisioned Stripe customer");
            } else {
                tracing::warn!(
                    profile_id = %profile.id,
                    unused_customer_id = %customer.id,
                    customer_id = %stored,
                    "Profile was provisioned concurrently; using stored customer"
                );
            }
            stored
        };

        Ok(CheckoutSessionParams {
            customer: Some(customer_id),
            customer_email: None,
            metadata: vec![("profile_id".to_string(), profile.id.to_string())],
            ..self.base_params()
        })
    }

    fn base_params(&self) -> CheckoutSessionParams {
        CheckoutSessionParams {
            price_id: self.price_id.to_string(),
            success_url: format!(
                "{}/checkout/success?session_id={SESSION_ID_PLACEHOLDER}",
                self.base_url
            ),
            cancel_url: format!("{}/pricing", self.base_url),
            customer: None,
            customer_email: None,
            metadata: Vec::new(),
        }
    }
}

/// Apply a session read back after the Stripe redirect.
///
/// Returns `None` while the session is not yet complete. An upgrade session
/// (metadata `profile_id`) marks that profile premium; the billing email is
/// ignored. A signup session upserts the profile for its email.
///
/// # Errors
///
/// - `InvalidProfileId` / `ProfileNotFound` for an upgrade whose profile is unusable
/// - `MissingEmail` / `InvalidEmail` for a signup without a usable address
/// - `Repository` if the write fails
pub async fn complete_checkout<S: ProfileStore>(
    profiles: &S,
    session: &CheckoutSession,
) -> Result<Option<Profile>, CheckoutError> {
    if !session.is_complete() {
        return Ok(None);
    }

    let customer_id = session.customer.as_deref();
    let profile = if let Some(raw) = session.metadata.get("profile_id") {
        let id = Uuid::parse_str(raw)
            .map(ProfileId::new)
            .map_err(|_| CheckoutError::InvalidProfileId(raw.clone()))?;
        profiles
            .set_premium(id, customer_id)
            .await?
            .ok_or(CheckoutError::ProfileNotFound)?
    } else {
        let email = Email::parse(session.email().ok_or(CheckoutError::MissingEmail)?)?;
        profiles.upsert_premium(&email, customer_id).await?
    };
    tracing::info!(profile_id = %profile.id, session_id = %session.id, "Checkout completed");

    Ok(Some(profile))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    use super::*;
    use crate::services::stripe::CustomerDetails;

    #[derive(Default)]
    struct FakeProvider {
        sessions: Mutex<Vec<CheckoutSessionParams>>,
        customers_created: AtomicUsize,
        omit_url: bool,
    }

    impl PaymentProvider for FakeProvider {
        async fn create_checkout_session(
            &self,
            params: &CheckoutSessionParams,
        ) -> Result<CheckoutSession, StripeError> {
            self.sessions.lock().unwrap().push(params.clone());
            Ok(CheckoutSession {
                id: "cs_test_1".to_string(),
                url: (!self.omit_url).then(|| "https://checkout.stripe.com/c/pay/cs_test_1".to_string()),
                status: Some("open".to_string()),
                customer: params.customer.clone(),
                customer_email: params.customer_email.clone(),
                customer_details: None,
                metadata: HashMap::new(),
            })
        }

        async fn create_customer(
            &self,
            _email: &str,
            _metadata: &[(String, String)],
        ) -> Result<Customer, StripeError> {
            self.customers_created.fetch_add(1, Ordering::SeqCst);
            Ok(Customer {
                id: "cus_new".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct FakeProfiles {
        profiles: Mutex<HashMap<ProfileId, Profile>>,
        updates: AtomicUsize,
        /// `get_profile` reports no customer, as if read before a concurrent provision.
        stale_customer: bool,
    }

    impl FakeProfiles {
        fn with(profile: Profile) -> Self {
            let store = Self::default();
            store.profiles.lock().unwrap().insert(profile.id, profile);
            store
        }
    }

    impl ProfileStore for FakeProfiles {
        async fn get_profile(&self, id: ProfileId) -> Result<Option<Profile>, RepositoryError> {
            let mut profile = self.profiles.lock().unwrap().get(&id).cloned();
            if self.stale_customer {
                if let Some(profile) = profile.as_mut() {
                    profile.stripe_customer_id = None;
                }
            }
            Ok(profile)
        }

        async fn set_stripe_customer_id(
            &self,
            id: ProfileId,
            customer_id: &str,
        ) -> Result<String, RepositoryError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles.get_mut(&id).ok_or(RepositoryError::NotFound)?;
            Ok(profile
                .stripe_customer_id
                .get_or_insert_with(|| customer_id.to_string())
                .clone())
        }

        async fn set_premium(
            &self,
            id: ProfileId,
            customer_id: Option<&str>,
        ) -> Result<Option<Profile>, RepositoryError> {
            let mut profiles = self.profiles.lock().unwrap();
            Ok(profiles.get_mut(&id).map(|profile| {
                profile.is_premium = true;
                if profile.stripe_customer_id.is_none() {
                    profile.stripe_customer_id = customer_id.map(String::from);
                }
                profile.clone()
            }))
        }

        async fn upsert_premium(
            &self,
            email: &Email,
            customer_id: Option<&str>,
        ) -> Result<Profile, RepositoryError> {
            let mut profiles = self.profiles.lock().unwrap();
            let existing = profiles.values_mut().find(|p| &p.email == email);
            let profile = match existing {
                Some(profile) => {
                    profile.is_premium = true;
                    if profile.stripe_customer_id.is_none() {
                        profile.stripe_customer_id = customer_id.map(String::from);
                    }
                    profile.clone()
                }
                None => {
                    let profile = Profile {
                        id: ProfileId::generate(),
                        email: email.clone(),
                        stripe_customer_id: customer_id.map(String::from),
                        is_premium: true,
                        created_at: Utc::now(),
                        updated_at: Utc::now(),
                    };
                    profiles.insert(profile.id, profile.clone());
                    profile
                }
            };
            Ok(profile)
        }
    }

    fn profile(customer: Option<&str>) -> Profile {
        Profile {
            id: ProfileId::new(Uuid::from_u128(7)),
            email: Email::parse("jane@example.com").unwrap(),
            stripe_customer_id: customer.map(String::from),
            is_premium: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request(mode: Option<&str>, email: Option<&str>) -> CheckoutRequest {
        CheckoutRequest {
            email: email.map(String::from),
            mode: mode.map(String::from),
        }
    }

    fn service<'a>(
        provider: &'a FakeProvider,
        profiles: &'a FakeProfiles,
    ) -> CheckoutService<'a, FakeProvider, FakeProfiles> {
        CheckoutService::new(provider, profiles, "price_123", "https://namenest.app")
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(CheckoutMode::from_request(Some("signup")), CheckoutMode::Signup);
        assert_eq!(CheckoutMode::from_request(Some("upgrade")), CheckoutMode::Upgrade);
        assert_eq!(CheckoutMode::from_request(Some("SIGNUP")), CheckoutMode::Upgrade);
        assert_eq!(CheckoutMode::from_request(None), CheckoutMode::Upgrade);
    }

    #[tokio::test]
    async fn test_signup_with_blank_email_is_rejected() {
        let provider = FakeProvider::default();
        let profiles = FakeProfiles::default();

        for email in [None, Some(""), Some("   ")] {
            let err = service(&provider, &profiles)
                .create_session(&request(Some("signup"), email), None)
                .await
                .unwrap_err();
            assert!(matches!(err, CheckoutError::EmailRequired));
        }
        assert!(provider.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_signup_returns_url_and_sets_email() {
        let provider = FakeProvider::default();
        let profiles = FakeProfiles::default();

        let url = service(&provider, &profiles)
            .create_session(&request(Some("signup"), Some("  Jane@Example.com ")), None)
            .await
            .unwrap();
        assert!(!url.is_empty());

        let sessions = provider.sessions.lock().unwrap();
        let params = &sessions[0];
        assert_eq!(params.price_id, "price_123");
        assert_eq!(params.customer_email.as_deref(), Some("jane@example.com"));
        assert_eq!(
            params.metadata,
            vec![("email".to_string(), "jane@example.com".to_string())]
        );
        assert_eq!(
            params.success_url,
            "https://namenest.app/checkout/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(params.cancel_url, "https://namenest.app/pricing");
        assert_eq!(provider.customers_created.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upgrade_without_user_is_unauthorized() {
        let provider = FakeProvider::default();
        let profiles = FakeProfiles::default();

        let err = service(&provider, &profiles)
            .create_session(&request(Some("upgrade"), None), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Unauthorized));
    }

    #[tokio::test]
    async fn test_upgrade_with_missing_profile_is_not_found() {
        let provider = FakeProvider::default();
        let profiles = FakeProfiles::default();

        let err = service(&provider, &profiles)
            .create_session(&request(None, None), Some(ProfileId::generate()))
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::ProfileNotFound));
    }

    #[tokio::test]
    async fn test_upgrade_provisions_customer_once() {
        let existing = profile(None);
        let id = existing.id;
        let provider = FakeProvider::default();
        let profiles = FakeProfiles::with(existing);

        service(&provider, &profiles)
            .create_session(&request(Some("upgrade"), None), Some(id))
            .await
            .unwrap();

        assert_eq!(provider.customers_created.load(Ordering::SeqCst), 1);
        assert_eq!(profiles.updates.load(Ordering::SeqCst), 1);

        let sessions = provider.sessions.lock().unwrap();
        assert_eq!(sessions[0].customer.as_deref(), Some("cus_new"));
        assert_eq!(sessions[0].metadata[0].0, "profile_id");
        assert_eq!(sessions[0].metadata[0].1, id.to_string());
    }

    #[tokio::test]
    async fn test_upgrade_reuses_existing_customer() {
        let existing = profile(Some("cus_existing"));
        let id = existing.id;
        let provider = FakeProvider::default();
        let profiles = FakeProfiles::with(existing);

        service(&provider, &profiles)
            .create_session(&request(None, None), Some(id))
            .await
            .unwrap();

        assert_eq!(provider.customers_created.load(Ordering::SeqCst), 0);
        assert_eq!(profiles.updates.load(Ordering::SeqCst), 0);
        assert_eq!(
            provider.sessions.lock().unwrap()[0].customer.as_deref(),
            Some("cus_existing")
        );
    }

    #[tokio::test]
    async fn test_upgrade_keeps_customer_provisioned_concurrently() {
        let existing = profile(Some("cus_first"));
        let id = existing.id;
        let provider = FakeProvider::default();
        let profiles = FakeProfiles {
            stale_customer: true,
            ..FakeProfiles::with(existing)
        };

        service(&provider, &profiles)
            .create_session(&request(None, None), Some(id))
            .await
            .unwrap();

        assert_eq!(provider.customers_created.load(Ordering::SeqCst), 1);
        assert_eq!(
            provider.sessions.lock().unwrap()[0].customer.as_deref(),
            Some("cus_first")
        );
        assert_eq!(
            profiles.profiles.lock().unwrap()[&id].stripe_customer_id.as_deref(),
            Some("cus_first")
        );
    }

    #[tokio::test]
    async fn test_session_without_url_is_an_error() {
        let provider = FakeProvider {
            omit_url: true,
            ..FakeProvider::default()
        };
        let profiles = FakeProfiles::default();

        let err = service(&provider, &profiles)
            .create_session(&request(Some("signup"), Some("jane@example.com")), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::MissingUrl));
    }

    fn completed_session(status: &str, email: Option<&str>) -> CheckoutSession {
        let mut metadata = HashMap::new();
        if let Some(email) = email {
            metadata.insert("email".to_string(), email.to_string());
        }
        CheckoutSession {
            id: "cs_test_2".to_string(),
            url: None,
            status: Some(status.to_string()),
            customer: Some("cus_paid".to_string()),
            customer_email: None,
            customer_details: None,
            metadata,
        }
    }

    #[tokio::test]
    async fn test_open_session_is_pending() {
        let profiles = FakeProfiles::default();
        let result = complete_checkout(&profiles, &completed_session("open", Some("jane@example.com")))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(profiles.profiles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_complete_session_creates_premium_profile() {
        let profiles = FakeProfiles::default();
        let profile = complete_checkout(&profiles, &completed_session("complete", Some("jane@example.com")))
            .await
            .unwrap()
            .unwrap();
        assert!(profile.is_premium);
        assert_eq!(profile.email.as_str(), "jane@example.com");
        assert_eq!(profile.stripe_customer_id.as_deref(), Some("cus_paid"));
    }

    #[tokio::test]
    async fn test_complete_session_upgrades_existing_profile() {
        let existing = profile(Some("cus_existing"));
        let id = existing.id;
        let profiles = FakeProfiles::with(existing);

        let profile = complete_checkout(&profiles, &completed_session("complete", Some("jane@example.com")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.id, id);
        assert!(profile.is_premium);
        assert_eq!(profile.stripe_customer_id.as_deref(), Some("cus_existing"));
    }

    #[tokio::test]
    async fn test_complete_upgrade_session_uses_profile_id() {
        let existing = profile(Some("cus_existing"));
        let id = existing.id;
        let profiles = FakeProfiles::with(existing);

        let mut session = completed_session("complete", None);
        session.customer = Some("cus_existing".to_string());
        session.metadata.insert("profile_id".to_string(), id.to_string());
        session.customer_details = Some(CustomerDetails {
            email: Some("billing@example.com".to_string()),
        });

        let profile = complete_checkout(&profiles, &session).await.unwrap().unwrap();
        assert_eq!(profile.id, id);
        assert!(profile.is_premium);

        let stored = profiles.profiles.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[&id].is_premium);
        assert_eq!(stored[&id].email.as_str(), "jane@example.com");
    }

    #[tokio::test]
    async fn test_complete_upgrade_session_for_missing_profile() {
        let profiles = FakeProfiles::default();
        let mut session = completed_session("complete", Some("jane@example.com"));
        session
            .metadata
            .insert("profile_id".to_string(), ProfileId::generate().to_string());

        let err = complete_checkout(&profiles, &session).await.unwrap_err();
        assert!(matches!(err, CheckoutError::ProfileNotFound));
        assert!(profiles.profiles.lock().unwrap().is_empty());

        session.metadata.insert("profile_id".to_string(), "not-a-uuid".to_string());
        let err = complete_checkout(&profiles, &session).await.unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidProfileId(_)));
    }

    #[tokio::test]
    async fn test_complete_session_without_email() {
        let profiles = FakeProfiles::default();
        let err = complete_checkout(&profiles, &completed_session("complete", None))
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::MissingEmail));
    }
}
