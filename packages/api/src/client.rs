//! REST client for the job-fair backend.
//!
//! The bearer credential is read from the session store on every request, so
//! a login or logout elsewhere in the app takes effect immediately.

use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use session::GuardSettings;
use store::{JobfairConfig, SessionStore};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::models::{
    AuthSession, Booking, BookingRequest, Company, LoginRequest, NewCompany, RegisterRequest, User,
};

/// HTTP request timeout in seconds. Browsers apply their own, so native only.
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Responses come either as `{ "success": true, "data": ... }` or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(value) => value,
        }
    }
}

/// Cheap to clone: `reqwest::Client` shares its pool internally.
#[derive(Clone)]
pub struct ApiClient<S> {
    http: Client,
    base_url: String,
    store: S,
    settings: GuardSettings,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(config: &JobfairConfig, store: S) -> Result<Self, ApiError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS));

        Ok(Self {
            http: builder.build()?,
            base_url: config.api.backend_url.trim_end_matches('/').to_string(),
            store,
            settings: GuardSettings::from_config(config),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.store.get(&self.settings.token_key) {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%url, %status, "Backend request failed");
            return Err(ApiError::from_status(status, &body));
        }
        debug!(%url, %status, "Backend request succeeded");

        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str::<Payload<T>>(body)
            .map(Payload::into_inner)
            .map_err(|e| ApiError::InvalidResponse(format!("{url}: {e}")))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(method, path).json(body)).await
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Sign in and persist the returned credential.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self.send_json(Method::POST, "auth/login", request).await?;
        session::login(&self.store, &self.settings, &session.token);
        info!(email = %request.email, "Signed in");
        Ok(session)
    }

    /// Create an account and persist the returned credential.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self.send_json(Method::POST, "auth/register", request).await?;
        session::login(&self.store, &self.settings, &session.token);
        info!(email = %request.email, role = ?request.role, "Registered");
        Ok(session)
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("auth/me").await
    }

    /// Drop the stored credential. The backend keeps no session state.
    pub fn logout(&self) {
        session::logout(&self.store, &self.settings);
    }

    // ------------------------------------------------------------------
    // Companies
    // ------------------------------------------------------------------

    pub async fn companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get("companies").await
    }

    pub async fn company(&self, id: &str) -> Result<Company, ApiError> {
        self.get(&format!("companies/{id}")).await
    }

    pub async fn create_company(&self, company: &NewCompany) -> Result<Company, ApiError> {
        let company = company.validate()?;
        self.send_json(Method::POST, "companies", &company).await
    }

    pub async fn update_company(&self, id: &str, company: &NewCompany) -> Result<Company, ApiError> {
        let company = company.validate()?;
        self.send_json(Method::PUT, &format!("companies/{id}"), &company).await
    }

    pub async fn delete_company(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send(self.request(Method::DELETE, &format!("companies/{id}"))).await?;
        info!(company = id, "Deleted company");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------

    /// The caller's bookings, or every booking for an administrator.
    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("bookings").await
    }

    /// Book a slot. The backend answers with the unpopulated document, so
    /// callers refetch [`ApiClient::bookings`] to display it.
    pub async fn create_booking(&self, company_id: &str, request: &BookingRequest) -> Result<(), ApiError> {
        let path = format!("companies/{company_id}/bookings");
        let _: serde_json::Value = self.send_json(Method::POST, &path, request).await?;
        info!(company = company_id, date = %request.booking_date, "Created booking");
        Ok(())
    }

    pub async fn update_booking(&self, id: &str, request: &BookingRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send_json(Method::PUT, &format!("bookings/{id}"), request).await?;
        info!(booking = id, date = %request.booking_date, "Rescheduled booking");
        Ok(())
    }

    pub async fn delete_booking(&self, id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.send(self.request(Method::DELETE, &format!("bookings/{id}"))).await?;
        info!(booking = id, "Deleted booking");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn client(url: &str) -> ApiClient<MemoryStore> {
        let config = JobfairConfig::default().with_backend_url(url);
        ApiClient::new(&config, MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_url_joining() {
        let api = client("http://localhost:5000/api/v1/");
        assert_eq!(api.url("auth/me"), "http://localhost:5000/api/v1/auth/me");
        assert_eq!(api.url("/companies"), "http://localhost:5000/api/v1/companies");
    }

    #[test]
    fn test_payload_wrapped_and_bare() {
        let wrapped: Payload<Vec<Company>> =
            serde_json::from_str(r#"{"success":true,"count":1,"data":[{"_id":"c1","name":"Acme"}]}"#)
                .unwrap();
        assert_eq!(wrapped.into_inner()[0].name, "Acme");

        let bare: Payload<Vec<Company>> =
            serde_json::from_str(r#"[{"_id":"c1","name":"Acme"}]"#).unwrap();
        assert_eq!(bare.into_inner().len(), 1);

        let session: Payload<AuthSession> =
            serde_json::from_str(r#"{"success":true,"token":"a.b.c"}"#).unwrap();
        assert_eq!(session.into_inner().token, "a.b.c");
    }

    #[test]
    fn test_bearer_header_follows_store() {
        let api = client("http://localhost:5000/api/v1");

        let request = api.request(Method::GET, "auth/me").build().unwrap();
        assert!(request.headers().get("authorization").is_none());

        api.store().set("token", "");
        let request = api.request(Method::GET, "auth/me").build().unwrap();
        assert!(request.headers().get("authorization").is_none());

        api.store().set("token", "a.b.c");
        let request = api.request(Method::GET, "auth/me").build().unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer a.b.c");
    }

    #[test]
    fn test_logout_clears_token() {
        let api = client("http://localhost:5000/api/v1");
        api.store().set("token", "a.b.c");
        api.logout();
        assert_eq!(api.store().get("token"), None);
    }

    #[tokio::test]
    async fn test_invalid_company_never_hits_network() {
        let api = client("http://127.0.0.1:1");
        let err = api.create_company(&NewCompany::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let api = client("http://127.0.0.1:1");
        let err = api.companies().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
