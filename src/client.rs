//! CRM API client with builder pattern.
//!
//! [`JewelLinkClient`] owns the HTTP connection pool and the request
//! authentication. The typed method groups live in [`crate::api`]; every one
//! of them funnels through [`JewelLinkClient::send`], which decodes non-2xx
//! bodies into [`JewelLinkError`] exactly once.

use crate::{
    api::{Resource, ResourceClient},
    auth::{ArcDynAuthProvider, AuthProvider, ResolvedAuth, StoredTokenAuth},
    error::{JewelLinkError, Result},
    models::ApiErrorBody,
    storage::KeyValueStore,
    timeouts::ClientTimeouts,
};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Whether a request carries the session credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestAuth {
    Anonymous,
    Session,
}

/// Main CRM API client.
///
/// Cheap to clone; clones share the connection pool and auth provider.
///
/// ```rust,no_run
/// use jewel_link::JewelLinkClient;
///
/// # fn example() -> jewel_link::Result<()> {
/// let client = JewelLinkClient::builder()
///     .base_url("http://localhost:8000")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JewelLinkClient {
    base_url: String,
    http_client: reqwest::Client,
    auth: ResolvedAuth,
    timeouts: ClientTimeouts,
}

impl std::fmt::Debug for JewelLinkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JewelLinkClient")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl JewelLinkClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> JewelLinkClientBuilder {
        JewelLinkClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeouts(&self) -> &ClientTimeouts {
        &self.timeouts
    }

    /// Full URL of an API path such as `auth/login/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Opaque CRUD access to one backend resource collection.
    pub fn resource(&self, resource: Resource) -> ResourceClient<'_> {
        ResourceClient::new(self, resource)
    }

    pub fn customers(&self) -> ResourceClient<'_> {
        self.resource(Resource::Customers)
    }

    pub fn stores(&self) -> ResourceClient<'_> {
        self.resource(Resource::Stores)
    }

    pub fn users(&self) -> ResourceClient<'_> {
        self.resource(Resource::Users)
    }

    pub fn escalations(&self) -> ResourceClient<'_> {
        self.resource(Resource::Escalations)
    }

    pub fn feedback(&self) -> ResourceClient<'_> {
        self.resource(Resource::Feedback)
    }

    pub fn support(&self) -> ResourceClient<'_> {
        self.resource(Resource::Support)
    }

    pub fn follow_ups(&self) -> ResourceClient<'_> {
        self.resource(Resource::FollowUps)
    }

    pub fn tasks(&self) -> ResourceClient<'_> {
        self.resource(Resource::Tasks)
    }

    pub fn appointments(&self) -> ResourceClient<'_> {
        self.resource(Resource::Appointments)
    }

    pub fn tenants(&self) -> ResourceClient<'_> {
        self.resource(Resource::Tenants)
    }

    pub fn team_members(&self) -> ResourceClient<'_> {
        self.resource(Resource::TeamMembers)
    }

    /// Send a request and return the successful response.
    ///
    /// Non-2xx responses are turned into errors here; no retries.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: RequestAuth,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, &[], body, auth).await
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
        auth: RequestAuth,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let mut request = self.http_client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if auth == RequestAuth::Session {
            request = self.auth.resolve().await?.apply_to_request(request);
        }

        let start = Instant::now();
        log::debug!("[HTTP] {} {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        log::debug!(
            "[HTTP] {} {} -> {} in {:?}",
            method,
            url,
            status,
            start.elapsed()
        );

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let error = ApiErrorBody::parse(&error_text).into_error(status.as_u16());
        log::warn!("[HTTP] {} {} failed: {}", method, url, error);
        Err(error)
    }

    /// Send a request and decode the JSON response body.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: RequestAuth,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body, auth).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `GET` with query parameters, decoding the JSON response body.
    pub(crate) async fn get_json_with_query<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute(Method::GET, path, query, None::<&()>, RequestAuth::Session)
            .await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Builder for configuring [`JewelLinkClient`] instances.
pub struct JewelLinkClientBuilder {
    base_url: Option<String>,
    auth: ResolvedAuth,
    timeouts: ClientTimeouts,
}

impl JewelLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            auth: ResolvedAuth::default(),
            timeouts: ClientTimeouts::default(),
        }
    }

    /// Set the backend base URL (without the `/api` suffix)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use a fixed bearer token for every authenticated request
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthProvider::bearer_token(token.into()).into();
        self
    }

    /// Set a dynamic auth provider, resolved before every request
    pub fn auth_provider(mut self, provider: ArcDynAuthProvider) -> Self {
        self.auth = provider.into();
        self
    }

    /// Read the access token from `store` before every request.
    ///
    /// Pass a clone of the store the session context writes into.
    pub fn token_store<S>(self, store: S) -> Self
    where
        S: KeyValueStore + Send + Sync + 'static,
    {
        self.auth_provider(Arc::new(StoredTokenAuth::new(store)))
    }

    pub fn timeouts(mut self, timeouts: ClientTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<JewelLinkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| JewelLinkError::ConfigurationError("base_url is required".into()))?;
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| {
            JewelLinkError::ConfigurationError(format!("invalid base_url '{}': {}", base_url, e))
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(self.timeouts.request_timeout)
            .connect_timeout(self.timeouts.connection_timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| JewelLinkError::ConfigurationError(e.to_string()))?;

        Ok(JewelLinkClient {
            base_url,
            http_client,
            auth: self.auth,
            timeouts: self.timeouts,
        })
    }
}
