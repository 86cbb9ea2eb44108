use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwapOption;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{servers, users};
use crate::endpoint::Endpoint;
use crate::error::decode_error;
use crate::{ApiError, ApiResult};

const APPLICATION_JSON: &str = "application/json";

#[cfg(feature = "default-client")]
static PANEL_CLIENT: Lazy<ArcSwapOption<PanelClient>> = Lazy::new(|| ArcSwapOption::from(None));

/// Installs the process-wide PanelClient instance. Call this once at the
/// beginning of your application; later calls replace the stored client.
#[cfg(feature = "default-client")]
pub fn initialize(client: PanelClient) {
    PANEL_CLIENT.store(Some(Arc::new(client)));
}

/// Returns the process-wide PanelClient instance.
///
/// Returns `ApiError::ConfigurationError` if [`initialize`] has not been
/// called yet.
#[cfg(feature = "default-client")]
pub fn instance() -> ApiResult<Arc<PanelClient>> {
    PANEL_CLIENT.load_full().ok_or_else(|| {
        ApiError::ConfigurationError("Panel client has not been initialized".into())
    })
}

/// HTTP verb of a dispatched request, carrying the JSON body for the verbs
/// that send one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post(Vec<u8>),
    Patch(Vec<u8>),
    Delete,
}

impl Verb {
    /// Builds a verb from a method and an optional body.
    ///
    /// GET and DELETE never carry a body; POST and PATCH without one send an
    /// empty JSON object.
    pub fn new(method: Method, body: Option<Vec<u8>>) -> ApiResult<Self> {
        match (method, body) {
            (Method::GET, None) => Ok(Verb::Get),
            (Method::DELETE, None) => Ok(Verb::Delete),
            (Method::POST, body) => Ok(Verb::Post(body.unwrap_or_else(|| b"{}".to_vec()))),
            (Method::PATCH, body) => Ok(Verb::Patch(body.unwrap_or_else(|| b"{}".to_vec()))),
            (method @ (Method::GET | Method::DELETE), Some(_)) => Err(ApiError::InvalidEndpoint(
                format!("{method} requests must not carry a body"),
            )),
            (method, _) => Err(ApiError::InvalidEndpoint(format!(
                "unsupported HTTP method: {method}"
            ))),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post(_) => Method::POST,
            Verb::Patch(_) => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }

    fn into_body(self) -> Option<Vec<u8>> {
        match self {
            Verb::Post(body) | Verb::Patch(body) => Some(body),
            Verb::Get | Verb::Delete => None,
        }
    }
}

/// Builder for the panel client.
///
/// This builder provides a fluent API for creating panel clients with
/// validation at build time.
#[derive(Debug, Default)]
pub struct PanelClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl PanelClientBuilder {
    /// Sets the panel base URL, e.g. `https://panel.example.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the application API key sent as a bearer token.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Reads the application API key from an environment variable.
    pub fn api_key_from_env(mut self, var_name: &str) -> ApiResult<Self> {
        let api_key = std::env::var(var_name).map_err(|e| {
            ApiError::ConfigurationError(format!(
                "Failed to read environment variable '{var_name}': {e}"
            ))
        })?;
        self.api_key = Some(SecretString::from(api_key));
        Ok(self)
    }

    /// Sets whether invalid TLS certificates are accepted.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets the HTTP request timeout. Applies to every call made through the
    /// client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    /// Timeout, user agent and certificate settings are then up to that
    /// client.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> ApiResult<PanelClient> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::ConfigurationError("Base URL is required".into()))
            .and_then(|url_str| {
                Url::parse(url_str.trim()).map_err(|e| {
                    ApiError::ConfigurationError(format!("Invalid base URL: {e}"))
                })
            })?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ApiError::ConfigurationError(format!(
                "Invalid base URL: expected an http(s) URL, got {base_url}"
            )));
        }

        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| ApiError::ConfigurationError("API key is required".into()))?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|_| {
                ApiError::ConfigurationError("API key contains invalid header characters".into())
            })?;
        bearer.set_sensitive(true);

        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("panel-client/", env!("CARGO_PKG_VERSION")));

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .danger_accept_invalid_certs(self.accept_invalid_certs)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    ApiError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        Ok(PanelClient {
            inner: Arc::new(ClientInner {
                base_url,
                bearer,
                timeout,
                http_client,
            }),
        })
    }
}

struct ClientInner {
    base_url: Url,
    /// Pre-rendered `Authorization` value, marked sensitive.
    bearer: HeaderValue,
    timeout: Duration,
    http_client: ReqwestClient,
}

/// Client for the panel's application API.
///
/// Configuration is fixed at construction; cloning is cheap and clones share
/// the underlying connection pool. Safe to use from many tasks at once.
#[derive(Clone)]
pub struct PanelClient {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for PanelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl PanelClient {
    pub fn builder() -> PanelClientBuilder {
        PanelClientBuilder::default()
    }

    /// The configured panel base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Sends one request to the application API and returns the raw body.
    ///
    /// A 2xx response yields its body bytes, empty for bodiless responses
    /// such as `204 No Content`. Any other status is classified by
    /// [`decode_error`]. Failures before a status is available are reported
    /// as [`ApiError::Transport`]. Nothing is retried.
    pub async fn dispatch(&self, endpoint: &Endpoint, verb: Verb) -> ApiResult<Vec<u8>> {
        let url = endpoint.to_url(&self.inner.base_url)?;
        let method = verb.method();

        log::debug!("{method} {url}");

        let mut request = self
            .inner
            .http_client
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.inner.bearer.clone())
            .header(ACCEPT, APPLICATION_JSON);

        if let Some(body) = verb.into_body() {
            request = request.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        log::debug!("{method} {endpoint} -> {status} ({} bytes)", body.len());

        if status.is_success() {
            Ok(body)
        } else {
            Err(decode_error(status, &body))
        }
    }

    /// Make a typed request to the panel API.
    ///
    /// Serializes `body` as JSON (POST and PATCH only) and deserializes the
    /// response body into `R`.
    pub(crate) async fn request<T, R>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<T>,
    ) -> ApiResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let body = body.map(|data| serde_json::to_vec(&data)).transpose()?;
        let bytes = self.dispatch(endpoint, Verb::new(method, body)?).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Make a request whose response body is not needed.
    pub(crate) async fn request_empty(&self, endpoint: &Endpoint, verb: Verb) -> ApiResult<()> {
        self.dispatch(endpoint, verb).await.map(|_| ())
    }

    /// Makes a raw request to the application API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the type-safe wrappers.
    /// Use the typed API methods (like `servers()`, `users()`) when possible.
    ///
    /// # Arguments
    ///
    /// * `method` - GET, POST, PATCH or DELETE.
    /// * `endpoint` - Path below `/api/application`, e.g. `"nodes/3"`. Must
    ///   not contain a query string or fragment. Segments are escaped by the
    ///   client, so pass them unescaped.
    /// * `body` - Optional request body (POST and PATCH only).
    ///
    /// An empty success body is returned as `Value::Null`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use panel_client::{PanelClient, ApiError};
    /// # use http::Method;
    /// # async fn example() -> Result<(), ApiError> {
    /// let client = PanelClient::builder()
    ///     .base_url("https://panel.example.com")
    ///     .api_key("ptla_xxxxxxxx")
    ///     .build()?;
    ///
    /// let nodes = client.raw_request(Method::GET, "nodes", None::<()>).await?;
    /// println!("Nodes: {nodes}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<T>,
    ) -> ApiResult<Value>
    where
        T: Serialize,
    {
        let endpoint = Endpoint::parse(endpoint)?;
        let body = body.map(|data| serde_json::to_vec(&data)).transpose()?;
        let bytes = self.dispatch(&endpoint, Verb::new(method, body)?).await?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Gets the server API interface.
    pub fn servers(&self) -> servers::ServerHandler {
        servers::ServerHandler::new(self.clone())
    }

    /// Gets the user API interface.
    pub fn users(&self) -> users::UserHandler {
        users::UserHandler::new(self.clone())
    }
}
