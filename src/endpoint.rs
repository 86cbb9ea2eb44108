//! Typed paths for the panel's application API.
//!
//! Every accessor builds its [`Endpoint`] from one of the constructors below,
//! so identifiers are always pushed as single path segments (and therefore
//! percent-encoded) instead of being spliced into a string.

use std::fmt;

use url::Url;

use crate::{ApiError, ApiResult};

/// Namespace every application API path lives under.
const API_NAMESPACE: [&str; 2] = ["api", "application"];

/// A path relative to `{base_url}/api/application`, plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    /// `servers`
    pub fn servers() -> Self {
        Self::from_segments(["servers"])
    }

    /// `servers/{id}`
    pub fn server(id: u64) -> Self {
        Self::from_segments(["servers".to_string(), id.to_string()])
    }

    /// `servers/{id}?include=allocations`
    pub fn server_with_allocations(id: u64) -> Self {
        Self::server(id).include("allocations")
    }

    /// `servers/{id}/details`
    pub fn server_details(id: u64) -> Self {
        Self::server(id).child("details")
    }

    /// `servers/{id}/build`
    pub fn server_build(id: u64) -> Self {
        Self::server(id).child("build")
    }

    /// `servers/{id}/startup`
    pub fn server_startup(id: u64) -> Self {
        Self::server(id).child("startup")
    }

    /// `users`
    pub fn users() -> Self {
        Self::from_segments(["users"])
    }

    /// `users/{id}`
    pub fn user(id: u64) -> Self {
        Self::from_segments(["users".to_string(), id.to_string()])
    }

    /// `users/external/{external_id}`
    ///
    /// Fails for ids that cannot be sent as one segment: empty, `.` and `..`.
    pub fn user_by_external(external_id: &str) -> ApiResult<Self> {
        if matches!(external_id, "" | "." | "..") {
            return Err(ApiError::InvalidEndpoint(format!(
                "external id cannot be used as a path segment: {external_id:?}"
            )));
        }
        Ok(Self::from_segments(["users", "external", external_id]))
    }

    /// Parses a caller-supplied relative path such as `"nodes/3"`.
    ///
    /// Paths must be path-only: no scheme, host, query string or fragment,
    /// and no empty or dot segments. A single leading slash is allowed.
    ///
    /// Segments are taken literally and escaped when the URL is built, so
    /// pass them unescaped: `"nodes/a b"`, not `"nodes/a%20b"`.
    pub fn parse(path: &str) -> ApiResult<Self> {
        if path.contains("://") {
            return Err(ApiError::InvalidEndpoint(format!(
                "endpoint must be relative, got {path:?}"
            )));
        }
        if path.contains('?') || path.contains('#') {
            return Err(ApiError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {path:?}"
            )));
        }

        let trimmed = path.strip_prefix('/').unwrap_or(path);
        if trimmed.is_empty() {
            return Err(ApiError::InvalidEndpoint("endpoint must not be empty".into()));
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments
            .iter()
            .any(|s| s.is_empty() || *s == "." || *s == "..")
        {
            return Err(ApiError::InvalidEndpoint(format!(
                "endpoint contains an empty or relative segment: {path:?}"
            )));
        }

        Ok(Self::from_segments(segments))
    }

    /// Appends a path segment.
    pub fn child(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Adds an `include=` parameter for eager-loaded relationships.
    pub fn include(self, relationship: &str) -> Self {
        self.query("include", relationship)
    }

    /// Adds a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Path segments below the API namespace.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves this endpoint against the panel base URL.
    pub(crate) fn to_url(&self, base_url: &Url) -> ApiResult<Url> {
        let mut url = base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::ConfigurationError(format!("Base URL cannot be a base: {base_url}"))
            })?;
            path.pop_if_empty().extend(API_NAMESPACE).extend(&self.segments);
        }
        url.set_fragment(None);
        if self.query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}
