//! The two request primitives every endpoint is built on.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use vola_auth::{AuthContext, TokenStore};
use vola_config::VolaConfig;

use crate::envelope::{
    ErrorBody, ErrorsField, Unwrapped, envelope_message, normalize_failure, unwrap_body,
    unwrap_submitted,
};
use crate::error::ApiError;

const DEFAULT_TTL_DAYS: u32 = 7;

/// HTTP client for the platform API.
///
/// Holds the session store so that `submit` can persist a credential the
/// backend hands out. Callers never look at HTTP status codes: every outcome
/// is either the unwrapped payload or an [`ApiError`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<TokenStore>,
    ttl_days: u32,
    secure: bool,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
            store,
            ttl_days: DEFAULT_TTL_DAYS,
            secure: true,
        }
    }

    /// Build a client from the loaded configuration. A missing base URL is
    /// reported on the first request, not here.
    pub fn from_config(config: &VolaConfig, store: Arc<TokenStore>) -> Self {
        Self::new(config.require_base_url().unwrap_or_default(), store)
            .with_ttl_days(config.session.ttl_days)
            .with_secure(config.session.secure)
    }

    #[must_use]
    pub const fn with_ttl_days(mut self, ttl_days: u32) -> Self {
        self.ttl_days = ttl_days;
        self
    }

    /// When set, bearer credentials are only sent over https or to loopback.
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// GET a resource and unwrap it.
    ///
    /// Enveloped bodies yield their `data` (a missing `data` deserializes from
    /// `null`); bare bodies are deserialized whole.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when the request never completes,
    /// [`ApiError::Status`] on a non-success status, [`ApiError::Envelope`]
    /// when the envelope reports errors, [`ApiError::Decode`] when the payload
    /// does not match `T`.
    pub async fn fetch_resource<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&AuthContext>,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(ctx) = session {
            self.check_transport(&url)?;
            request = request.header(AUTHORIZATION, format!("Bearer {}", ctx.bearer()));
        }

        tracing::debug!(%path, authenticated = session.is_some(), "GET");
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(%path, status = status.as_u16(), "response");

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
            return Err(status_error(status.as_u16(), &body));
        }

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("{path}: {e}")))?;
        let payload = match unwrap_body(body) {
            Unwrapped::Failed(detail) => {
                let message = envelope_message(&detail);
                return Err(ApiError::Envelope { detail, message });
            }
            Unwrapped::Data(payload) | Unwrapped::Bare(payload) => payload,
        };
        decode(path, payload)
    }

    /// POST a JSON body and unwrap the `data` payload.
    ///
    /// A `data.token` in a successful response is persisted to the session
    /// store before this returns, so the next gate activation sees it.
    /// Envelope errors fail the call only when the response carried no `data`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] carries the normalized message of a failed
    /// response. See [`ApiClient::fetch_resource`] for the other variants.
    pub async fn submit<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(%path, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(%path, status = status.as_u16(), "response");

        let parsed = serde_json::from_slice::<Value>(&bytes);
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &parsed.unwrap_or(Value::Null)));
        }
        let body = parsed.map_err(|e| ApiError::Decode(format!("{path}: {e}")))?;

        let payload = match unwrap_submitted(body) {
            Unwrapped::Failed(detail) => {
                let message = envelope_message(&detail);
                return Err(ApiError::Envelope { detail, message });
            }
            Unwrapped::Data(payload) | Unwrapped::Bare(payload) => payload,
        };

        if let Some(token) = payload
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
        {
            self.store.set(token, self.ttl_days)?;
            tracing::info!(%path, "session credential saved");
        }

        decode(path, payload)
    }

    fn url(&self, path: &str) -> Result<String, ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::MissingBaseUrl);
        }
        Ok(format!("{}{path}", self.base_url))
    }

    fn check_transport(&self, url: &str) -> Result<(), ApiError> {
        if !self.secure {
            return Ok(());
        }
        let Some(rest) = url.strip_prefix("http://") else {
            return Ok(());
        };
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = host_of(authority);
        if is_loopback(host) {
            return Ok(());
        }
        Err(ApiError::InsecureTransport {
            host: host.to_string(),
        })
    }
}

fn status_error(status: u16, body: &Value) -> ApiError {
    ApiError::Status {
        status,
        message: normalize_failure(status, body),
        detail: ErrorBody::from_value(body)
            .errors
            .filter(ErrorsField::is_populated),
    }
}

fn decode<T: DeserializeOwned>(path: &str, payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
}

fn host_of(authority: &str) -> &str {
    let authority = authority.rsplit('@').next().unwrap_or(authority);
    if let Some(bracketed) = authority.strip_prefix('[') {
        return bracketed.split(']').next().unwrap_or(bracketed);
    }
    authority.split(':').next().unwrap_or(authority)
}

fn is_loopback(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost")
        || host
            .parse::<std::net::IpAddr>()
            .is_ok_and(|ip| ip.is_loopback())
}
