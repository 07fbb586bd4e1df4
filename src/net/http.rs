//! JSON API client for the Spindle backend.
//!
//! DESIGN
//! ======
//! One `reqwest::Client` per `ApiClient`, built with the configured
//! timeouts and a cookie store so server session cookies ride along on
//! every request. Responses are decoded and classified here — transport
//! failure, non-2xx status, malformed JSON, or an application error
//! envelope — so callers never inspect raw responses.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged with its endpoint key and returned as a
//! [`RequestError`]; there are no automatic retries. Retry policy, where
//! wanted, belongs to callers.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde_json::Value;

use super::endpoints::{QueryParams, url_for};
use super::error::RequestError;
use crate::config::EnvConfig;

/// Per-request options: method, parameters, JSON body, bearer token.
#[derive(Debug, Default)]
pub struct RequestOptions<'a> {
    /// HTTP method; defaults to GET.
    pub method: reqwest::Method,
    /// Query parameters (static endpoints) or path parameters (builders).
    pub params: QueryParams<'a>,
    /// JSON request body, sent with a JSON content type.
    pub body: Option<&'a Value>,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<&'a str>,
}

impl<'a> RequestOptions<'a> {
    #[must_use]
    pub fn get(params: QueryParams<'a>) -> Self {
        Self { params, ..Self::default() }
    }

    #[must_use]
    pub fn post(body: &'a Value) -> Self {
        Self { method: reqwest::Method::POST, body: Some(body), ..Self::default() }
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<&'a str>) -> Self {
        self.bearer = token;
        self
    }
}

/// HTTP client bound to one resolved API base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::ClientBuild`] if the underlying client
    /// cannot be constructed.
    pub fn new(config: &EnvConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| RequestError::ClientBuild(e.to_string()))?;

        Ok(Self { http, base_url: config.api_base_url.trim_end_matches('/').to_owned() })
    }

    /// The base URL this client resolves endpoint keys against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against a registered endpoint key.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] classifying the failure layer; the
    /// decoded JSON body is returned unchanged on success.
    pub async fn request(&self, endpoint: &str, options: RequestOptions<'_>) -> Result<Value, RequestError> {
        let result = self.request_inner(endpoint, options).await;
        if let Err(error) = &result {
            tracing::warn!(endpoint, error = %error, "api request failed");
        }
        result
    }

    /// GET a registered endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(
        &self,
        endpoint: &str,
        params: QueryParams<'_>,
        bearer: Option<&str>,
    ) -> Result<Value, RequestError> {
        self.request(endpoint, RequestOptions::get(params).bearer(bearer))
            .await
    }

    /// POST a JSON body to a registered endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post(&self, endpoint: &str, body: &Value, bearer: Option<&str>) -> Result<Value, RequestError> {
        self.request(endpoint, RequestOptions::post(body).bearer(bearer))
            .await
    }

    async fn request_inner(&self, endpoint: &str, options: RequestOptions<'_>) -> Result<Value, RequestError> {
        let url = url_for(&self.base_url, endpoint, options.params);

        let mut request = self
            .http
            .request(options.method, &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = options.body {
            request = request.json(body);
        }
        if let Some(token) = options.bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RequestError::Http { status: status.as_u16(), body: text });
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| RequestError::Parse(e.to_string()))?;

        if let Some(message) = error_envelope(&value) {
            return Err(RequestError::Api(message));
        }

        Ok(value)
    }
}

/// Extract the message from an application-level `status: "error"` envelope.
fn error_envelope(value: &Value) -> Option<String> {
    if value.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }

    let message = value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("unknown api error");
    Some(message.to_owned())
}
