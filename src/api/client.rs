//
//  instaapi
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Private API
//!
//! This module provides the core HTTP client shared by every feature area.
//! It owns the transport, the device and session the requests are made for,
//! the URI builder and the request signer.
//!
//! ## Features
//!
//! - Device headers and user agent on every request
//! - Plain form requests and signed (`signed_body`) requests
//! - One round-trip per call, body read as text
//! - HTTP status and payload status checks on [`RawResponse`]
//! - Failure logging through `tracing`

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::business::BusinessApi;
use super::common::{ApiError, ApiResult, StatusResponse};
use super::direct::DirectApi;
use super::signing::{ApiVersion, PlaceholderSigner, RequestSigner};
use super::uri::UriBuilder;
use crate::auth::{AndroidDevice, LoggedInUser, Session};
use crate::config::ApiConfig;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// The main HTTP client for the private API.
///
/// A client is bound to one session and one device for its whole life.
/// Feature areas are reached through handles borrowed from the client:
///
/// ```rust,no_run
/// use instaapi::api::InstaClient;
/// use instaapi::auth::{AndroidDevice, LoggedInUser, Session};
///
/// # async fn example() -> anyhow::Result<()> {
/// let session = Session::authenticated("my.shop", LoggedInUser::new(1, "my.shop"), "csrf");
/// let client = InstaClient::new(AndroidDevice::generate(), session)?;
///
/// let stats = client.business().statistics().await?;
/// println!("{} followers", stats.followers_count);
/// # Ok(())
/// # }
/// ```
///
/// # Concurrency
///
/// The client is `Send + Sync`; calls may be issued concurrently. It keeps no
/// state between calls.
pub struct InstaClient {
    /// The underlying HTTP client, carrying the device headers
    http: Client,
    uris: UriBuilder,
    device: AndroidDevice,
    session: Session,
    version: ApiVersion,
    signer: Box<dyn RequestSigner>,
    locale: String,
    timezone: String,
}

impl InstaClient {
    /// Creates a client for the production endpoints with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client could not be created or the
    /// session's authorization value is not a valid header value.
    pub fn new(device: AndroidDevice, session: Session) -> Result<Self> {
        Self::from_config(&ApiConfig::default(), device, session)
    }

    /// Creates a client from configuration.
    ///
    /// Endpoints, locale, timezone, timeout and the advertised app version
    /// come from `config`.
    pub fn from_config(
        config: &ApiConfig,
        device: AndroidDevice,
        session: Session,
    ) -> Result<Self> {
        let mut version = ApiVersion::default();
        if let Some(app_version) = &config.app_version {
            version.app_version = app_version.clone();
        }
        if let Some(code) = &config.app_version_code {
            version.app_version_code = code.clone();
        }

        let uris = UriBuilder::new(&config.api_url, &config.graph_url)?;
        let headers = default_headers(&device, &session, &version, &config.locale)?;
        let http = Client::builder()
            .user_agent(device.user_agent(&version, &config.locale))
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            uris,
            signer: Box::new(PlaceholderSigner::from(&version)),
            device,
            session,
            version,
            locale: config.locale.clone(),
            timezone: config.timezone.clone(),
        })
    }

    /// Replaces the request signer.
    pub fn with_signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Box::new(signer);
        self
    }

    /// Points the client at other base URLs (proxies, test servers).
    pub fn with_endpoints(mut self, api_url: &str, graph_url: &str) -> ApiResult<Self> {
        self.uris = UriBuilder::new(api_url, graph_url)?;
        Ok(self)
    }

    /// Business account operations.
    pub fn business(&self) -> BusinessApi<'_> {
        BusinessApi::new(self)
    }

    /// Direct thread operations.
    pub fn direct(&self) -> DirectApi<'_> {
        DirectApi::new(self)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn device(&self) -> &AndroidDevice {
        &self.device
    }

    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    pub fn uris(&self) -> &UriBuilder {
        &self.uris
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub(crate) fn signer(&self) -> &dyn RequestSigner {
        self.signer.as_ref()
    }

    /// Validates the session and returns the logged-in user.
    pub(crate) fn require_user(&self) -> ApiResult<&LoggedInUser> {
        self.session.validate()
    }

    /// `_uuid` form value.
    pub(crate) fn device_guid(&self) -> String {
        self.device.device_guid.to_string()
    }

    /// Starts a request with the client's default headers.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Starts a request whose form body is `signed_body=<signer(data)>`.
    ///
    /// `ig_sig_key_version` is added when the signer has one.
    pub(crate) fn signed_request(
        &self,
        method: Method,
        url: Url,
        data: &serde_json::Value,
    ) -> RequestBuilder {
        let mut form = vec![("signed_body", self.signer.sign(&data.to_string()))];
        if let Some(version) = self.signer.key_version() {
            form.push(("ig_sig_key_version", version.to_string()));
        }
        self.request(method, url).form(&form)
    }

    /// Executes one request and reads the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the request could not be sent or the
    /// body could not be read. HTTP statuses are not checked here.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> ApiResult<RawResponse> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), %status, "response received");
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    /// Runs an operation and logs it if it fails.
    pub(crate) async fn logged<T, F>(&self, operation: &'static str, future: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        let result = future.await;
        if let Err(error) = &result {
            tracing::warn!(operation, %error, "request failed");
        }
        result
    }
}

/// Headers sent with every request.
fn default_headers(
    device: &AndroidDevice,
    session: &Session,
    version: &ApiVersion,
    locale: &str,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut insert = |name: &'static str, value: &str| -> Result<()> {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_str(value)?);
        Ok(())
    };

    insert("x-ig-app-id", &version.app_id)?;
    insert("x-ig-capabilities", &version.capabilities)?;
    insert("x-ig-connection-type", "WIFI")?;
    insert("x-ig-device-id", &device.device_guid.to_string())?;
    insert("x-ig-android-id", &device.device_id)?;
    insert("x-ig-app-locale", &locale.replace('-', "_"))?;
    insert("x-fb-http-engine", "Liger")?;
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(locale)?);

    if let Some(authorization) = &session.authorization {
        let mut value = HeaderValue::from_str(authorization)?;
        value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, value);
    }
    Ok(headers)
}

/// A response whose body has been read but not yet interpreted.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Fails with [`ApiError::UnexpectedResponse`] on a non-2xx status.
    pub fn ensure_success(self) -> ApiResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ApiError::unexpected(self.status, &self.body))
        }
    }

    /// Decodes the body.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    fn status_envelope(&self) -> ApiResult<StatusResponse> {
        self.json::<StatusResponse>()
    }

    /// Fails when the payload carries a `status` field other than `"ok"`.
    /// Payloads without a `status` field pass.
    pub fn check_status(&self) -> ApiResult<()> {
        let envelope = self.status_envelope()?;
        match envelope.status {
            Some(_) if !envelope.is_ok() => Err(ApiError::unexpected(self.status, &self.body)),
            _ => Ok(()),
        }
    }

    /// Fails unless the payload carries `"status": "ok"`.
    pub fn require_ok(&self) -> ApiResult<StatusResponse> {
        let envelope = self.status_envelope()?;
        if envelope.is_ok() {
            Ok(envelope)
        } else {
            Err(ApiError::unexpected(self.status, &self.body))
        }
    }
}
