//
//  instaapi
//  api/signing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Signing and App Version
//!
//! Some endpoints expect their payload wrapped as a `signed_body` form field.
//! The client does not implement the platform's signature algorithm; it
//! delegates to a [`RequestSigner`], and ships [`PlaceholderSigner`], which
//! emits the `<key>.<payload>` form the platform accepts from clients that do
//! not sign.
//!
//! [`ApiVersion`] carries the app identity every request advertises.

/// Identity of the mobile app the client presents itself as.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiVersion {
    /// Public app version, e.g. `"123.0.0.21.115"`.
    pub app_version: String,
    /// Numeric build code sent in the user agent.
    pub app_version_code: String,
    /// Value of the `X-IG-Capabilities` header.
    pub capabilities: String,
    /// Value of the `X-IG-App-ID` header.
    pub app_id: String,
    /// Key placed in front of signed payloads.
    pub signature_key: String,
    /// Value of the `ig_sig_key_version` parameter.
    pub signature_key_version: String,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self {
            app_version: "123.0.0.21.115".to_string(),
            app_version_code: "188791681".to_string(),
            capabilities: "3brTvw==".to_string(),
            app_id: "567067343352427".to_string(),
            signature_key: "SIGNATURE".to_string(),
            signature_key_version: "4".to_string(),
        }
    }
}

/// Produces the `signed_body` value for a serialized payload.
///
/// Implement this to plug in a real signature scheme; the client only ever
/// calls it with the compact JSON of the request payload.
pub trait RequestSigner: Send + Sync {
    /// Returns the `signed_body` value for `payload`.
    fn sign(&self, payload: &str) -> String;

    /// The key prefix used by [`sign`](Self::sign).
    fn signature_key(&self) -> &str;

    /// The `ig_sig_key_version` to send alongside signed bodies, if any.
    fn key_version(&self) -> Option<&str>;
}

/// Emits `<signature_key>.<payload>` without computing a signature.
#[derive(Debug, Clone)]
pub struct PlaceholderSigner {
    key: String,
    key_version: Option<String>,
}

impl PlaceholderSigner {
    pub fn new(key: impl Into<String>, key_version: Option<String>) -> Self {
        Self {
            key: key.into(),
            key_version,
        }
    }
}

impl From<&ApiVersion> for PlaceholderSigner {
    fn from(version: &ApiVersion) -> Self {
        Self::new(
            version.signature_key.clone(),
            Some(version.signature_key_version.clone()),
        )
    }
}

impl RequestSigner for PlaceholderSigner {
    fn sign(&self, payload: &str) -> String {
        format!("{}.{}", self.key, payload)
    }

    fn signature_key(&self) -> &str {
        &self.key
    }

    fn key_version(&self) -> Option<&str> {
        self.key_version.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_signer_from_version() {
        let signer = PlaceholderSigner::from(&ApiVersion::default());
        assert_eq!(signer.sign("{}"), "SIGNATURE.{}");
        assert_eq!(signer.signature_key(), "SIGNATURE");
        assert_eq!(signer.key_version(), Some("4"));
    }

    #[test]
    fn test_placeholder_signer_without_version() {
        let signer = PlaceholderSigner::new("KEY", None);
        assert_eq!(signer.sign(r#"{"a":"b"}"#), r#"KEY.{"a":"b"}"#);
        assert!(signer.key_version().is_none());
    }
}
