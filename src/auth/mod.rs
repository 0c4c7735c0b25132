//
//  instaapi
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module holds the state the client needs to act as a logged-in user:
//! the [`Session`] (who is logged in, CSRF token, authorization header) and
//! the [`AndroidDevice`] the session was created on.
//!
//! The client never logs in by itself. Sessions are produced elsewhere and
//! imported; see [`SessionStore`] for how the CLI persists them.
//!
//! ## Module Structure
//!
//! - [`device`]: Device descriptor and user agent
//! - [`keyring`]: Secure storage for the authorization header
//! - [`store`]: Session persistence on disk
//!
//! ## Example
//!
//! ```rust
//! use instaapi::auth::{LoggedInUser, Session};
//!
//! let session = Session::authenticated(
//!     "my.business",
//!     LoggedInUser::new(1234567890, "my.business"),
//!     "csrf-token",
//! );
//! assert!(session.validate().is_ok());
//! ```

mod device;
mod keyring;
mod store;

pub use device::*;
pub use keyring::*;
pub use store::*;

use serde::{Deserialize, Serialize};

use crate::api::common::{ApiError, ApiResult};

/// The account a session is logged in as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedInUser {
    /// Numeric primary key of the account.
    pub pk: u64,

    /// Username of the account.
    pub username: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub profile_pic_url: Option<String>,

    #[serde(default)]
    pub is_verified: bool,
}

impl LoggedInUser {
    pub fn new(pk: u64, username: impl Into<String>) -> Self {
        Self {
            pk,
            username: username.into(),
            full_name: None,
            profile_pic_url: None,
            is_verified: false,
        }
    }
}

/// Session data shared by every request.
///
/// # Fields
///
/// * `username` - Username the session was created for
/// * `logged_in_user` - The authenticated account, once known
/// * `csrf_token` - Token echoed in `_csrftoken` form fields
/// * `authorization` - Value of the `Authorization` header, if the session uses one
/// * `is_authenticated` - Whether the session completed login
///
/// # Notes
///
/// - `authorization` is a secret. [`SessionStore`] keeps it in the system
///   keyring rather than on disk when the keyring is enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub username: String,

    #[serde(default)]
    pub logged_in_user: Option<LoggedInUser>,

    #[serde(default)]
    pub csrf_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    #[serde(default)]
    pub is_authenticated: bool,
}

impl Session {
    /// Creates an authenticated session for `user`.
    pub fn authenticated(
        username: impl Into<String>,
        user: LoggedInUser,
        csrf_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            logged_in_user: Some(user),
            csrf_token: csrf_token.into(),
            authorization: None,
            is_authenticated: true,
        }
    }

    /// Sets the `Authorization` header value sent with every request.
    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    /// Checks that the session can be used for authenticated calls.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthRequired`] if the session is not marked
    /// authenticated or has no logged-in user.
    pub fn validate(&self) -> ApiResult<&LoggedInUser> {
        match &self.logged_in_user {
            Some(user) if self.is_authenticated => Ok(user),
            _ => Err(ApiError::AuthRequired),
        }
    }
}
