//
//  instaapi
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authorization Storage
//!
//! Keeps the session's `Authorization` header value in the platform
//! keyring (Keychain, Secret Service, Credential Manager), one entry per
//! account under the `instaapi` service.
//!
//! Headless machines usually have no keyring; set
//! `core.use_keyring = false` there and the value stays in `session.json`.

use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "instaapi";

/// Authorization values in the system keyring, keyed by username.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    fn entry(&self, username: &str) -> Result<Entry> {
        Entry::new(&self.service, &username.to_lowercase())
            .with_context(|| format!("Keyring unavailable for @{}", username))
    }

    pub fn save_authorization(&self, username: &str, authorization: &str) -> Result<()> {
        self.entry(username)?
            .set_password(authorization)
            .context("Failed to write the authorization to the keyring")
    }

    /// The stored authorization, or `None` when the account has no entry.
    pub fn authorization(&self, username: &str) -> Result<Option<String>> {
        match self.entry(username)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read the authorization from the keyring"),
        }
    }

    /// Removes the account's entry. A missing entry is not an error.
    pub fn remove_authorization(&self, username: &str) -> Result<()> {
        match self.entry(username)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to remove the authorization from the keyring"),
        }
    }
}
