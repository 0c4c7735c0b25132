//
//  instaapi
//  auth/store.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Session Persistence
//!
//! The CLI keeps one imported session at a time in `session.json` inside the
//! configuration directory, together with the device it belongs to.
//!
//! ```json
//! {
//!   "session": {"username": "...", "logged_in_user": {...}, "csrf_token": "...", "is_authenticated": true},
//!   "device": {"device_guid": "...", "device_id": "android-...", ...}
//! }
//! ```
//!
//! With the keyring enabled, the `authorization` value is moved into the
//! system keyring on save and merged back on load, so it never touches disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{AndroidDevice, KeyringStore, Session};
use crate::config::{read_config_file, write_config_file, Config};

/// File name of the persisted session inside the config directory.
pub const SESSION_FILE: &str = "session.json";

/// A session together with the device it was created on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub session: Session,
    pub device: AndroidDevice,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFormat {
    WithDevice {
        session: Session,
        #[serde(default)]
        device: Option<AndroidDevice>,
    },
    Bare(Session),
}

impl StoredSession {
    /// Parses an exported session.
    ///
    /// Accepts either `{"session": {...}, "device": {...}}` or a bare session
    /// object. When no device is included, one is generated.
    pub fn parse_import(json: &str) -> Result<Self> {
        let parsed: ImportFormat =
            serde_json::from_str(json).context("Session file is not a valid session export")?;
        let (session, device) = match parsed {
            ImportFormat::WithDevice { session, device } => (session, device),
            ImportFormat::Bare(session) => (session, None),
        };
        Ok(Self {
            session,
            device: device.unwrap_or_else(AndroidDevice::generate),
        })
    }
}

/// Reads and writes the persisted session.
pub struct SessionStore {
    path: PathBuf,
    keyring: Option<KeyringStore>,
}

impl SessionStore {
    /// Creates a store at `path`. With `use_keyring`, authorization values
    /// are kept in the system keyring.
    pub fn new(path: impl Into<PathBuf>, use_keyring: bool) -> Self {
        Self {
            path: path.into(),
            keyring: use_keyring.then(KeyringStore::new),
        }
    }

    /// Store at the default location, honoring `core.use_keyring`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Config::config_dir()?.join(SESSION_FILE),
            config.core.use_keyring,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the stored session, or `None` if nothing was imported.
    pub fn load(&self) -> Result<Option<StoredSession>> {
        if !self.exists() {
            return Ok(None);
        }
        let content = read_config_file(&self.path)?;
        let mut stored: StoredSession = serde_json::from_str(&content)
            .with_context(|| format!("Corrupt session file {}", self.path.display()))?;

        if stored.session.authorization.is_none() {
            if let Some(keyring) = &self.keyring {
                stored.session.authorization = keyring.authorization(&stored.session.username)?;
            }
        }
        Ok(Some(stored))
    }

    /// Persists `stored`, moving the authorization into the keyring when
    /// enabled. Without an authorization, any keyring entry for the account
    /// is removed.
    pub fn save(&self, stored: &StoredSession) -> Result<()> {
        let mut on_disk = stored.clone();
        if let Some(keyring) = &self.keyring {
            let username = &on_disk.session.username;
            match on_disk.session.authorization.take() {
                Some(authorization) => keyring.save_authorization(username, &authorization)?,
                // An older import may have left a value for this account.
                None => keyring.remove_authorization(username)?,
            }
        }
        let content = serde_json::to_string_pretty(&on_disk)?;
        write_config_file(&self.path, &content)
    }

    /// Removes the stored session and its keyring entry. Returns `false` if
    /// there was nothing to remove.
    pub fn clear(&self) -> Result<bool> {
        if !self.exists() {
            return Ok(false);
        }
        let content = read_config_file(&self.path)?;
        if let (Some(keyring), Ok(stored)) = (
            &self.keyring,
            serde_json::from_str::<StoredSession>(&content),
        ) {
            keyring.remove_authorization(&stored.session.username)?;
        }
        std::fs::remove_file(&self.path)?;
        Ok(true)
    }
}
