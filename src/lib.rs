//
//  instaapi
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # instaapi
//!
//! A typed client for the platform's private business API, and the `insta`
//! command-line tool built on it.
//!
//! ## Overview
//!
//! Every operation follows the same steps: check the session, build the URI
//! and payload, send one request, check the HTTP status and the payload
//! status, and convert the raw JSON into a public model. Results are
//! [`ApiResult`](api::ApiResult) values; nothing panics and nothing is
//! retried.
//!
//! ## Features
//!
//! - **Business statistics**: account dashboard, follower demographics, top posts
//! - **Media insights**: headline counts and full post breakdowns
//! - **Profile buttons**: list partners, validate URLs, remove the button
//! - **Categories**: category tree and username-based suggestions
//! - **Direct threads**: star and unstar
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, endpoints and typed operations
//! - [`auth`]: Session, device descriptor and session persistence
//! - [`config`]: Configuration file management
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//! - [`util`]: Formatting helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use instaapi::api::InstaClient;
//! use instaapi::auth::{AndroidDevice, LoggedInUser, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = Session::authenticated("my.shop", LoggedInUser::new(1, "my.shop"), "csrf");
//! let client = InstaClient::new(AndroidDevice::generate(), session)?;
//!
//! let insights = client.business().media_insights("2001").await?;
//! println!("reach {}", insights.reach_count);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Typed client for the private API.
///
/// The client handles device headers, request signing, status checks and
/// response conversion.
pub mod api;

/// Session state and device identity.
///
/// Holds the session the client acts for, the device it presents itself as,
/// and the on-disk/keyring persistence the CLI uses.
pub mod auth;

/// Configuration file management.
///
/// Manages the configuration stored in platform-specific locations:
/// - Linux: `~/.config/insta/config.toml`
/// - macOS: `~/Library/Application Support/insta/config.toml`
/// - Windows: `%APPDATA%\insta\config.toml`
pub mod config;

/// Output formatting for the CLI.
pub mod output;

/// Utility functions and helpers.
pub mod util;

pub use api::{ApiError, ApiResult, InstaClient};

pub use cli::Cli;

pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "insta";

/// Application version constant, taken from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust,no_run
/// use instaapi::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::common::{ApiError, ResponseKind};

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Not logged in, or the platform asked for a new login or a challenge.
    /// Run `insta session import` with a fresh session.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource (media, thread, category) does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// The platform is rate limiting the account. Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;

    /// Exit code for an error returned by the CLI.
    ///
    /// [`ApiError`]s anywhere in the chain are classified; anything else is
    /// [`ERROR`].
    pub fn for_error(error: &anyhow::Error) -> i32 {
        match error.chain().find_map(|e| e.downcast_ref::<ApiError>()) {
            Some(api) if api.is_auth_error() => AUTH_ERROR,
            Some(api) => match api.kind() {
                Some(ResponseKind::NotFound) => NOT_FOUND,
                Some(ResponseKind::RateLimited) => RATE_LIMIT,
                _ => ERROR,
            },
            None => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use reqwest::StatusCode;

        #[test]
        fn test_for_error() {
            let auth = anyhow::Error::new(ApiError::AuthRequired);
            assert_eq!(for_error(&auth), AUTH_ERROR);

            let missing = anyhow::Error::new(ApiError::unexpected(StatusCode::NOT_FOUND, "{}"))
                .context("Failed to fetch insights");
            assert_eq!(for_error(&missing), NOT_FOUND);

            let limited = anyhow::Error::new(ApiError::unexpected(StatusCode::TOO_MANY_REQUESTS, ""));
            assert_eq!(for_error(&limited), RATE_LIMIT);

            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        }
    }
}
