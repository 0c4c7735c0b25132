//
//  instaapi
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the typed client for the platform's private HTTP API.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with device headers and request handling
//! - [`uri`]: Endpoint URIs
//! - [`signing`]: Request signing seam and app version constants
//! - [`common`]: Shared types (errors, status envelope, GraphQL helpers)
//! - [`media`]: Media models shared by feed-style endpoints
//! - [`business`]: Business account operations (statistics, insights,
//!   profile buttons, categories)
//! - [`direct`]: Direct thread flags
//!
//! ## Usage
//!
//! ```rust,no_run
//! use instaapi::api::InstaClient;
//! use instaapi::auth::{AndroidDevice, LoggedInUser, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = Session::authenticated("my.shop", LoggedInUser::new(1, "my.shop"), "csrf");
//! let client = InstaClient::new(AndroidDevice::generate(), session)?;
//!
//! for category in client.business().categories().await? {
//!     println!("{} {}", category.id, category.name);
//! }
//! client.direct().star_thread("340282366841710300949128").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiResult`]. Failures are [`ApiError`] values:
//!
//! - `AuthRequired`: the session is not logged in (no request is sent)
//! - `UnexpectedResponse`: non-2xx status or a payload status other than `ok`
//! - `Failed`: the platform refused the operation with a message
//! - `Network`: the request could not be completed

/// Core HTTP client wrapper.
pub mod client;

/// Endpoint URIs.
pub mod uri;

/// Request signing and app version constants.
pub mod signing;

/// Common types shared by every feature area.
pub mod common;

/// Media models.
pub mod media;

/// Business account operations.
pub mod business;

/// Direct thread operations.
pub mod direct;

pub use client::InstaClient;

pub use common::{ApiError, ApiResult};
