//
//  instaapi
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared fixtures for the API integration tests.

#![allow(dead_code)]

use instaapi::api::InstaClient;
use instaapi::auth::{AndroidDevice, LoggedInUser, Session};

pub const USER_PK: u64 = 1784140;
pub const USERNAME: &str = "Corner.Shop";
pub const CSRF: &str = "csrf-token-123";

pub fn session() -> Session {
    Session::authenticated(USERNAME, LoggedInUser::new(USER_PK, USERNAME), CSRF)
}

/// Client logged in as [`USERNAME`], pointed at `base_url` for both REST and
/// GraphQL.
pub fn client(base_url: &str) -> InstaClient {
    client_with_session(base_url, session())
}

pub fn client_with_session(base_url: &str, session: Session) -> InstaClient {
    InstaClient::new(AndroidDevice::from_seed("integration"), session)
        .unwrap()
        .with_endpoints(base_url, base_url)
        .unwrap()
}

/// Client whose session never logged in.
pub fn anonymous_client(base_url: &str) -> InstaClient {
    let session = Session {
        username: USERNAME.to_string(),
        ..Default::default()
    };
    client_with_session(base_url, session)
}

/// A base URL nothing listens on.
pub const DEAD_URL: &str = "http://127.0.0.1:1";
