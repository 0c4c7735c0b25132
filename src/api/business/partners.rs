//
//  instaapi
//  api/business/partners.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Business profile buttons.
//!
//! A profile button ("Book", "Order food", ...) is provided by a partner app.
//! The partner bundle lists the partners the account may use; a URL must be
//! validated against a partner before it is attached to a button.

use serde::{Deserialize, Serialize};

use crate::api::common::opt_string_or_number;

/// A partner app that can back a profile action button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessPartner {
    /// App id of the partner. Required to validate URLs.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub app_id: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub partner_name: Option<String>,

    #[serde(default)]
    pub profile_pic_url: Option<String>,

    /// Button label shown on the profile.
    #[serde(default)]
    pub label: Option<String>,

    /// Example of a URL the partner accepts.
    #[serde(default)]
    pub sample_url: Option<String>,
}

impl BusinessPartner {
    /// Partner with only an app id, enough for URL validation.
    pub fn with_app_id(app_id: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id.into()),
            ..Default::default()
        }
    }

    /// The app id, if present and non-empty.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PartnersResponse {
    #[serde(default)]
    pub(crate) partners: Vec<BusinessPartner>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateUrlResponse {
    #[serde(default)]
    pub(crate) is_valid: bool,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
}
