//
//  instaapi
//  api/uri.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint URIs
//!
//! Every URI the client calls is built here. REST endpoints hang off the
//! API base under `/api/v1/`; the business GraphQL endpoint lives on the
//! separate graph base.
//!
//! Path parameters (thread ids, media pks) are pushed as single path
//! segments, so they are percent-encoded and cannot escape their segment.

use url::Url;

use crate::api::common::{ApiError, ApiResult};

/// Production base URL for REST endpoints.
pub const DEFAULT_API_URL: &str = "https://i.instagram.com";

/// Production base URL for the business GraphQL endpoint.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.instagram.com";

/// Surface an insights GraphQL query is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSurface {
    Account,
    Post,
}

impl InsightSurface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Post => "post",
        }
    }
}

/// Builds endpoint URIs from the configured base URLs.
#[derive(Debug, Clone)]
pub struct UriBuilder {
    api_base: Url,
    graph_base: Url,
}

impl UriBuilder {
    /// Creates a builder from two base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUri`] if either base is not an absolute URL,
    /// and [`ApiError::InvalidArgument`] if it cannot carry a path
    /// (e.g. `mailto:`).
    pub fn new(api_base: &str, graph_base: &str) -> ApiResult<Self> {
        let api_base = Url::parse(api_base)?;
        let graph_base = Url::parse(graph_base)?;
        for base in [&api_base, &graph_base] {
            if base.cannot_be_a_base() {
                return Err(ApiError::InvalidArgument(format!(
                    "{base} cannot be used as a base URL"
                )));
            }
        }
        Ok(Self {
            api_base,
            graph_base,
        })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn graph_base(&self) -> &Url {
        &self.graph_base
    }

    /// `{base}/<segments...>/` with each segment percent-encoded.
    fn build(base: &Url, segments: &[&str]) -> ApiResult<Url> {
        let mut url = base.clone();
        url.set_query(None);
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::InvalidArgument(format!("{base} cannot be used as a base URL"))
            })?;
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        Ok(url)
    }

    fn api(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut full = vec!["api", "v1"];
        full.extend_from_slice(segments);
        Self::build(&self.api_base, &full)
    }

    /// Ads GraphQL endpoint used for account and post insights.
    pub fn graph_statistics(&self, locale: &str, surface: InsightSurface) -> ApiResult<Url> {
        let mut url = self.api(&["ads", "graphql"])?;
        url.query_pairs_mut()
            .append_pair("locale", locale)
            .append_pair("vc_policy", "insights_policy")
            .append_pair("surface", surface.as_str());
        Ok(url)
    }

    /// Organic insights of a single media.
    pub fn media_single_insights(
        &self,
        media_pk: &str,
        key_version: Option<&str>,
    ) -> ApiResult<Url> {
        let mut url = self.api(&["insights", "media_organic_insights", media_pk])?;
        if let Some(version) = key_version {
            url.query_pairs_mut()
                .append_pair("ig_sig_key_version", version);
        }
        Ok(url)
    }

    pub fn star_thread(&self, thread_id: &str) -> ApiResult<Url> {
        self.api(&["direct_v2", "threads", thread_id, "label"])
    }

    pub fn unstar_thread(&self, thread_id: &str) -> ApiResult<Url> {
        self.api(&["direct_v2", "threads", thread_id, "unlabel"])
    }

    pub fn promotable_media_feeds(&self) -> ApiResult<Url> {
        self.api(&["feed", "promotable_media"])
    }

    /// Instant-experience partners bundle; the signed body travels in the
    /// query string.
    pub fn business_instant_experience(
        &self,
        signed_body: &str,
        key_version: Option<&str>,
    ) -> ApiResult<Url> {
        let mut url = self.api(&["business", "instant_experience", "get_ix_partners_bundle"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("signed_body", signed_body);
            if let Some(version) = key_version {
                query.append_pair("ig_sig_key_version", version);
            }
        }
        Ok(url)
    }

    pub fn business_validate_url(&self) -> ApiResult<Url> {
        self.api(&["business", "instant_experience", "ix_validate_url"])
    }

    pub fn update_business_info(&self) -> ApiResult<Url> {
        self.api(&["accounts", "update_business_info"])
    }

    pub fn business_graphql(&self) -> ApiResult<Url> {
        Self::build(&self.graph_base, &["graphql"])
    }
}
