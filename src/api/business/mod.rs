//
//  instaapi
//  api/business/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Business Account API
//!
//! Operations available to business and creator accounts.
//!
//! ## Operations
//!
//! | Method | Endpoint | Result |
//! |--------|----------|--------|
//! | [`statistics`](BusinessApi::statistics) | ads GraphQL (account) | [`Statistics`] |
//! | [`media_insights`](BusinessApi::media_insights) | organic insights | [`MediaInsights`] |
//! | [`full_media_insights`](BusinessApi::full_media_insights) | ads GraphQL (post) | [`FullMediaInsights`] |
//! | [`star_direct_thread`](BusinessApi::star_direct_thread) | thread label | `bool` |
//! | [`unstar_direct_thread`](BusinessApi::unstar_direct_thread) | thread unlabel | `bool` |
//! | [`promotable_media_feeds`](BusinessApi::promotable_media_feeds) | promotable media feed | [`MediaList`] |
//! | [`business_buttons`](BusinessApi::business_buttons) | instant experience partners | `Vec<`[`BusinessPartner`]`>` |
//! | [`validate_url`](BusinessApi::validate_url) | instant experience URL check | `bool` |
//! | [`remove_business_button`](BusinessApi::remove_business_button) | update business info | `bool` |
//! | [`suggested_categories`](BusinessApi::suggested_categories) | business GraphQL | `Vec<`[`BusinessCategory`]`>` |
//! | [`categories`](BusinessApi::categories) | business GraphQL | `Vec<`[`BusinessCategory`]`>` |
//! | [`subcategories`](BusinessApi::subcategories) | business GraphQL | `Vec<`[`BusinessCategory`]`>` |
//!
//! Every operation checks the session before sending anything and fails
//! with [`ApiError::AuthRequired`] when it is not logged in.

mod categories;
mod insights;
mod partners;
mod statistics;

pub use categories::BusinessCategory;
pub use insights::{FullMediaInsights, MediaInsights};
pub use partners::BusinessPartner;
pub use statistics::{FollowersInsights, InsightMetric, InsightsMedia, Statistics};

use reqwest::Method;
use serde_json::json;
use url::Url;

use categories::{
    CategoriesResponse, CATEGORIES_QUERY_ID, ROOT_CATEGORY, SUGGESTED_CATEGORIES_QUERY_ID,
};
use insights::{FullMediaInsightsResponse, MediaInsightsResponse};
use partners::{PartnersResponse, ValidateUrlResponse};
use statistics::StatisticsResponse;

use super::client::InstaClient;
use super::common::{ApiError, ApiResult, StatusResponse};
use super::media::{MediaList, MediaListResponse};
use super::uri::InsightSurface;

/// `doc_id` of the account statistics query.
const STATISTICS_DOC_ID: &str = "1618080801573402";

/// `doc_id` of the full post insights query.
const FULL_MEDIA_INSIGHTS_DOC_ID: &str = "1527362987318283";

/// Number of suggested categories requested.
const SUGGESTED_CATEGORIES_COUNT: &str = "5";

/// Handle for business operations, borrowed from an [`InstaClient`].
///
/// # Example
///
/// ```rust,no_run
/// # use instaapi::api::InstaClient;
/// # async fn example(client: &InstaClient) -> instaapi::api::ApiResult<()> {
/// let business = client.business();
/// let stats = business.statistics().await?;
/// println!("reach this week: {}", stats.reach.count);
///
/// for partner in business.business_buttons().await? {
///     println!("{:?}", partner.display_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BusinessApi<'a> {
    client: &'a InstaClient,
}

impl<'a> BusinessApi<'a> {
    pub(crate) fn new(client: &'a InstaClient) -> Self {
        Self { client }
    }

    /// Fetches the business dashboard of the logged-in account.
    pub async fn statistics(&self) -> ApiResult<Statistics> {
        self.client
            .logged("statistics", async {
                let user = self.client.require_user()?;
                let variables = json!({
                    "query_params": {"access_token": "", "id": user.pk.to_string()},
                    "timezone": self.client.timezone(),
                });
                let raw: StatisticsResponse = self
                    .insights_query(InsightSurface::Account, &variables, STATISTICS_DOC_ID)
                    .await?;
                Statistics::try_from(raw)
            })
            .await
    }

    /// Fetches the headline insights of a media by its pk.
    pub async fn media_insights(&self, media_pk: &str) -> ApiResult<MediaInsights> {
        self.client
            .logged("media_insights", async {
                self.client.require_user()?;
                let url = self
                    .client
                    .uris()
                    .media_single_insights(media_pk, self.client.signer().key_version())?;
                let request = self.client.request(Method::GET, url);
                let response = self.client.execute(request).await?.ensure_success()?;
                response.check_status()?;
                response.json::<MediaInsightsResponse>()?.into_insights()
            })
            .await
    }

    /// Fetches the full insights of a post by its GraphQL media id.
    pub async fn full_media_insights(&self, media_id: &str) -> ApiResult<FullMediaInsights> {
        self.client
            .logged("full_media_insights", async {
                self.client.require_user()?;
                let variables = json!({
                    "query_params": {"access_token": "", "id": media_id},
                });
                let raw: FullMediaInsightsResponse = self
                    .insights_query(InsightSurface::Post, &variables, FULL_MEDIA_INSIGHTS_DOC_ID)
                    .await?;
                FullMediaInsights::try_from(raw)
            })
            .await
    }

    /// Stars a direct thread. See [`DirectApi::star_thread`](super::direct::DirectApi::star_thread).
    pub async fn star_direct_thread(&self, thread_id: &str) -> ApiResult<bool> {
        self.client.direct().star_thread(thread_id).await
    }

    /// Unstars a direct thread. See [`DirectApi::unstar_thread`](super::direct::DirectApi::unstar_thread).
    pub async fn unstar_direct_thread(&self, thread_id: &str) -> ApiResult<bool> {
        self.client.direct().unstar_thread(thread_id).await
    }

    /// Lists the account's media that can be promoted.
    ///
    /// `page_size` of the result is the `num_results` the platform reported.
    pub async fn promotable_media_feeds(&self) -> ApiResult<MediaList> {
        self.client
            .logged("promotable_media_feeds", async {
                self.client.require_user()?;
                let url = self.client.uris().promotable_media_feeds()?;
                let request = self.client.request(Method::GET, url);
                let response = self.client.execute(request).await?.ensure_success()?;
                response.check_status()?;
                response.json::<MediaListResponse>().map(MediaList::from)
            })
            .await
    }

    /// Lists the partners available for profile action buttons.
    pub async fn business_buttons(&self) -> ApiResult<Vec<BusinessPartner>> {
        self.client
            .logged("business_buttons", async {
                self.client.require_user()?;
                let signer = self.client.signer();
                let url = self
                    .client
                    .uris()
                    .business_instant_experience(&signer.sign("{}"), signer.key_version())?;
                let request = self.client.request(Method::GET, url);
                let response = self.client.execute(request).await?.ensure_success()?;
                response.check_status()?;
                response.json::<PartnersResponse>().map(|r| r.partners)
            })
            .await
    }

    /// Checks that `url` is acceptable for a button backed by `partner`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidArgument`] if the partner has no app id (nothing
    ///   is sent)
    /// - [`ApiError::Failed`] with the platform's `error_message` when the URL
    ///   is rejected
    pub async fn validate_url(&self, partner: &BusinessPartner, url: &Url) -> ApiResult<bool> {
        self.client
            .logged("validate_url", async {
                let user = self.client.require_user()?;
                let app_id = partner.app_id().ok_or_else(|| {
                    ApiError::InvalidArgument("partner has no app_id".to_string())
                })?;

                let data = json!({
                    "app_id": app_id,
                    "_csrftoken": self.client.session().csrf_token,
                    "url": url.as_str(),
                    "_uid": user.pk.to_string(),
                    "_uuid": self.client.device_guid(),
                });
                let endpoint = self.client.uris().business_validate_url()?;
                let request = self.client.signed_request(Method::POST, endpoint, &data);
                let response = self.client.execute(request).await?;

                // The verdict is in the body even on error statuses.
                let verdict = match response.json::<ValidateUrlResponse>() {
                    Ok(verdict) => verdict,
                    Err(_) if !response.status.is_success() => {
                        return Err(ApiError::unexpected(response.status, &response.body))
                    }
                    Err(e) => return Err(e),
                };
                if verdict.is_valid {
                    return Ok(true);
                }
                match verdict.error_message {
                    Some(message) => Err(ApiError::Failed(message)),
                    None if !response.status.is_success() => {
                        Err(ApiError::unexpected(response.status, &response.body))
                    }
                    None => Err(ApiError::Failed("URL is not valid".to_string())),
                }
            })
            .await
    }

    /// Removes the profile action button.
    pub async fn remove_business_button(&self) -> ApiResult<bool> {
        self.client
            .logged("remove_business_button", async {
                let user = self.client.require_user()?;
                let data = json!({
                    "is_call_to_action_enabled": "0",
                    "_csrftoken": self.client.session().csrf_token,
                    "_uid": user.pk.to_string(),
                    "_uuid": self.client.device_guid(),
                });
                let url = self.client.uris().update_business_info()?;
                let request = self.client.signed_request(Method::POST, url, &data);
                let response = self.client.execute(request).await?.ensure_success()?;

                let status: StatusResponse = response.json()?;
                if status.is_ok() {
                    Ok(true)
                } else {
                    Err(ApiError::Failed(status.message.unwrap_or_else(|| {
                        "Unable to remove business button".to_string()
                    })))
                }
            })
            .await
    }

    /// Categories the platform suggests for the account's username.
    pub async fn suggested_categories(&self) -> ApiResult<Vec<BusinessCategory>> {
        self.client
            .logged("suggested_categories", async {
                self.client.require_user()?;
                let params = json!({
                    "0": {
                        "page_name": self.client.session().username.to_lowercase(),
                        "num_result": SUGGESTED_CATEGORIES_COUNT,
                    }
                });
                self.graph_query(SUGGESTED_CATEGORIES_QUERY_ID, &params)
                    .await?
                    .into_suggested()
            })
            .await
    }

    /// Top-level business categories.
    pub async fn categories(&self) -> ApiResult<Vec<BusinessCategory>> {
        self.client
            .logged("categories", self.category_tree(ROOT_CATEGORY))
            .await
    }

    /// Subcategories of `category_id`.
    pub async fn subcategories(&self, category_id: &str) -> ApiResult<Vec<BusinessCategory>> {
        self.client
            .logged("subcategories", self.category_tree(category_id))
            .await
    }

    async fn category_tree(&self, parent: &str) -> ApiResult<Vec<BusinessCategory>> {
        self.client.require_user()?;
        if parent.trim().is_empty() {
            return Err(ApiError::InvalidArgument("category id is empty".to_string()));
        }
        self.graph_query(CATEGORIES_QUERY_ID, &json!({ "0": parent }))
            .await?
            .into_categories()
    }

    /// POSTs an ads GraphQL insights query and decodes the reply.
    async fn insights_query<T: serde::de::DeserializeOwned>(
        &self,
        surface: InsightSurface,
        variables: &serde_json::Value,
        doc_id: &str,
    ) -> ApiResult<T> {
        let url = self
            .client
            .uris()
            .graph_statistics(self.client.locale(), surface)?;
        let form = [
            ("access_token", "undefined".to_string()),
            ("fb_api_caller_class", "RelayModern".to_string()),
            ("variables", variables.to_string()),
            ("doc_id", doc_id.to_string()),
        ];
        let request = self.client.request(Method::POST, url).form(&form);
        let response = self.client.execute(request).await?.ensure_success()?;
        response.check_status()?;
        response.json()
    }

    /// POSTs a business GraphQL query.
    async fn graph_query(
        &self,
        query_id: &str,
        params: &serde_json::Value,
    ) -> ApiResult<CategoriesResponse> {
        let signer = self.client.signer();
        let mut form = vec![
            ("query_id", query_id.to_string()),
            ("locale", self.client.locale().replace('-', "_")),
            ("vc_policy", "ads_viewer_context_policy".to_string()),
            ("signed_body", format!("{}.", signer.signature_key())),
            ("strip_nulls", "true".to_string()),
            ("strip_defaults", "true".to_string()),
            ("query_params", params.to_string()),
        ];
        if let Some(version) = signer.key_version() {
            form.push(("ig_sig_key_version", version.to_string()));
        }

        let url = self.client.uris().business_graphql()?;
        let request = self.client.request(Method::POST, url).form(&form);
        let response = self.client.execute(request).await?.ensure_success()?;
        response.check_status()?;
        response.json()
    }
}
