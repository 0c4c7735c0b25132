//
//  instaapi
//  api/business/insights.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Media insights.
//!
//! Two flavors exist: the REST summary (`media_organic_insights`) with four
//! headline counts, and the GraphQL post insights (`data.media`) with the
//! full breakdown of profile actions and impression sources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::{
    opt_string_or_number, require_data, ApiError, ApiResult, DataPoint, GraphErrorResponse,
    ImageUri, NamedValuesResponse,
};

/// Headline insights of a media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInsights {
    #[serde(default)]
    pub reach_count: u64,
    #[serde(default)]
    pub impression_count: u64,
    #[serde(default)]
    pub engagement_count: u64,
    #[serde(default)]
    pub avg_engagement_count: u64,
}

/// Full insights of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullMediaInsights {
    pub id: String,
    pub instagram_media_id: Option<String>,
    pub owner_id: Option<String>,
    pub media_type: Option<String>,
    pub taken_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub has_product_tags: bool,
    pub comment_count: u64,
    pub like_count: u64,
    pub save_count: u64,
    /// Availability of the insights (`AVAILABLE`, `PROCESSING`, ...).
    pub state: Option<String>,
    pub share_count: u64,
    pub profile_views: u64,
    pub reach: u64,
    pub impressions: u64,
    pub follows: u64,
    /// Actions taken on the profile from this post (`BIO_LINK_CLICKED`, `CALL`, ...).
    pub profile_actions: Vec<DataPoint>,
    /// Where impressions came from (`FEED`, `PROFILE`, `HASHTAG`, ...).
    pub impression_sources: Vec<DataPoint>,
}

// Raw response shapes

#[derive(Debug, Deserialize)]
pub(crate) struct MediaInsightsResponse {
    #[serde(default)]
    media_organic_insights: Option<MediaInsights>,
}

impl MediaInsightsResponse {
    pub(crate) fn into_insights(self) -> ApiResult<MediaInsights> {
        self.media_organic_insights
            .ok_or_else(|| ApiError::Malformed("missing media_organic_insights".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FullMediaInsightsResponse {
    #[serde(default)]
    data: Option<FullMediaData>,
    #[serde(default)]
    errors: Vec<GraphErrorResponse>,
}

#[derive(Debug, Deserialize)]
struct FullMediaData {
    #[serde(default)]
    media: Option<FullMediaResponse>,
}

#[derive(Debug, Deserialize)]
struct FullMediaResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(default)]
    creation_time: Option<i64>,
    #[serde(default)]
    has_product_tags: bool,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    instagram_media_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    instagram_media_owner_id: Option<String>,
    #[serde(default)]
    instagram_media_type: Option<String>,
    #[serde(default)]
    image: Option<ImageUri>,
    #[serde(default)]
    comment_count: Option<u64>,
    #[serde(default)]
    like_count: Option<u64>,
    #[serde(default)]
    save_count: Option<u64>,
    #[serde(default)]
    inline_insights_node: Option<InlineInsightsResponse>,
}

/// `inline_insights_node` of posts, stories and full media insights.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct InlineInsightsResponse {
    #[serde(default)]
    pub(crate) state: Option<String>,
    #[serde(default)]
    pub(crate) metrics: Option<InsightsMetricsResponse>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InsightsMetricsResponse {
    #[serde(default)]
    pub(crate) impression_count: Option<u64>,
    #[serde(default)]
    pub(crate) reach_count: Option<u64>,
    #[serde(default)]
    pub(crate) owner_profile_views_count: Option<u64>,
    #[serde(default)]
    owner_account_follows_count: Option<u64>,
    #[serde(default)]
    share_count: Option<ValueResponse>,
    #[serde(default)]
    profile_actions: Option<ProfileActionsResponse>,
    #[serde(default)]
    impressions: Option<ImpressionsResponse>,
}

#[derive(Debug, Deserialize)]
struct ValueResponse {
    #[serde(default)]
    value: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ProfileActionsResponse {
    #[serde(default)]
    actions: Option<NamedValuesResponse>,
}

#[derive(Debug, Deserialize)]
struct ImpressionsResponse {
    #[serde(default)]
    surfaces: Option<NamedValuesResponse>,
}

impl TryFrom<FullMediaInsightsResponse> for FullMediaInsights {
    type Error = ApiError;

    fn try_from(raw: FullMediaInsightsResponse) -> Result<Self, Self::Error> {
        let media = require_data(raw.data.and_then(|d| d.media), &raw.errors, "data.media")?;
        let insights = media.inline_insights_node.unwrap_or_default();
        let metrics = insights.metrics.unwrap_or_default();

        Ok(Self {
            id: media.id.unwrap_or_default(),
            instagram_media_id: media.instagram_media_id,
            owner_id: media.instagram_media_owner_id,
            media_type: media.instagram_media_type,
            taken_at: media
                .creation_time
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
            image_url: media.image.map(|i| i.uri),
            has_product_tags: media.has_product_tags,
            comment_count: media.comment_count.unwrap_or(0),
            like_count: media.like_count.unwrap_or(0),
            save_count: media.save_count.unwrap_or(0),
            state: insights.state,
            share_count: metrics.share_count.and_then(|s| s.value).unwrap_or(0),
            profile_views: metrics.owner_profile_views_count.unwrap_or(0),
            reach: metrics.reach_count.unwrap_or(0),
            impressions: metrics.impression_count.unwrap_or(0),
            follows: metrics.owner_account_follows_count.unwrap_or(0),
            profile_actions: NamedValuesResponse::into_points(
                metrics.profile_actions.and_then(|p| p.actions),
            ),
            impression_sources: NamedValuesResponse::into_points(
                metrics.impressions.and_then(|i| i.surfaces),
            ),
        })
    }
}
