//
//  instaapi
//  api/business/statistics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account statistics.
//!
//! The statistics query answers with the business manager's dashboard for
//! the logged-in account: headline counts, the four account insight metrics
//! with their weekly charts, follower demographics, top posts and recent
//! stories.
//!
//! # Response Shape
//!
//! ```json
//! {"data": {"user": {
//!     "id": "...", "username": "...", "followers_count": 1200,
//!     "business_manager": {
//!         "account_summary_unit": {"posts_count": 10, ...},
//!         "account_insights_unit": {"impressions_metric_count": 900, ...},
//!         "followers_unit": {"gender_graph": {"data_points": [...]}, ...},
//!         "top_posts_unit": {"top_posts": {"edges": [...]}},
//!         "stories_unit": {"last_week_stories_count": 2, "stories": {"edges": [...]}}
//!     }
//! }}}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insights::InlineInsightsResponse;
use crate::api::common::{
    opt_string_or_number, require_data, ApiError, DataPoint, Edges, GraphErrorResponse,
    GraphResponse, ImageUri,
};

/// Business dashboard of the logged-in account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Business manager id of the account.
    pub id: String,
    pub instagram_user_id: Option<String>,
    pub username: String,
    pub profile_picture_url: Option<String>,
    pub followers_count: u64,
    pub followers_delta_from_last_week: i64,
    pub posts_count: u64,
    pub posts_delta_from_last_week: i64,
    pub impressions: InsightMetric,
    pub reach: InsightMetric,
    pub profile_visits: InsightMetric,
    pub website_visits: InsightMetric,
    pub followers: FollowersInsights,
    pub top_posts: Vec<InsightsMedia>,
    pub last_week_stories_count: u64,
    pub stories: Vec<InsightsMedia>,
}

/// A weekly account metric with its daily chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightMetric {
    pub count: u64,
    pub delta_from_last_week: i64,
    pub graph: Vec<DataPoint>,
}

/// Follower demographics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowersInsights {
    pub delta_from_last_week: i64,
    pub gender: Vec<DataPoint>,
    pub age: Vec<DataPoint>,
    pub top_cities: Vec<DataPoint>,
    pub top_countries: Vec<DataPoint>,
    /// Follower activity per weekday.
    pub week_daily: Vec<DataPoint>,
}

/// A post or story as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsMedia {
    pub id: String,
    pub instagram_media_id: Option<String>,
    /// `IMAGE`, `VIDEO`, `CAROUSEL_V2`, ...
    pub media_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub state: Option<String>,
    pub impressions: u64,
    pub reach: u64,
    pub profile_views: u64,
}

// Raw response shapes

#[derive(Debug, Deserialize)]
pub(crate) struct StatisticsResponse {
    #[serde(default)]
    data: Option<StatisticsData>,
    #[serde(default)]
    errors: Vec<GraphErrorResponse>,
}

#[derive(Debug, Deserialize)]
struct StatisticsData {
    #[serde(default)]
    user: Option<StatisticsUserResponse>,
}

#[derive(Debug, Deserialize)]
struct StatisticsUserResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    instagram_user_id: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    profile_picture: Option<ImageUri>,
    #[serde(default)]
    followers_count: Option<u64>,
    #[serde(default)]
    followers_delta_from_last_week: Option<i64>,
    #[serde(default)]
    business_manager: Option<BusinessManagerResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct BusinessManagerResponse {
    #[serde(default)]
    account_summary_unit: Option<AccountSummaryResponse>,
    #[serde(default)]
    account_insights_unit: Option<AccountInsightsResponse>,
    #[serde(default)]
    followers_unit: Option<FollowersUnitResponse>,
    #[serde(default)]
    top_posts_unit: Option<TopPostsUnitResponse>,
    #[serde(default)]
    stories_unit: Option<StoriesUnitResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct AccountSummaryResponse {
    #[serde(default)]
    posts_count: Option<u64>,
    #[serde(default)]
    posts_delta_from_last_week: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct AccountInsightsResponse {
    #[serde(default)]
    impressions_metric_count: Option<u64>,
    #[serde(default)]
    impressions_metric_delta_from_last_week: Option<i64>,
    #[serde(default)]
    impressions_metric_graph: Option<GraphResponse>,
    #[serde(default)]
    reach_metric_count: Option<u64>,
    #[serde(default)]
    reach_metric_delta_from_last_week: Option<i64>,
    #[serde(default)]
    reach_metric_graph: Option<GraphResponse>,
    #[serde(default)]
    profile_visits_metric_count: Option<u64>,
    #[serde(default)]
    profile_visits_metric_delta_from_last_week: Option<i64>,
    #[serde(default)]
    profile_visits_metric_graph: Option<GraphResponse>,
    #[serde(default)]
    website_visits_metric_count: Option<u64>,
    #[serde(default)]
    website_visits_metric_delta_from_last_week: Option<i64>,
    #[serde(default)]
    website_visits_metric_graph: Option<GraphResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct FollowersUnitResponse {
    #[serde(default)]
    followers_delta_from_last_week: Option<i64>,
    #[serde(default)]
    gender_graph: Option<GraphResponse>,
    #[serde(default)]
    all_followers_age_graph: Option<GraphResponse>,
    #[serde(default)]
    followers_top_cities_graph: Option<GraphResponse>,
    #[serde(default)]
    followers_top_countries_graph: Option<GraphResponse>,
    #[serde(default)]
    week_daily_followers_graph: Option<GraphResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct TopPostsUnitResponse {
    #[serde(default)]
    top_posts: Edges<InsightsMediaResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct StoriesUnitResponse {
    #[serde(default)]
    last_week_stories_count: Option<u64>,
    #[serde(default)]
    stories: Edges<InsightsMediaResponse>,
}

#[derive(Debug, Deserialize)]
struct InsightsMediaResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    instagram_media_id: Option<String>,
    #[serde(default)]
    instagram_media_type: Option<String>,
    #[serde(default)]
    creation_time: Option<i64>,
    #[serde(default)]
    image: Option<ImageUri>,
    #[serde(default)]
    inline_insights_node: Option<InlineInsightsResponse>,
}

fn metric(count: Option<u64>, delta: Option<i64>, graph: Option<GraphResponse>) -> InsightMetric {
    InsightMetric {
        count: count.unwrap_or(0),
        delta_from_last_week: delta.unwrap_or(0),
        graph: GraphResponse::into_points(graph),
    }
}

impl From<InsightsMediaResponse> for InsightsMedia {
    fn from(raw: InsightsMediaResponse) -> Self {
        let insights = raw.inline_insights_node.unwrap_or_default();
        let metrics = insights.metrics.unwrap_or_default();
        Self {
            id: raw.id.unwrap_or_default(),
            instagram_media_id: raw.instagram_media_id,
            media_type: raw.instagram_media_type,
            created_at: raw
                .creation_time
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
            image_url: raw.image.map(|i| i.uri),
            state: insights.state,
            impressions: metrics.impression_count.unwrap_or(0),
            reach: metrics.reach_count.unwrap_or(0),
            profile_views: metrics.owner_profile_views_count.unwrap_or(0),
        }
    }
}

impl TryFrom<StatisticsResponse> for Statistics {
    type Error = ApiError;

    fn try_from(raw: StatisticsResponse) -> Result<Self, Self::Error> {
        let user = require_data(raw.data.and_then(|d| d.user), &raw.errors, "data.user")?;
        let manager = user.business_manager.unwrap_or_default();
        let summary = manager.account_summary_unit.unwrap_or_default();
        let account = manager.account_insights_unit.unwrap_or_default();
        let followers = manager.followers_unit.unwrap_or_default();
        let top_posts = manager.top_posts_unit.unwrap_or_default();
        let stories = manager.stories_unit.unwrap_or_default();

        Ok(Self {
            id: user.id.unwrap_or_default(),
            instagram_user_id: user.instagram_user_id,
            username: user.username.unwrap_or_default(),
            profile_picture_url: user.profile_picture.map(|p| p.uri),
            followers_count: user.followers_count.unwrap_or(0),
            followers_delta_from_last_week: user.followers_delta_from_last_week.unwrap_or(0),
            posts_count: summary.posts_count.unwrap_or(0),
            posts_delta_from_last_week: summary.posts_delta_from_last_week.unwrap_or(0),
            impressions: metric(
                account.impressions_metric_count,
                account.impressions_metric_delta_from_last_week,
                account.impressions_metric_graph,
            ),
            reach: metric(
                account.reach_metric_count,
                account.reach_metric_delta_from_last_week,
                account.reach_metric_graph,
            ),
            profile_visits: metric(
                account.profile_visits_metric_count,
                account.profile_visits_metric_delta_from_last_week,
                account.profile_visits_metric_graph,
            ),
            website_visits: metric(
                account.website_visits_metric_count,
                account.website_visits_metric_delta_from_last_week,
                account.website_visits_metric_graph,
            ),
            followers: FollowersInsights {
                delta_from_last_week: followers.followers_delta_from_last_week.unwrap_or(0),
                gender: GraphResponse::into_points(followers.gender_graph),
                age: GraphResponse::into_points(followers.all_followers_age_graph),
                top_cities: GraphResponse::into_points(followers.followers_top_cities_graph),
                top_countries: GraphResponse::into_points(followers.followers_top_countries_graph),
                week_daily: GraphResponse::into_points(followers.week_daily_followers_graph),
            },
            top_posts: top_posts
                .top_posts
                .into_nodes()
                .into_iter()
                .map(InsightsMedia::from)
                .collect(),
            last_week_stories_count: stories.last_week_stories_count.unwrap_or(0),
            stories: stories
                .stories
                .into_nodes()
                .into_iter()
                .map(InsightsMedia::from)
                .collect(),
        })
    }
}
