//
//  instaapi
//  tests/business_api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use instaapi::api::business::BusinessPartner;
use instaapi::api::common::ResponseKind;
use instaapi::api::media::MediaType;
use instaapi::api::ApiError;
use mockito::{Matcher, Server};
use url::Url;

fn form(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

const STATISTICS: &str = r#"{"data": {"user": {
    "id": "1784140", "instagram_user_id": 1784140, "username": "corner.shop",
    "profile_picture": {"uri": "https://cdn.example/pp.jpg"},
    "followers_count": 1200, "followers_delta_from_last_week": 15,
    "business_manager": {
        "account_summary_unit": {"posts_count": 42, "posts_delta_from_last_week": 2},
        "account_insights_unit": {
            "impressions_metric_count": 9000, "impressions_metric_delta_from_last_week": -300,
            "impressions_metric_graph": {"data_points": [{"label": "Mon", "value": 1200}, {"label": "Tue", "value": 1300}]},
            "reach_metric_count": 4000, "reach_metric_delta_from_last_week": 100,
            "profile_visits_metric_count": 150, "profile_visits_metric_delta_from_last_week": 0,
            "website_visits_metric_count": 20, "website_visits_metric_delta_from_last_week": -5
        },
        "followers_unit": {
            "followers_delta_from_last_week": 15,
            "gender_graph": {"data_points": [{"label": "F", "value": 61.5}, {"label": "M", "value": 38.5}]},
            "followers_top_cities_graph": {"data_points": [{"label": "London", "value": 300}]}
        },
        "top_posts_unit": {"top_posts": {"edges": [{"node": {
            "id": "p1", "instagram_media_id": "2001_1784140", "instagram_media_type": "IMAGE",
            "inline_insights_node": {"state": "AVAILABLE",
                "metrics": {"impression_count": 500, "reach_count": 450, "owner_profile_views_count": 7}}
        }}]}},
        "stories_unit": {"last_week_stories_count": 3, "stories": {"edges": []}}
    }
}}}"#;

#[tokio::test]
async fn statistics_maps_dashboard() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/ads/graphql/")
        .match_query(form(&[
            ("locale", "en-US"),
            ("vc_policy", "insights_policy"),
            ("surface", "account"),
        ]))
        .match_header("x-ig-app-id", "567067343352427")
        .match_body(form(&[
            ("access_token", "undefined"),
            ("fb_api_caller_class", "RelayModern"),
            ("doc_id", "1618080801573402"),
            (
                "variables",
                r#"{"query_params":{"access_token":"","id":"1784140"},"timezone":"UTC"}"#,
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(STATISTICS)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let stats = client.business().statistics().await.unwrap();
    mock.assert_async().await;

    assert_eq!(stats.username, "corner.shop");
    assert_eq!(stats.instagram_user_id.as_deref(), Some("1784140"));
    assert_eq!(stats.profile_picture_url.as_deref(), Some("https://cdn.example/pp.jpg"));
    assert_eq!(stats.followers_count, 1200);
    assert_eq!(stats.posts_count, 42);
    assert_eq!(stats.impressions.count, 9000);
    assert_eq!(stats.impressions.delta_from_last_week, -300);
    assert_eq!(stats.impressions.graph.len(), 2);
    assert_eq!(stats.reach.count, 4000);
    assert_eq!(stats.website_visits.delta_from_last_week, -5);
    assert_eq!(stats.followers.gender[0].label, "F");
    assert_eq!(stats.followers.top_cities[0].value, 300.0);
    assert!(stats.followers.age.is_empty());
    assert_eq!(stats.top_posts.len(), 1);
    assert_eq!(stats.top_posts[0].reach, 450);
    assert_eq!(stats.last_week_stories_count, 3);
    assert!(stats.stories.is_empty());
}

#[tokio::test]
async fn statistics_server_error_is_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/ads/graphql/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = common::client(&server.url());
    let err = client.business().statistics().await.unwrap_err();
    assert_eq!(err.kind(), Some(ResponseKind::ServerError));
}

#[tokio::test]
async fn statistics_graphql_error_is_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/ads/graphql/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data": null, "errors": [{"message": "Account is not a business account"}]}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let err = client.business().statistics().await.unwrap_err();
    assert!(matches!(err, ApiError::Failed(ref m) if m == "Account is not a business account"));
}

#[tokio::test]
async fn unauthenticated_session_sends_nothing() {
    let mut server = Server::new_async().await;
    let get = server.mock("GET", Matcher::Any).expect(0).create_async().await;
    let post = server.mock("POST", Matcher::Any).expect(0).create_async().await;

    let client = common::anonymous_client(&server.url());
    let business = client.business();
    assert!(matches!(business.statistics().await, Err(ApiError::AuthRequired)));
    assert!(matches!(business.media_insights("1").await, Err(ApiError::AuthRequired)));
    assert!(matches!(business.promotable_media_feeds().await, Err(ApiError::AuthRequired)));
    assert!(matches!(business.business_buttons().await, Err(ApiError::AuthRequired)));
    assert!(matches!(business.remove_business_button().await, Err(ApiError::AuthRequired)));
    assert!(matches!(business.categories().await, Err(ApiError::AuthRequired)));
    assert!(matches!(business.star_direct_thread("1").await, Err(ApiError::AuthRequired)));
    get.assert_async().await;
    post.assert_async().await;
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    let client = common::client(common::DEAD_URL);
    let err = client.business().promotable_media_feeds().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn media_insights_reads_organic_insights() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/insights/media_organic_insights/2001/")
        .match_query(Matcher::UrlEncoded("ig_sig_key_version".into(), "4".into()))
        .with_status(200)
        .with_body(
            r#"{"media_organic_insights": {"reach_count": 450, "impression_count": 500,
                "engagement_count": 60, "avg_engagement_count": 48}, "status": "ok"}"#,
        )
        .create_async()
        .await;

    let client = common::client(&server.url());
    let insights = client.business().media_insights("2001").await.unwrap();
    mock.assert_async().await;

    assert_eq!(insights.reach_count, 450);
    assert_eq!(insights.impression_count, 500);
    assert_eq!(insights.engagement_count, 60);
    assert_eq!(insights.avg_engagement_count, 48);
}

#[tokio::test]
async fn media_insights_fail_status_is_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/insights/media_organic_insights/2001/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "fail", "message": "Media not found"}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let err = client.business().media_insights("2001").await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedResponse { ref message, .. } if message == "Media not found"));
}

#[tokio::test]
async fn full_media_insights_maps_breakdowns() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/ads/graphql/")
        .match_query(Matcher::UrlEncoded("surface".into(), "post".into()))
        .match_body(form(&[
            ("doc_id", "1527362987318283"),
            ("variables", r#"{"query_params":{"access_token":"","id":"17900"}}"#),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data": {"media": {
                "id": "17900", "instagram_media_id": "2001_1784140", "instagram_media_type": "VIDEO",
                "creation_time": 1546300800, "has_product_tags": true,
                "like_count": 80, "comment_count": 6, "save_count": 11,
                "inline_insights_node": {"state": "AVAILABLE", "metrics": {
                    "share_count": {"value": 4}, "reach_count": 900, "impression_count": 1400,
                    "owner_profile_views_count": 25, "owner_account_follows_count": 3,
                    "profile_actions": {"actions": {"nodes": [{"name": "BIO_LINK_CLICKED", "value": 9}]}},
                    "impressions": {"surfaces": {"nodes": [{"name": "FEED", "value": 1000}]}}
                }}
            }}}"#,
        )
        .create_async()
        .await;

    let client = common::client(&server.url());
    let insights = client.business().full_media_insights("17900").await.unwrap();
    mock.assert_async().await;

    assert_eq!(insights.id, "17900");
    assert_eq!(insights.media_type.as_deref(), Some("VIDEO"));
    assert!(insights.has_product_tags);
    assert_eq!(insights.taken_at.unwrap().timestamp(), 1546300800);
    assert_eq!((insights.like_count, insights.comment_count, insights.save_count), (80, 6, 11));
    assert_eq!(insights.share_count, 4);
    assert_eq!(insights.reach, 900);
    assert_eq!(insights.impressions, 1400);
    assert_eq!(insights.profile_views, 25);
    assert_eq!(insights.follows, 3);
    assert_eq!(insights.profile_actions[0].value, 9.0);
    assert_eq!(insights.impression_sources[0].label, "FEED");
}

#[tokio::test]
async fn promotable_media_feeds_maps_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/feed/promotable_media/")
        .with_status(200)
        .with_body(
            r#"{"items": [
                {"media": {"pk": 2001, "id": "2001_1784140", "code": "Bq1", "media_type": 1,
                           "taken_at": 1546300800, "like_count": 40, "comment_count": 3,
                           "caption": {"text": "Summer sale"}}},
                {"pk": "2002", "media_type": 2, "video_versions": [{"url": "https://cdn.example/v.mp4"}]}
            ], "num_results": 2, "more_available": false, "status": "ok"}"#,
        )
        .create_async()
        .await;

    let client = common::client(&server.url());
    let list = client.business().promotable_media_feeds().await.unwrap();
    mock.assert_async().await;

    assert_eq!(list.page_size, 2);
    assert!(!list.more_available);
    assert_eq!(list.medias.len(), 2);
    assert_eq!(list.medias[0].pk, "2001");
    assert_eq!(list.medias[0].caption.as_deref(), Some("Summer sale"));
    assert_eq!(list.medias[1].media_type, MediaType::Video);
}

#[tokio::test]
async fn business_buttons_sends_signed_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/api/v1/business/instant_experience/get_ix_partners_bundle/",
        )
        .match_query(form(&[("signed_body", "SIGNATURE.{}"), ("ig_sig_key_version", "4")]))
        .with_status(200)
        .with_body(
            r#"{"partners": [
                {"app_id": "1234", "display_name": "Booksy", "label": "Book", "sample_url": "https://booksy.com/x"},
                {"app_id": 5678, "partner_name": "Deliveroo", "label": "Order food"}
            ], "status": "ok"}"#,
        )
        .create_async()
        .await;

    let client = common::client(&server.url());
    let partners = client.business().business_buttons().await.unwrap();
    mock.assert_async().await;

    assert_eq!(partners.len(), 2);
    assert_eq!(partners[0].app_id(), Some("1234"));
    assert_eq!(partners[0].display_name.as_deref(), Some("Booksy"));
    assert_eq!(partners[1].app_id(), Some("5678"));
    assert_eq!(partners[1].label.as_deref(), Some("Order food"));
}

#[tokio::test]
async fn validate_url_accepts_valid_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/business/instant_experience/ix_validate_url/")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("^signed_body=SIGNATURE\\.".into()),
            Matcher::Regex("app_id%22%3A%221234%22".into()),
            Matcher::Regex("_uid%22%3A%221784140%22".into()),
            Matcher::Regex("url%22%3A%22https%3A%2F%2Fbooksy.com%2Fcorner%22".into()),
            Matcher::UrlEncoded("ig_sig_key_version".into(), "4".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"is_valid": true, "status": "ok"}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let url = Url::parse("https://booksy.com/corner").unwrap();
    let valid = client
        .business()
        .validate_url(&BusinessPartner::with_app_id("1234"), &url)
        .await
        .unwrap();
    mock.assert_async().await;
    assert!(valid);
}

#[tokio::test]
async fn validate_url_rejection_carries_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/business/instant_experience/ix_validate_url/")
        .with_status(400)
        .with_body(r#"{"is_valid": false, "error_message": "Enter a valid Booksy link", "status": "fail"}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let url = Url::parse("https://example.com/").unwrap();
    let err = client
        .business()
        .validate_url(&BusinessPartner::with_app_id("1234"), &url)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Failed(ref m) if m == "Enter a valid Booksy link"));
}

#[tokio::test]
async fn validate_url_undecodable_error_is_unexpected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/business/instant_experience/ix_validate_url/")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = common::client(&server.url());
    let url = Url::parse("https://example.com/").unwrap();
    let err = client
        .business()
        .validate_url(&BusinessPartner::with_app_id("1234"), &url)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Some(ResponseKind::ServerError));
}

#[tokio::test]
async fn validate_url_without_app_id_sends_nothing() {
    let mut server = Server::new_async().await;
    let get = server.mock("GET", Matcher::Any).expect(0).create_async().await;
    let post = server.mock("POST", Matcher::Any).expect(0).create_async().await;

    let client = common::client(&server.url());
    let url = Url::parse("https://example.com/").unwrap();
    let err = client
        .business()
        .validate_url(&BusinessPartner::default(), &url)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
    get.assert_async().await;
    post.assert_async().await;
}

#[tokio::test]
async fn subcategories_of_empty_id_sends_nothing() {
    let mut server = Server::new_async().await;
    let post = server.mock("POST", Matcher::Any).expect(0).create_async().await;

    let client = common::client(&server.url());
    for id in ["", "  "] {
        let err = client.business().subcategories(id).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)), "got {err:?}");
    }
    post.assert_async().await;
}

#[tokio::test]
async fn graphql_fail_status_keeps_login_required() {
    let mut server = Server::new_async().await;
    let body = r#"{"status": "fail", "message": "login_required", "error_type": "login_required"}"#;
    server
        .mock("POST", "/api/v1/ads/graphql/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    server
        .mock("POST", "/graphql/")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let business = client.business();
    let errors = [
        business.statistics().await.unwrap_err(),
        business.full_media_insights("17900").await.unwrap_err(),
        business.categories().await.unwrap_err(),
        business.suggested_categories().await.unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), Some(ResponseKind::LoginRequired), "got {err:?}");
        assert!(err.is_auth_error());
    }
}

#[tokio::test]
async fn remove_business_button_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/accounts/update_business_info/")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("is_call_to_action_enabled%22%3A%220%22".into()),
            Matcher::Regex("_csrftoken%22%3A%22csrf-token-123%22".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    assert!(client.business().remove_business_button().await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn remove_business_button_refused() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1/accounts/update_business_info/")
        .with_status(200)
        .with_body(r#"{"status": "fail", "message": "Action not allowed"}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let err = client.business().remove_business_button().await.unwrap_err();
    assert!(matches!(err, ApiError::Failed(ref m) if m == "Action not allowed"));
}

#[tokio::test]
async fn categories_query_root() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql/")
        .match_body(form(&[
            ("query_id", "425892567746558"),
            ("query_params", r#"{"0":"-1"}"#),
            ("locale", "en_US"),
            ("vc_policy", "ads_viewer_context_policy"),
            ("signed_body", "SIGNATURE."),
            ("ig_sig_key_version", "4"),
            ("strip_nulls", "true"),
            ("strip_defaults", "true"),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data": {"categories": [
                {"category_id": "2700", "category_name": "Shopping & Retail"},
                {"category_id": "2612", "category_name": "Restaurant"}
            ]}}"#,
        )
        .create_async()
        .await;

    let client = common::client(&server.url());
    let categories = client.business().categories().await.unwrap();
    mock.assert_async().await;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, "2700");
    assert_eq!(categories[1].name, "Restaurant");
}

#[tokio::test]
async fn subcategories_query_parent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql/")
        .match_body(form(&[
            ("query_id", "425892567746558"),
            ("query_params", r#"{"0":"2700"}"#),
        ]))
        .with_status(200)
        .with_body(r#"{"data": {"categories": [{"category_id": 180164648685982, "category_name": "Clothing Store"}]}}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let categories = client.business().subcategories("2700").await.unwrap();
    mock.assert_async().await;
    assert_eq!(categories[0].id, "180164648685982");
}

#[tokio::test]
async fn suggested_categories_use_lowercased_username() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query_id".into(), "706774002864790".into()),
            Matcher::Regex("page_name%22%3A%22corner\\.shop%22".into()),
            Matcher::Regex("num_result%22%3A%225%22".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data": {"suggested_categories": [{"category_id": "2700", "category_name": "Shopping & Retail"}]}}"#,
        )
        .create_async()
        .await;

    let client = common::client(&server.url());
    let categories = client.business().suggested_categories().await.unwrap();
    mock.assert_async().await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Shopping & Retail");
}

#[tokio::test]
async fn categories_rate_limited() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql/")
        .with_status(429)
        .with_body(r#"{"status": "fail", "message": "Please wait a few minutes before you try again."}"#)
        .create_async()
        .await;

    let client = common::client(&server.url());
    let err = client.business().categories().await.unwrap_err();
    assert_eq!(err.kind(), Some(ResponseKind::RateLimited));
    assert!(!err.is_auth_error());
}
