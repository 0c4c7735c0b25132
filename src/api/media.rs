//
//  instaapi
//  api/media.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Media types and data structures.
//!
//! Public models for posts returned by feed-style endpoints, and the raw
//! response shapes they are converted from.
//!
//! # Media Types
//!
//! | Raw `media_type` | [`MediaType`] |
//! |------------------|---------------|
//! | `1` | `Image` |
//! | `2` | `Video` |
//! | `8` | `Carousel` |
//! | anything else | `Unknown` |
//!
//! # Notes
//!
//! - Feed items arrive either as bare media objects or wrapped as
//!   `{"media": {...}}`; both are accepted
//! - `pk` and `next_max_id` may be JSON numbers or strings
//! - `taken_at` is a unix timestamp in seconds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{opt_string_or_number, string_or_number};

/// Kind of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Carousel,
    Unknown,
}

impl From<i64> for MediaType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Image,
            2 => Self::Video,
            8 => Self::Carousel,
            _ => Self::Unknown,
        }
    }
}

/// One rendition of an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCandidate {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Owner of a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUser {
    pub pk: String,
    pub username: String,
    pub full_name: Option<String>,
    pub profile_pic_url: Option<String>,
    pub is_verified: bool,
}

/// A post.
///
/// # Fields
///
/// * `pk` - Numeric primary key, as a string
/// * `id` - Media identifier (`<pk>_<owner pk>`)
/// * `code` - Shortcode used in post URLs
/// * `media_type` - Image, video or carousel
/// * `taken_at` - Publication time
/// * `images` - Image renditions, largest first as returned
/// * `carousel` - Children of a carousel post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub pk: String,
    pub id: String,
    pub code: Option<String>,
    pub media_type: MediaType,
    pub taken_at: Option<DateTime<Utc>>,
    pub caption: Option<String>,
    pub like_count: u64,
    pub comment_count: u64,
    pub images: Vec<ImageCandidate>,
    pub video_url: Option<String>,
    pub user: Option<MediaUser>,
    pub carousel: Vec<Media>,
}

impl Media {
    /// Public URL of the post, when the shortcode is known.
    pub fn permalink(&self) -> Option<String> {
        self.code
            .as_ref()
            .map(|code| format!("https://www.instagram.com/p/{}/", code))
    }
}

/// A page of media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaList {
    pub medias: Vec<Media>,
    /// Number of results the platform reported for this page.
    pub page_size: u32,
    pub more_available: bool,
    pub next_max_id: Option<String>,
}

// Raw response shapes

#[derive(Debug, Deserialize)]
pub(crate) struct MediaListResponse {
    #[serde(default)]
    items: Vec<MediaItemResponse>,
    #[serde(default)]
    num_results: u32,
    #[serde(default)]
    more_available: bool,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    next_max_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MediaItemResponse {
    Wrapped { media: MediaResponse },
    Plain(MediaResponse),
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaResponse {
    #[serde(deserialize_with = "string_or_number")]
    pk: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    media_type: i64,
    #[serde(default)]
    taken_at: Option<i64>,
    #[serde(default)]
    caption: Option<CaptionResponse>,
    #[serde(default)]
    like_count: u64,
    #[serde(default)]
    comment_count: u64,
    #[serde(default)]
    image_versions2: Option<ImageVersionsResponse>,
    #[serde(default)]
    video_versions: Vec<VideoVersionResponse>,
    #[serde(default)]
    user: Option<MediaUserResponse>,
    #[serde(default)]
    carousel_media: Vec<MediaResponse>,
}

#[derive(Debug, Deserialize)]
struct CaptionResponse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageVersionsResponse {
    #[serde(default)]
    candidates: Vec<ImageCandidate>,
}

#[derive(Debug, Deserialize)]
struct VideoVersionResponse {
    url: String,
}

#[derive(Debug, Deserialize)]
struct MediaUserResponse {
    #[serde(deserialize_with = "string_or_number")]
    pk: String,
    username: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    profile_pic_url: Option<String>,
    #[serde(default)]
    is_verified: bool,
}

impl From<MediaUserResponse> for MediaUser {
    fn from(raw: MediaUserResponse) -> Self {
        Self {
            pk: raw.pk,
            username: raw.username,
            full_name: raw.full_name.filter(|n| !n.is_empty()),
            profile_pic_url: raw.profile_pic_url,
            is_verified: raw.is_verified,
        }
    }
}

impl From<MediaResponse> for Media {
    fn from(raw: MediaResponse) -> Self {
        let id = raw.id.unwrap_or_else(|| raw.pk.clone());
        Self {
            pk: raw.pk,
            id,
            code: raw.code,
            media_type: MediaType::from(raw.media_type),
            taken_at: raw.taken_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
            caption: raw.caption.and_then(|c| c.text),
            like_count: raw.like_count,
            comment_count: raw.comment_count,
            images: raw
                .image_versions2
                .map(|v| v.candidates)
                .unwrap_or_default(),
            video_url: raw.video_versions.into_iter().next().map(|v| v.url),
            user: raw.user.map(MediaUser::from),
            carousel: raw.carousel_media.into_iter().map(Media::from).collect(),
        }
    }
}

impl From<MediaListResponse> for MediaList {
    fn from(raw: MediaListResponse) -> Self {
        Self {
            medias: raw
                .items
                .into_iter()
                .map(|item| match item {
                    MediaItemResponse::Wrapped { media } | MediaItemResponse::Plain(media) => {
                        Media::from(media)
                    }
                })
                .collect(),
            page_size: raw.num_results,
            more_available: raw.more_available,
            next_max_id: raw.next_max_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "items": [
            {
                "pk": 2001,
                "id": "2001_99",
                "code": "Bq1",
                "media_type": 1,
                "taken_at": 1546300800,
                "caption": {"text": "New collection"},
                "like_count": 40,
                "comment_count": 3,
                "image_versions2": {"candidates": [{"url": "https://cdn/1.jpg", "width": 1080, "height": 1080}]},
                "user": {"pk": "99", "username": "shop", "full_name": "", "is_verified": true}
            },
            {
                "media": {
                    "pk": "2002",
                    "media_type": 8,
                    "caption": null,
                    "carousel_media": [
                        {"pk": 3001, "media_type": 2, "video_versions": [{"url": "https://cdn/v.mp4"}]}
                    ]
                }
            }
        ],
        "num_results": 2,
        "more_available": true,
        "next_max_id": 2002,
        "status": "ok"
    }"#;

    #[test]
    fn test_media_list_conversion() {
        let raw: MediaListResponse = serde_json::from_str(FEED).unwrap();
        let list = MediaList::from(raw);

        assert_eq!(list.page_size, 2);
        assert!(list.more_available);
        assert_eq!(list.next_max_id.as_deref(), Some("2002"));
        assert_eq!(list.medias.len(), 2);

        let first = &list.medias[0];
        assert_eq!(first.pk, "2001");
        assert_eq!(first.id, "2001_99");
        assert_eq!(first.media_type, MediaType::Image);
        assert_eq!(first.caption.as_deref(), Some("New collection"));
        assert_eq!(first.taken_at.unwrap().to_rfc3339(), "2019-01-01T00:00:00+00:00");
        assert_eq!(first.images[0].width, 1080);
        assert_eq!(first.permalink().as_deref(), Some("https://www.instagram.com/p/Bq1/"));
        let user = first.user.as_ref().unwrap();
        assert_eq!(user.pk, "99");
        assert!(user.full_name.is_none());
        assert!(user.is_verified);

        let second = &list.medias[1];
        assert_eq!(second.id, "2002");
        assert_eq!(second.media_type, MediaType::Carousel);
        assert!(second.caption.is_none());
        assert_eq!(second.carousel.len(), 1);
        assert_eq!(second.carousel[0].media_type, MediaType::Video);
        assert_eq!(second.carousel[0].video_url.as_deref(), Some("https://cdn/v.mp4"));
    }

    #[test]
    fn test_empty_list() {
        let raw: MediaListResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        let list = MediaList::from(raw);
        assert!(list.medias.is_empty());
        assert_eq!(list.page_size, 0);
        assert!(!list.more_available);
    }

    #[test]
    fn test_unknown_media_type() {
        assert_eq!(MediaType::from(42), MediaType::Unknown);
    }
}
