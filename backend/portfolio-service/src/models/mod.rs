/// Data models for portfolio-service
///
/// This module defines structures for:
/// - BlogPost: Journal entries with tempo metadata
/// - TimelineMilestone: Career milestones shown on the experience timeline
/// - MediaItem: Playlists, images and videos
/// - ContactSubmission: Messages left through the contact form
///
/// Each entity has a `New*` counterpart holding only the client-supplied
/// fields. Server-assigned fields (`id`, `submittedAt`) exist only on the
/// full record.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod schema;

pub use schema::{
    validate_insert, EntityKind, FieldRule, FieldType, FieldViolation, Insertable,
    InsertableRecord, ValidationError, ViolationCode,
};

// ========================================
// Blog Models
// ========================================

/// Blog post as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    /// Paragraphs separated by blank lines; lines starting with `> ` are quotes
    pub content: String,
    /// Free-text tempo label, e.g. "Fast" or "Adagio"
    pub tempo: String,
    /// Beats per minute matching the tempo label
    pub tempo_value: i32,
    pub image_url: Option<String>,
    /// Estimated reading time in minutes
    pub read_time: i32,
    /// ISO-8601 publication timestamp
    pub published_at: String,
}

/// Client-supplied blog post fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tempo: String,
    pub tempo_value: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    pub read_time: i32,
    pub published_at: String,
}

impl BlogPost {
    pub fn from_new(id: Uuid, new: NewBlogPost) -> Self {
        Self {
            id,
            title: new.title,
            excerpt: new.excerpt,
            content: new.content,
            tempo: new.tempo,
            tempo_value: new.tempo_value,
            image_url: new.image_url,
            read_time: new.read_time,
            published_at: new.published_at,
        }
    }
}

// ========================================
// Timeline Models
// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMilestone {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    /// `None` while the role is ongoing
    pub end_date: Option<String>,
    pub impact: String,
    pub insight: String,
    pub logo_url: Option<String>,
    /// Display position, ascending
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTimelineMilestone {
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub impact: String,
    pub insight: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub order: i32,
}

impl TimelineMilestone {
    pub fn from_new(id: Uuid, new: NewTimelineMilestone) -> Self {
        Self {
            id,
            company: new.company,
            role: new.role,
            start_date: new.start_date,
            end_date: new.end_date,
            impact: new.impact,
            insight: new.insight,
            logo_url: new.logo_url,
            order: new.order,
        }
    }
}

// ========================================
// Media Models
// ========================================

/// Kind of media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Playlist,
    Image,
    Video,
}

impl MediaType {
    pub const VALUES: &'static [&'static str] = &["playlist", "image", "video"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playlist => "playlist",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "playlist" => Some(Self::Playlist),
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Display aspect ratio of a media card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:5")]
    Portrait,
}

impl AspectRatio {
    pub const VALUES: &'static [&'static str] = &["1:1", "16:9", "4:5"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Widescreen => "16:9",
            Self::Portrait => "4:5",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1:1" => Some(Self::Square),
            "16:9" => Some(Self::Widescreen),
            "4:5" => Some(Self::Portrait),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    /// Musical key the item is filed under, e.g. "E Major"
    pub musical_key: Option<String>,
    pub mood: Option<String>,
    pub thumbnail_url: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub musical_key: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<AspectRatio>,
}

impl MediaItem {
    pub fn from_new(id: Uuid, new: NewMediaItem) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            media_type: new.media_type,
            url: new.url,
            musical_key: new.musical_key,
            mood: new.mood,
            thumbnail_url: new.thumbnail_url,
            aspect_ratio: new.aspect_ratio,
        }
    }
}

// ========================================
// Contact Models
// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_new(id: Uuid, submitted_at: DateTime<Utc>, new: NewContactSubmission) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            message: new.message,
            submitted_at,
        }
    }
}
