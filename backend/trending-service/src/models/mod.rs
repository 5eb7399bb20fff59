use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trending_core::EngagementSnapshot;

/// Stored news article record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_country: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Article plus its engagement snapshot, assembled at the data boundary
#[derive(Debug, Clone)]
pub struct ArticleEngagement {
    pub article: Article,
    pub snapshot: EngagementSnapshot,
}

/// Request body for POST /api/v1/news/trending
#[derive(Debug, Deserialize)]
pub struct TrendingRequest {
    pub city: Option<String>,
    pub country: Option<String>,

    /// 1-indexed page (default: 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size (default: 20, max: 100)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> usize {
    20
}

/// Article augmented with its computed score and engagement counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub trending_score: f64,
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
    pub polls_count: i64,
}

/// Response model for the trending feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingFeedResponse {
    pub articles: Vec<RankedArticle>,
    pub total: usize,
    pub page: u32,
    pub has_more: bool,
}
