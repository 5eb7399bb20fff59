/// Trending feed service
///
/// Orchestrates one ranking request: fetch the candidate pool, score every
/// article against a single `now`, rank, paginate, and assemble the
/// response. Scores are derived per request — only whole response pages are
/// cached, and only here, never in trending-core.
use chrono::Utc;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use sqlx::PgPool;
use tracing::{debug, error, warn};

use trending_core::{compute_trending_score, rank_and_paginate, ScoringPolicy, ViewerContext};

use crate::db::ArticleRepo;
use crate::error::{AppError, Result};
use crate::models::{RankedArticle, TrendingFeedResponse};

const TRENDING_CACHE_TTL: u64 = 300; // 5 minutes

/// Most recent articles considered per ranking request.
const CANDIDATE_POOL_SIZE: i64 = 500;

/// Trending feed service
pub struct TrendingFeed {
    repo: ArticleRepo,
    redis: Option<ConnectionManager>,
    policy: ScoringPolicy,
}

impl TrendingFeed {
    pub fn new(pool: PgPool, redis: Option<ConnectionManager>) -> Self {
        Self {
            repo: ArticleRepo::new(pool),
            redis,
            policy: ScoringPolicy::default(),
        }
    }

    /// Get one page of the trending feed for a viewer
    pub async fn trending_page(
        &self,
        viewer: &ViewerContext,
        page: u32,
        limit: usize,
    ) -> Result<TrendingFeedResponse> {
        let cache_key = cache_key(viewer, page, limit);

        if let Some(redis) = &self.redis {
            if let Ok(cached) = self.get_from_cache(redis, &cache_key).await {
                debug!("Trending cache hit: {}", cache_key);
                return Ok(cached);
            }
        }

        let candidates = self.repo.list_with_engagement(CANDIDATE_POOL_SIZE).await?;

        // One clock read per request keeps the whole page consistent.
        let now = Utc::now();
        let mut scored = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let score =
                compute_trending_score(&candidate.snapshot, Some(viewer), now, &self.policy)
                    .map_err(|e| {
                        error!(
                            article_id = %candidate.article.id,
                            "Failed to score article: {}", e
                        );
                        AppError::from(e)
                    })?;
            scored.push((candidate, score));
        }

        let ranked = rank_and_paginate(scored, |(_, score)| score.final_score, page, limit)?;

        let articles = ranked
            .items
            .into_iter()
            .map(|(candidate, score)| RankedArticle {
                trending_score: score.final_score,
                likes_count: candidate.snapshot.likes_count,
                comments_count: candidate.snapshot.comments_count,
                shares_count: candidate.snapshot.shares_count,
                polls_count: candidate.snapshot.poll_response_count,
                article: candidate.article,
            })
            .collect();

        let response = TrendingFeedResponse {
            articles,
            total: ranked.total,
            page,
            has_more: ranked.has_more,
        };

        if let Some(redis) = &self.redis {
            if let Err(e) = self.cache_response(redis, &cache_key, &response).await {
                warn!("Failed to cache trending response: {}", e);
            }
        }

        Ok(response)
    }

    async fn get_from_cache(
        &self,
        redis: &ConnectionManager,
        key: &str,
    ) -> Result<TrendingFeedResponse> {
        let mut conn = redis.clone();
        let cached: Option<String> = conn.get(key).await.map_err(|e| {
            warn!("Redis GET failed: {}", e);
            AppError::Cache("Cache read failed".to_string())
        })?;

        match cached {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                error!("Failed to deserialize cached trending page: {}", e);
                AppError::Cache("Cache deserialization failed".to_string())
            }),
            None => Err(AppError::Cache("Cache miss".to_string())),
        }
    }

    async fn cache_response(
        &self,
        redis: &ConnectionManager,
        key: &str,
        response: &TrendingFeedResponse,
    ) -> Result<()> {
        let mut conn = redis.clone();
        let json = serde_json::to_string(response)?;

        let _: () = conn
            .set_ex(key, json, TRENDING_CACHE_TTL)
            .await
            .map_err(|e| {
                warn!("Redis SET failed: {}", e);
                AppError::Cache("Cache write failed".to_string())
            })?;

        Ok(())
    }
}

fn cache_key(viewer: &ViewerContext, page: u32, limit: usize) -> String {
    format!(
        "glocal:trending:{}:{}:{}:{}",
        viewer.city.as_deref().unwrap_or("-").to_lowercase(),
        viewer.country.as_deref().unwrap_or("-").to_lowercase(),
        page,
        limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_case_insensitive_per_viewer_page() {
        let viewer = ViewerContext {
            city: Some("Pune".to_string()),
            country: Some("India".to_string()),
        };

        assert_eq!(cache_key(&viewer, 2, 20), "glocal:trending:pune:india:2:20");
    }

    #[test]
    fn cache_key_marks_missing_fields() {
        let viewer = ViewerContext::default();

        assert_eq!(cache_key(&viewer, 1, 20), "glocal:trending:-:-:1:20");
    }
}
