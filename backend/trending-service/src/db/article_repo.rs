use chrono::{DateTime, Utc};
/// Article repository
///
/// Database operations supplying the ranking universe: recent articles with
/// their per-item engagement counts. Row shapes stop here — everything is
/// mapped into the typed snapshot before scoring sees it.
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use trending_core::EngagementSnapshot;

use crate::error::{AppError, Result};
use crate::models::{Article, ArticleEngagement};

type ArticleRow = (
    Uuid,              // id
    String,            // title
    Option<String>,    // summary
    Option<String>,    // url
    Option<String>,    // image_url
    Option<String>,    // source_name
    Option<String>,    // location_city
    Option<String>,    // location_country
    DateTime<Utc>,     // published_at
    i64,               // likes_count
    i64,               // comments_count
    i64,               // shares_count
    i64,               // polls_count
);

/// Article Repository
pub struct ArticleRepo {
    pool: PgPool,
}

impl ArticleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the most recent articles with their engagement counts
    ///
    /// `limit` bounds the candidate pool handed to the scorer; ranking is
    /// computed in memory over this window.
    pub async fn list_with_engagement(&self, limit: i64) -> Result<Vec<ArticleEngagement>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT
                a.id,
                a.title,
                a.summary,
                a.url,
                a.image_url,
                a.source_name,
                a.location_city,
                a.location_country,
                a.published_at,
                (SELECT COUNT(*) FROM article_likes l WHERE l.article_id = a.id) AS likes_count,
                (SELECT COUNT(*) FROM article_comments c WHERE c.article_id = a.id) AS comments_count,
                (SELECT COUNT(*) FROM article_shares s WHERE s.article_id = a.id) AS shares_count,
                (SELECT COUNT(*)
                    FROM poll_votes v
                    JOIN article_polls p ON v.poll_id = p.id
                    WHERE p.article_id = a.id) AS polls_count
            FROM news_articles a
            WHERE a.deleted_at IS NULL
            ORDER BY a.published_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch articles with engagement: {}", e);
            AppError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(map_row).collect())
    }
}

fn map_row(row: ArticleRow) -> ArticleEngagement {
    let (
        id,
        title,
        summary,
        url,
        image_url,
        source_name,
        location_city,
        location_country,
        published_at,
        likes_count,
        comments_count,
        shares_count,
        polls_count,
    ) = row;

    ArticleEngagement {
        snapshot: EngagementSnapshot {
            likes_count,
            comments_count,
            shares_count,
            poll_response_count: polls_count,
            published_at,
            location_city: location_city.clone(),
            location_country: location_country.clone(),
        },
        article: Article {
            id,
            title,
            summary,
            url,
            image_url,
            source_name,
            location_city,
            location_country,
            published_at,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_counts_into_snapshot() {
        let published = "2025-03-15T11:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let row: ArticleRow = (
            Uuid::new_v4(),
            "Monsoon relief fund announced".to_string(),
            None,
            None,
            None,
            Some("The Glocal Desk".to_string()),
            Some("Pune".to_string()),
            Some("India".to_string()),
            published,
            10,
            5,
            2,
            7,
        );

        let mapped = map_row(row);

        assert_eq!(mapped.snapshot.likes_count, 10);
        assert_eq!(mapped.snapshot.comments_count, 5);
        assert_eq!(mapped.snapshot.shares_count, 2);
        assert_eq!(mapped.snapshot.poll_response_count, 7);
        assert_eq!(mapped.snapshot.published_at, published);
        assert_eq!(mapped.article.location_city.as_deref(), Some("Pune"));
        assert_eq!(mapped.snapshot.location_city.as_deref(), Some("Pune"));
    }
}
