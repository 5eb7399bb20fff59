use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::policy::ScoringPolicy;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Engagement counts and timestamps for one content item at query time
///
/// Counts arrive as `i64` because that is what SQL `COUNT(*)` yields;
/// negatives are rejected at scoring time rather than silently clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
    pub poll_response_count: i64,
    pub published_at: DateTime<Utc>,
    pub location_city: Option<String>,
    pub location_country: Option<String>,
}

/// Requesting viewer's declared location
///
/// Absence of a field disables the corresponding boost tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Derived ranking score, recomputed per request and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendingScore {
    pub base_score: f64,
    pub time_decay_factor: f64,
    pub locality_boost_factor: f64,
    pub final_score: f64,
}

/// Parse an RFC 3339 `published_at` from callers holding raw text timestamps.
pub fn parse_published_at(raw: &str) -> Result<DateTime<Utc>, ScoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ScoreError::InvalidTimestamp(raw.to_string()))
}

/// Compute the trending score for one content item
///
/// Deterministic and side-effect-free for fixed inputs and a fixed `now`.
/// The final score is finite and non-negative for all valid inputs; content
/// published in the future (clock skew) is treated as age zero, so its decay
/// factor is exactly 1.0.
pub fn compute_trending_score(
    snapshot: &EngagementSnapshot,
    viewer: Option<&ViewerContext>,
    now: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> Result<TrendingScore, ScoreError> {
    validate_counts(snapshot)?;

    let base_score = snapshot.likes_count as f64 * policy.like_weight
        + snapshot.comments_count as f64 * policy.comment_weight
        + snapshot.shares_count as f64 * policy.share_weight
        + snapshot.poll_response_count as f64 * policy.poll_response_weight;

    let age_hours = hours_since_published(snapshot.published_at, now);
    let time_decay_factor = (-policy.decay_per_hour * age_hours).exp();

    let locality_boost_factor = locality_boost(snapshot, viewer, policy);

    Ok(TrendingScore {
        base_score,
        time_decay_factor,
        locality_boost_factor,
        final_score: base_score * time_decay_factor * locality_boost_factor,
    })
}

fn validate_counts(snapshot: &EngagementSnapshot) -> Result<(), ScoreError> {
    let fields = [
        ("likes", snapshot.likes_count),
        ("comments", snapshot.comments_count),
        ("shares", snapshot.shares_count),
        ("poll_responses", snapshot.poll_response_count),
    ];
    for (field, value) in fields {
        if value < 0 {
            return Err(ScoreError::NegativeCount { field, value });
        }
    }
    Ok(())
}

/// Fractional hours since publication, clamped at zero for future timestamps.
fn hours_since_published(published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_millis = now.signed_duration_since(published_at).num_milliseconds();
    (age_millis as f64 / MILLIS_PER_HOUR).max(0.0)
}

/// City match wins over country match even when both would apply; the data
/// may be inconsistent, so the precedence stays explicit.
fn locality_boost(
    snapshot: &EngagementSnapshot,
    viewer: Option<&ViewerContext>,
    policy: &ScoringPolicy,
) -> f64 {
    let Some(viewer) = viewer else {
        return 1.0;
    };

    if let (Some(viewer_city), Some(content_city)) =
        (viewer.city.as_deref(), snapshot.location_city.as_deref())
    {
        if viewer_city.eq_ignore_ascii_case(content_city) {
            return policy.city_boost;
        }
    }

    if let (Some(viewer_country), Some(content_country)) = (
        viewer.country.as_deref(),
        snapshot.location_country.as_deref(),
    ) {
        if viewer_country.eq_ignore_ascii_case(content_country) {
            return policy.country_boost;
        }
    }

    1.0
}
