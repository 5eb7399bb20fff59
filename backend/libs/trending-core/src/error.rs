use thiserror::Error;

/// Errors surfaced by scoring and ranking
///
/// Invalid input is never coerced or clamped (apart from the documented
/// clock-skew clamp on content age): a negative count or a page below 1 is
/// an upstream bug that must fail loudly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("negative {field} count: {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("invalid published_at timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("page must be >= 1, got {0}")]
    InvalidPage(u32),
}
