/// Scoring policy constants
///
/// Comments signal the highest engagement effort (2x), shares indicate
/// amplification (1.5x), likes and poll responses are lowest-effort signals
/// (1x). The decay constant 0.08/hour gives a half-life of roughly 8.7
/// hours. Ranking compatibility depends on these exact values, so production
/// call sites use `ScoringPolicy::default()`; tests may build their own.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringPolicy {
    pub like_weight: f64,
    pub comment_weight: f64,
    pub share_weight: f64,
    pub poll_response_weight: f64,
    /// Exponential decay rate per hour of content age.
    pub decay_per_hour: f64,
    /// Multiplier when viewer and content share a city.
    pub city_boost: f64,
    /// Multiplier when viewer and content share a country (no city match).
    pub country_boost: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            like_weight: 1.0,
            comment_weight: 2.0,
            share_weight: 1.5,
            poll_response_weight: 1.0,
            decay_per_hour: 0.08,
            city_boost: 1.2,
            country_boost: 1.1,
        }
    }
}
