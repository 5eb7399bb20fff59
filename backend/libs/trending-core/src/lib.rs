//! Trending score computation for TheGlocal content feed
//!
//! Turns per-article engagement snapshots into a single ranking score:
//! weighted engagement, exponential time decay, and a locality boost for
//! content matching the viewer's city or country. The crate is pure — no
//! I/O, no clock reads — so callers supply `now` and results are
//! deterministic.

mod error;
mod policy;
mod rank;
mod score;

pub use error::ScoreError;
pub use policy::ScoringPolicy;
pub use rank::{rank_and_paginate, Page};
pub use score::{
    compute_trending_score, parse_published_at, EngagementSnapshot, TrendingScore, ViewerContext,
};
