pub mod trending;

pub use trending::TrendingFeed;
