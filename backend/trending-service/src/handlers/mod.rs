pub mod trending;

pub use trending::{build_cors, trending_news};
