/// Trending API handlers
///
/// HTTP endpoint for the locality-aware trending news feed
use actix_cors::Cors;
use actix_web::{post, web, HttpResponse};
use redis::aio::ConnectionManager;
use sqlx::PgPool;
use tracing::debug;

use trending_core::ViewerContext;

use crate::error::{AppError, Result};
use crate::models::TrendingRequest;
use crate::services::TrendingFeed;

/// POST /api/v1/news/trending
///
/// Ranks recent articles by engagement, recency, and locality match with
/// the requesting viewer.
#[post("/api/v1/news/trending")]
pub async fn trending_news(
    body: web::Json<TrendingRequest>,
    pool: web::Data<PgPool>,
    redis: Option<web::Data<ConnectionManager>>,
) -> Result<HttpResponse> {
    let city = body.city.as_deref().map(str::trim).unwrap_or("");
    let country = body.country.as_deref().map(str::trim).unwrap_or("");

    if city.is_empty() || country.is_empty() {
        return Err(AppError::BadRequest(
            "City and country are required".to_string(),
        ));
    }

    if body.page < 1 {
        return Err(AppError::BadRequest("page must be >= 1".to_string()));
    }

    let limit = body.limit.clamp(1, 100);

    debug!(
        "Trending request: city={}, country={}, page={}, limit={}",
        city, country, body.page, limit
    );

    let viewer = ViewerContext {
        city: Some(city.to_string()),
        country: Some(country.to_string()),
    };

    let service = TrendingFeed::new(
        pool.get_ref().clone(),
        redis.as_ref().map(|r| r.get_ref().clone()),
    );

    let response = service.trending_page(&viewer, body.page, limit).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Build the CORS middleware from a comma-separated origin list
///
/// A "*" entry allows any origin and answers preflight with a literal
/// wildcard, which is what browser clients of the public feed expect.
pub fn build_cors(allowed_origins: &str) -> Cors {
    let mut cors = Cors::default();
    let mut wildcard = false;
    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if origin.is_empty() {
            continue;
        }
        if origin == "*" {
            wildcard = true;
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    if wildcard {
        cors = cors.send_wildcard();
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}
