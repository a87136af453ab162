use crate::server::error::ApiError;
use crate::server::AppContext;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use highlights_common::{Error, SearchParams, VideoItem};

pub fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search))
}

async fn health(State(ctx): State<AppContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": ctx.search.provider_name(),
        "filter_enabled": ctx.config.curation.filter_enabled,
    }))
}

/// `GET /api/search?league=&query=`
async fn search(
    State(ctx): State<AppContext>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<VideoItem>>, ApiError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable search query string");
        Error::validation("Query parameter is required")
    })?;

    let params = SearchParams::new(
        single_value(&pairs, "league").unwrap_or_default(),
        single_value(&pairs, "query").unwrap_or_default(),
    );
    let videos = ctx.search.search(&params).await?;
    Ok(Json(videos))
}

/// The value of `key` when it appears exactly once. Repeated keys count as
/// absent.
fn single_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str());
    match (values.next(), values.next()) {
        (Some(value), None) => Some(value),
        _ => None,
    }
}
